use super::ItemView;

/// `OfferSummary` response group: offer counts and lowest price per condition
pub trait OfferSummary<'a>: ItemView<'a> {
    fn lowest_new_price(&self) -> Option<f64> {
        self.element()
            .float("OfferSummary/LowestNewPrice/FormattedPrice")
    }

    fn lowest_used_price(&self) -> Option<f64> {
        self.element()
            .float("OfferSummary/LowestUsedPrice/FormattedPrice")
    }

    fn lowest_collectible_price(&self) -> Option<f64> {
        self.element()
            .float("OfferSummary/LowestCollectiblePrice/FormattedPrice")
    }

    fn lowest_refurbished_price(&self) -> Option<f64> {
        self.element()
            .float("OfferSummary/LowestRefurbishedPrice/FormattedPrice")
    }

    fn total_new(&self) -> Option<u64> {
        self.element().uint("OfferSummary/TotalNew")
    }

    fn total_used(&self) -> Option<u64> {
        self.element().uint("OfferSummary/TotalUsed")
    }

    fn total_collectible(&self) -> Option<u64> {
        self.element().uint("OfferSummary/TotalCollectible")
    }

    fn total_refurbished(&self) -> Option<u64> {
        self.element().uint("OfferSummary/TotalRefurbished")
    }
}

/// `SalesRank` response group
pub trait SalesRank<'a>: ItemView<'a> {
    /// `None` when the item is not ranked
    fn sales_rank(&self) -> Option<u64> {
        self.element().uint("SalesRank")
    }
}
