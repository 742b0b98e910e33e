use super::ItemView;
use crate::core::xml::Element;

/// The current listing of an offer.
///
/// Each field is read independently; a missing `Price` does not affect
/// `IsEligibleForPrime` and so on.
#[derive(Debug, Clone, Copy)]
pub struct OfferListing<'a> {
    element: Element<'a>,
}

impl<'a> OfferListing<'a> {
    pub const fn new(element: Element<'a>) -> Self {
        Self { element }
    }

    pub fn is_present(&self) -> bool {
        self.element.is_present()
    }

    pub fn offer_listing_id(&self) -> Option<&'a str> {
        self.element.text("OfferListingId")
    }

    pub fn price(&self) -> Option<f64> {
        self.element.float("Price/FormattedPrice")
    }

    pub fn formatted_price(&self) -> Option<&'a str> {
        self.element.text("Price/FormattedPrice")
    }

    pub fn currency_code(&self) -> Option<&'a str> {
        self.element.text("Price/CurrencyCode")
    }

    pub fn amount_saved(&self) -> Option<f64> {
        self.element.float("AmountSaved/FormattedPrice")
    }

    pub fn percentage_saved(&self) -> Option<i64> {
        self.element.int("PercentageSaved")
    }

    pub fn availability(&self) -> Option<&'a str> {
        self.element.text("Availability")
    }

    pub fn availability_type(&self) -> Option<&'a str> {
        self.element
            .text("AvailabilityAttributes/AvailabilityType")
    }

    pub fn availability_minimum_hours(&self) -> Option<u64> {
        self.element
            .uint("AvailabilityAttributes/MinimumHours")
    }

    pub fn availability_maximum_hours(&self) -> Option<u64> {
        self.element
            .uint("AvailabilityAttributes/MaximumHours")
    }

    /// Expedited ("super saver") shipping eligibility
    pub fn is_eligible_for_super_saver_shipping(&self) -> Option<bool> {
        self.element.flag("IsEligibleForSuperSaverShipping")
    }

    pub fn is_eligible_for_prime(&self) -> Option<bool> {
        self.element.flag("IsEligibleForPrime")
    }
}

/// One `<Offer>` of an item
#[derive(Debug, Clone, Copy)]
pub struct Offer<'a> {
    element: Element<'a>,
}

impl<'a> Offer<'a> {
    pub const fn new(element: Element<'a>) -> Self {
        Self { element }
    }

    pub fn condition(&self) -> Option<&'a str> {
        self.element.text("OfferAttributes/Condition")
    }

    pub fn merchant_name(&self) -> Option<&'a str> {
        self.element.text("Merchant/Name")
    }

    /// The server returns a single listing per offer (the lowest priced one).
    /// An offer without a listing yields an absent listing.
    pub fn offer_listing(&self) -> OfferListing<'a> {
        OfferListing::new(self.element.first("OfferListing"))
    }
}

/// `Offers` / `OfferFull` response groups
pub trait Offers<'a>: ItemView<'a> {
    fn total_offers(&self) -> Option<u64> {
        self.element().uint("Offers/TotalOffers")
    }

    fn total_offer_pages(&self) -> Option<u64> {
        self.element().uint("Offers/TotalOfferPages")
    }

    fn more_offers_url(&self) -> Option<&'a str> {
        self.element().text("Offers/MoreOffersUrl")
    }

    fn offers(&self) -> Vec<Offer<'a>> {
        self.element()
            .query("Offers/Offer")
            .into_iter()
            .map(Offer::new)
            .collect()
    }
}
