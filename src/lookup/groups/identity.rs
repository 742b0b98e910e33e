use super::ItemView;

/// Item id and variation parent id
pub trait ItemIdentity<'a>: ItemView<'a> {
    fn asin(&self) -> Option<&'a str> {
        self.element().text("ASIN")
    }

    /// `None` when the item has no variation parent
    fn parent_asin(&self) -> Option<&'a str> {
        self.element().text("ParentASIN")
    }
}
