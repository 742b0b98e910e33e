use super::ItemView;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemLink<'a> {
    pub description: &'a str,
    pub url: &'a str,
}

/// Detail page and item link URLs
pub trait ItemLinks<'a>: ItemView<'a> {
    fn detail_page_url(&self) -> Option<&'a str> {
        self.element().text("DetailPageURL")
    }

    /// Links missing either a description or a URL are skipped
    fn item_links(&self) -> Vec<ItemLink<'a>> {
        self.element()
            .query("ItemLinks//ItemLink")
            .into_iter()
            .filter_map(|link| {
                Some(ItemLink {
                    description: link.text("Description")?,
                    url: link.text("URL")?,
                })
            })
            .collect()
    }
}
