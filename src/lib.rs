pub mod client;
pub mod core;
pub mod lookup;

pub use client::ProductClient;
pub use crate::core::{
    config::ClientConfig,
    errors::{ApiFault, PaapiError},
    types::*,
};

/// Everything needed to issue a lookup and read its items
pub mod prelude {
    pub use crate::client::ProductClient;
    pub use crate::core::config::ClientConfig;
    pub use crate::core::errors::{ApiFault, PaapiError};
    pub use crate::core::types::{Marketplace, ResponseGroup};
    pub use crate::lookup::groups::{
        BrowseNodes, ImageSize, ImageSlots, Images, ItemAttributes, ItemIdentity, ItemLinks,
        ItemView, OfferSummary, Offers, SalesRank,
    };
    pub use crate::lookup::{
        Item, ItemLookupRequest, ItemLookupResponse, ItemShape, Large, Medium, OfferFull, Small,
    };
}
