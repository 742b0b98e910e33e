//! Response-group capabilities.
//!
//! Each trait reads only the subtree its response group contributes to an
//! `<Item>` and has a default implementation for every accessor, so a shape
//! opts in with an empty `impl`. When the server did not return the group,
//! or the item lacks a node, accessors yield `None` or an empty collection.
//!
//! Two traits defining the same accessor (for example two offer-bearing
//! groups) cannot both be called on one shape: the compiler rejects the
//! ambiguous method call.

mod attributes;
mod browse_nodes;
mod identity;
mod images;
mod links;
mod offers;
mod summary;

use crate::core::xml::Element;

pub use attributes::{Dimensions, ItemAttributes};
pub use browse_nodes::{BrowseNode, BrowseNodeChain, BrowseNodes};
pub use identity::ItemIdentity;
pub use images::{Image, ImageSet, ImageSize, ImageSlots, ImageSnapshot, Images};
pub use links::{ItemLink, ItemLinks};
pub use offers::{Offer, OfferListing, Offers};
pub use summary::{OfferSummary, SalesRank};

/// Access to the `<Item>` element a shape wraps
pub trait ItemView<'a> {
    fn element(&self) -> Element<'a>;
}
