//! Composite item shapes.
//!
//! A shape is a thin wrapper over one `<Item>` element that opts into a set
//! of response-group capabilities. Pick the shape matching the response
//! groups you requested; accessors for groups the server did not return
//! yield `None`.
//!
//! Custom shapes are declared with [`item_shape!`](crate::item_shape):
//!
//! ```rust
//! use paapi::item_shape;
//! use paapi::lookup::groups::{ItemIdentity, SalesRank};
//!
//! item_shape! {
//!     /// Just the id and the rank
//!     pub struct Ranked: ItemIdentity, SalesRank
//! }
//! ```

use crate::core::xml::Element;
use crate::lookup::groups::{
    BrowseNodes, Images, ItemAttributes, ItemIdentity, ItemLinks, ItemView, OfferSummary, Offers,
    SalesRank,
};

/// Construct a shape over an `<Item>` element
pub trait ItemShape<'a>: ItemView<'a> + Sized {
    fn from_element(element: Element<'a>) -> Self;
}

/// Declare an item shape implementing the listed capability traits.
#[macro_export]
macro_rules! item_shape {
    ($(#[$meta:meta])* $vis:vis struct $name:ident: $($($group:ident)::+),+ $(,)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis struct $name<'a> {
            element: $crate::core::xml::Element<'a>,
        }

        impl<'a> $crate::lookup::groups::ItemView<'a> for $name<'a> {
            fn element(&self) -> $crate::core::xml::Element<'a> {
                self.element
            }
        }

        impl<'a> $crate::lookup::shapes::ItemShape<'a> for $name<'a> {
            fn from_element(element: $crate::core::xml::Element<'a>) -> Self {
                Self { element }
            }
        }

        $(
            impl<'a> $($group)::+<'a> for $name<'a> {}
        )+
    };
}

item_shape! {
    /// Identity only (`ItemIds` response group)
    pub struct Item: ItemIdentity
}

item_shape! {
    /// `Small` response group: identity, links and attributes
    pub struct Small: ItemIdentity, ItemLinks, ItemAttributes
}

item_shape! {
    /// `Medium` response group: `Small` plus offer summary, sales rank and images
    pub struct Medium: ItemIdentity, ItemLinks, ItemAttributes, OfferSummary, SalesRank, Images
}

item_shape! {
    /// `Large` response group: `Medium` plus offers and browse nodes.
    ///
    /// Already covers everything `OfferFull` returns; use it instead of
    /// combining `Large` and `OfferFull`.
    pub struct Large: ItemIdentity, ItemLinks, ItemAttributes, OfferSummary, SalesRank, Images,
        Offers, BrowseNodes
}

item_shape! {
    /// `OfferFull` response group, for use alongside anything but `Large`
    pub struct OfferFull: ItemIdentity, Offers, OfferSummary
}
