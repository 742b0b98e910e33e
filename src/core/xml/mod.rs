//! Namespace-aware read-only XML tree and the element view used by every parser.
pub mod document;
pub mod element;
mod path;

pub use document::Document;
pub use element::{parse_flag, parse_number, parse_price, Element};
