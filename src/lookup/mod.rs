//! `ItemLookup`: request building, fault detection, response-group
//! capabilities and the response envelope.
//!
//! ```rust,no_run
//! use paapi::prelude::*;
//!
//! # async fn example() -> Result<(), PaapiError> {
//! let client = ProductClient::new(ClientConfig::from_env("PAAPI")?)?;
//! let request = ItemLookupRequest::new(["B00FRIQEDW"]).response_group(ResponseGroup::Large);
//! let response = client.item_lookup(&request).await?;
//! response.raise_for_item_errors()?;
//! for item in response.items::<Large>() {
//!     println!("{:?} {:?}", item.asin(), item.title());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod fault;
pub mod groups;
pub mod response;
pub mod shapes;

/// Namespace of regular operation responses
pub const PRODUCT_NS: &str = "http://webservices.amazon.com/AWSECommerceService/2011-08-01";

/// Namespace of whole-call fault envelopes
pub const FAULT_NS: &str = "http://ecs.amazonaws.com/doc/2005-10-05/";

pub use client::{ItemLookupRequest, ITEM_LOOKUP, MAX_ITEM_IDS};
pub use fault::{ErrorElement, FaultEnvelope};
pub use response::{ItemLookupResponse, NameValue, OperationRequest, RequestEcho};
pub use shapes::{Item, ItemShape, Large, Medium, OfferFull, Small};
