/// Kernel - transport and authentication for signed requests
///
/// The kernel holds everything that is independent of a particular operation:
///
/// ## Transport Layer
/// - `Transport`: the single blocking GET the library performs
/// - `ReqwestTransport`: reqwest-backed implementation
///
/// ## Authentication
/// - `canonicalize`: deterministic, byte-sorted query string
/// - `Signer` / `HmacSigner`: HMAC-SHA256 request signature
///
/// ## Diagnostics
/// - `ResponseRecorder`: optional on-disk copy of raw response bodies
///
/// # Example
/// ```rust,no_run
/// use paapi::core::kernel::*;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let params = [("Operation", "ItemLookup"), ("ItemId", "B00FRIQEDW")];
/// let canonical = canonicalize(params.iter().map(|(k, v)| (*k, *v)));
/// let signature = HmacSigner::new("secret".to_string())
///     .sign("webservices.amazon.com", &canonical)?;
///
/// let transport = ReqwestTransport::new()?;
/// let url = format!("http://webservices.amazon.com/onca/xml?{}&Signature={}", canonical, signature);
/// let body = transport.get(&url).await?;
/// # Ok(())
/// # }
/// ```
pub mod recorder;
pub mod signer;
pub mod transport;

pub use recorder::ResponseRecorder;
pub use signer::{
    canonicalize, format_timestamp, get_timestamp, percent_encode, HmacSigner, Signer,
    REQUEST_PATH,
};
pub use transport::{ReqwestTransport, Transport, TransportBuilder, TransportConfig};
