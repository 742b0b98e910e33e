use crate::core::errors::PaapiError;
use base64::engine::general_purpose;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use secrecy::{ExposeSecret, Secret};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Request path every signed request is issued against.
pub const REQUEST_PATH: &str = "/onca/xml";

/// RFC 3986 unreserved characters are left alone, everything else is escaped.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Signer trait for request authentication
///
/// Implementations receive the endpoint host and the canonical query string
/// and return the value of the `Signature` parameter, already URL-safe.
pub trait Signer: Send + Sync {
    fn sign(&self, host: &str, canonical_query: &str) -> Result<String, PaapiError>;
}

/// HMAC-SHA256 signer over `GET\n{host}\n/onca/xml\n{query}`
pub struct HmacSigner {
    secret_key: Secret<String>,
}

impl HmacSigner {
    pub fn new(secret_key: String) -> Self {
        Self {
            secret_key: Secret::new(secret_key),
        }
    }

    /// Raw base64 digest, before percent-encoding
    fn digest(&self, string_to_sign: &str) -> Result<String, PaapiError> {
        let mut mac = HmacSha256::new_from_slice(self.secret_key.expose_secret().as_bytes())
            .map_err(|e| PaapiError::AuthError(format!("Invalid secret key: {}", e)))?;
        mac.update(string_to_sign.as_bytes());
        Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}

impl Signer for HmacSigner {
    fn sign(&self, host: &str, canonical_query: &str) -> Result<String, PaapiError> {
        if host.is_empty() {
            return Err(PaapiError::InvalidParameters(
                "Endpoint host must not be empty".to_string(),
            ));
        }
        let string_to_sign = string_to_sign(host, canonical_query);
        // base64 output contains '+', '/' and '='
        Ok(percent_encode(&self.digest(&string_to_sign)?))
    }
}

/// The exact text the signature is computed over
pub fn string_to_sign(host: &str, canonical_query: &str) -> String {
    format!("GET\n{}\n{}\n{}", host, REQUEST_PATH, canonical_query)
}

/// Percent-encode a query key or value
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()
}

/// Build the canonical query string.
///
/// Keys and values are percent-encoded, joined as `key=value` and the encoded
/// pairs are sorted by byte value. The result does not depend on input order.
pub fn canonicalize<'a, I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    K: AsRef<str> + ?Sized + 'a,
    V: AsRef<str> + ?Sized + 'a,
{
    let mut pairs: Vec<String> = params
        .into_iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                percent_encode(k.as_ref()),
                percent_encode(v.as_ref())
            )
        })
        .collect();
    pairs.sort_unstable();
    pairs.join("&")
}

/// Format a request timestamp: `YYYY-MM-DDThh:mm:ss.000Z`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
}

/// Current request timestamp, generated at call time
pub fn get_timestamp() -> String {
    format_timestamp(Utc::now())
}
