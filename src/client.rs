use crate::core::config::ClientConfig;
use crate::core::errors::PaapiError;
use crate::core::kernel::{
    canonicalize, get_timestamp, HmacSigner, ReqwestTransport, ResponseRecorder, Signer,
    Transport, REQUEST_PATH,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Value of the fixed `Service` parameter
pub const SERVICE: &str = "AWSECommerceService";

/// Signs and sends operations against the configured marketplace.
///
/// Generic over the transport so tests and callers can substitute their own
/// `GET` implementation; the default is [`ReqwestTransport`].
pub struct ProductClient<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
    signer: Arc<dyn Signer>,
    recorder: Option<ResponseRecorder>,
}

impl ProductClient<ReqwestTransport> {
    /// Client over the default reqwest transport
    pub fn new(config: ClientConfig) -> Result<Self, PaapiError> {
        Self::with_transport(config, ReqwestTransport::new()?)
    }
}

impl<T: Transport> ProductClient<T> {
    /// Client over a caller-supplied transport.
    ///
    /// When the configuration names a response directory it is created here,
    /// once.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, PaapiError> {
        let recorder = config
            .response_dir
            .as_ref()
            .map(ResponseRecorder::init)
            .transpose()?;
        let signer = Arc::new(HmacSigner::new(config.secret_key().to_string()));

        Ok(Self {
            config,
            transport,
            signer,
            recorder,
        })
    }

    /// Replace the request signer
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = signer;
        self
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn recorder(&self) -> Option<&ResponseRecorder> {
        self.recorder.as_ref()
    }

    fn base_params(&self, operation: &str, timestamp: &str) -> BTreeMap<String, String> {
        [
            ("Service", SERVICE),
            ("AWSAccessKeyId", self.config.access_key()),
            ("AssociateTag", self.config.associate_tag.as_str()),
            ("Operation", operation),
            ("Timestamp", timestamp),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    /// Full signed request URL for `operation` at `timestamp`.
    ///
    /// `extra` values replace fixed parameters with the same key, including
    /// `Timestamp`.
    pub fn signed_url(
        &self,
        operation: &str,
        extra: &[(&str, &str)],
        timestamp: &str,
    ) -> Result<String, PaapiError> {
        let mut params = self.base_params(operation, timestamp);
        for (key, value) in extra {
            params.insert((*key).to_string(), (*value).to_string());
        }

        let host = self.config.host();
        let canonical = canonicalize(&params);
        let signature = self.signer.sign(host, &canonical)?;
        debug!(
            host,
            "signed request http://{}{}?{}&Signature=[REDACTED]", host, REQUEST_PATH, canonical
        );

        Ok(format!(
            "http://{}{}?{}&Signature={}",
            host, REQUEST_PATH, canonical, signature
        ))
    }

    /// Sign `operation` with a fresh timestamp, send it and return the raw body.
    ///
    /// Non-2xx responses still return their body. When a response directory
    /// is configured the body is also written there by a background task, so
    /// the call neither waits on nor fails because of that write.
    #[instrument(skip(self, extra), fields(host = %self.config.host(), param_count = extra.len()))]
    pub async fn build_and_send(
        &self,
        operation: &str,
        extra: &[(&str, &str)],
    ) -> Result<Vec<u8>, PaapiError> {
        if !self.config.has_credentials() {
            return Err(PaapiError::AuthError(
                "associate tag, access key and secret key are required".to_string(),
            ));
        }

        let url = self.signed_url(operation, extra, &get_timestamp())?;
        let body = self.transport.get(&url).await?;

        if let Some(recorder) = &self.recorder {
            let recorder = recorder.clone();
            let operation = operation.to_string();
            let recorded = body.clone();
            tokio::spawn(async move {
                recorder.record(&operation, &recorded).await;
            });
        }
        Ok(body)
    }
}

impl<T: Transport> std::fmt::Debug for ProductClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductClient")
            .field("config", &self.config)
            .field("recorder", &self.recorder)
            .finish_non_exhaustive()
    }
}
