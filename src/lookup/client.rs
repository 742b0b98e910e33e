use crate::client::ProductClient;
use crate::core::errors::PaapiError;
use crate::core::kernel::Transport;
use crate::core::types::ResponseGroup;
use crate::lookup::response::ItemLookupResponse;
use tracing::instrument;

/// Operation name sent as the `Operation` parameter
pub const ITEM_LOOKUP: &str = "ItemLookup";

/// Most item ids a single lookup accepts
pub const MAX_ITEM_IDS: usize = 10;

/// Parameters of one `ItemLookup` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemLookupRequest {
    item_ids: Vec<String>,
    response_groups: Vec<ResponseGroup>,
    id_type: Option<String>,
    extra: Vec<(String, String)>,
}

impl ItemLookupRequest {
    pub fn new<I, S>(item_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            item_ids: item_ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn response_group(mut self, group: impl Into<ResponseGroup>) -> Self {
        self.response_groups.push(group.into());
        self
    }

    #[must_use]
    pub fn response_groups<I, G>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<ResponseGroup>,
    {
        self.response_groups.extend(groups.into_iter().map(Into::into));
        self
    }

    /// `ASIN` (server default), `SKU`, `UPC`, `EAN` or `ISBN`
    #[must_use]
    pub fn id_type(mut self, id_type: impl Into<String>) -> Self {
        self.id_type = Some(id_type.into());
        self
    }

    /// Any further parameter, e.g. `Condition=New`. Overrides fixed parameters.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    pub fn item_ids(&self) -> &[String] {
        &self.item_ids
    }

    pub fn groups(&self) -> &[ResponseGroup] {
        &self.response_groups
    }

    pub fn validate(&self) -> Result<(), PaapiError> {
        if self.item_ids.is_empty() {
            return Err(PaapiError::InvalidParameters(
                "at least one item id is required".to_string(),
            ));
        }
        if self.item_ids.len() > MAX_ITEM_IDS {
            return Err(PaapiError::InvalidParameters(format!(
                "at most {} item ids per lookup, got {}",
                MAX_ITEM_IDS,
                self.item_ids.len()
            )));
        }
        if self.item_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(PaapiError::InvalidParameters(
                "item ids must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Operation-specific parameters, in the order they are applied
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("ItemId".to_string(), self.item_ids.join(","))];
        if !self.response_groups.is_empty() {
            let groups: Vec<&str> = self.response_groups.iter().map(ResponseGroup::as_str).collect();
            params.push(("ResponseGroup".to_string(), groups.join(",")));
        }
        if let Some(id_type) = &self.id_type {
            params.push(("IdType".to_string(), id_type.clone()));
        }
        params.extend(self.extra.iter().cloned());
        params
    }
}

impl<T: Transport> ProductClient<T> {
    /// Send an `ItemLookup` and return the raw body
    #[instrument(skip(self, request), fields(item_count = request.item_ids().len()))]
    pub async fn item_lookup_raw(&self, request: &ItemLookupRequest) -> Result<Vec<u8>, PaapiError> {
        request.validate()?;
        let params = request.to_params();
        let borrowed: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        self.build_and_send(ITEM_LOOKUP, &borrowed).await
    }

    /// Send an `ItemLookup` and parse the response.
    ///
    /// Fails on transport errors, malformed bodies and whole-call faults.
    /// Per-item faults are left on the response.
    pub async fn item_lookup(
        &self,
        request: &ItemLookupRequest,
    ) -> Result<ItemLookupResponse, PaapiError> {
        let body = self.item_lookup_raw(request).await?;
        ItemLookupResponse::parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_are_comma_joined() {
        let request = ItemLookupRequest::new(["B001", "B002"])
            .response_groups([ResponseGroup::Large, ResponseGroup::OfferFull])
            .response_group("VariationSummary")
            .param("Condition", "New");

        assert_eq!(
            request.to_params(),
            vec![
                ("ItemId".to_string(), "B001,B002".to_string()),
                (
                    "ResponseGroup".to_string(),
                    "Large,OfferFull,VariationSummary".to_string()
                ),
                ("Condition".to_string(), "New".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let params = ItemLookupRequest::new(["B001"]).id_type("ASIN").to_params();
        assert!(params.iter().all(|(k, _)| k != "ResponseGroup"));
        assert!(params.contains(&("IdType".to_string(), "ASIN".to_string())));
    }

    #[test]
    fn test_validate() {
        assert!(ItemLookupRequest::new(["B001"]).validate().is_ok());
        assert!(matches!(
            ItemLookupRequest::new(Vec::<String>::new()).validate(),
            Err(PaapiError::InvalidParameters(_))
        ));
        assert!(matches!(
            ItemLookupRequest::new(["B001", " "]).validate(),
            Err(PaapiError::InvalidParameters(_))
        ));
        let too_many: Vec<String> = (0..=MAX_ITEM_IDS).map(|i| format!("B{i:03}")).collect();
        assert!(matches!(
            ItemLookupRequest::new(too_many).validate(),
            Err(PaapiError::InvalidParameters(_))
        ));
    }
}
