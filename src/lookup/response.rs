use crate::core::errors::{ApiFault, PaapiError};
use crate::core::xml::{parse_flag, parse_number, Document, Element};
use crate::lookup::fault::{ErrorElement, FaultEnvelope};
use crate::lookup::shapes::ItemShape;
use crate::lookup::PRODUCT_NS;
use serde::Serialize;
use tracing::{debug, warn};

/// A `Name`/`Value` attribute pair from the operation request echo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameValue {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// The `<OperationRequest>` block: how the server saw the call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperationRequest {
    pub request_id: Option<String>,
    pub headers: Vec<NameValue>,
    pub arguments: Vec<NameValue>,
    /// Seconds spent by the server
    pub request_processing_time: Option<f64>,
}

impl OperationRequest {
    fn from_element(element: Element<'_>) -> Self {
        Self {
            request_id: owned(element.text("RequestId")),
            headers: name_values(element, "HTTPHeaders/Header"),
            arguments: name_values(element, "Arguments/Argument"),
            request_processing_time: element
                .text("RequestProcessingTime")
                .and_then(parse_number),
        }
    }
}

/// The `<Items>/<Request>` echo: the lookup as the server understood it,
/// together with the item ids it could not resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestEcho {
    pub is_valid: Option<bool>,
    pub id_type: Option<String>,
    pub item_ids: Vec<String>,
    pub response_groups: Vec<String>,
    pub variation_page: Option<String>,
    /// Item-level faults, never raised automatically
    pub errors: Vec<ApiFault>,
}

impl RequestEcho {
    fn from_element(element: Element<'_>) -> Self {
        let lookup = element.first("ItemLookupRequest");
        let item_ids: Vec<String> = lookup.texts("ItemId").into_iter().map(str::to_string).collect();

        let errors = element
            .query("Errors/Error")
            .into_iter()
            .filter_map(|e| ErrorElement::new(e).as_error())
            .map(|fault| match matching_item_id(&item_ids, &fault.message) {
                Some(id) => fault.with_item_id(id),
                None => fault,
            })
            .collect();

        Self {
            is_valid: element.text("IsValid").map(parse_flag),
            id_type: owned(lookup.text("IdType")),
            response_groups: lookup
                .texts("ResponseGroup")
                .into_iter()
                .map(str::to_string)
                .collect(),
            variation_page: owned(lookup.text("VariationPage")),
            item_ids,
            errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Fail with the first item-level fault, if any
    pub fn raise_for_errors(&self) -> Result<(), PaapiError> {
        match self.errors.first() {
            Some(fault) => Err(PaapiError::ItemFault(fault.clone())),
            None => Ok(()),
        }
    }
}

/// Parsed `ItemLookup` response.
///
/// Owns the document; items are wrapped on demand in whichever shape the
/// caller asks for, in document order.
#[derive(Debug)]
pub struct ItemLookupResponse {
    document: Document,
    operation_request: OperationRequest,
    request: RequestEcho,
}

impl ItemLookupResponse {
    /// Parse a raw response body.
    ///
    /// Fails with `MalformedResponse` when the body is not XML and with
    /// `EnvelopeFault` when the server rejected the whole call. Item-level
    /// faults do not fail the parse; see [`Self::errors`].
    pub fn parse(xml: &[u8]) -> Result<Self, PaapiError> {
        let document = Document::parse(xml)?;
        FaultEnvelope::new(&document).raise_for_error()?;

        let root = document.root(PRODUCT_NS);
        if !root.in_namespace() {
            warn!(
                root = root.name().unwrap_or_default(),
                "response root is outside the product namespace"
            );
        }

        let operation_request = OperationRequest::from_element(root.first("OperationRequest"));
        let request = RequestEcho::from_element(root.first("Items/Request"));
        debug!(
            items = root.query("Items/Item").len(),
            item_errors = request.errors.len(),
            "parsed ItemLookup response"
        );

        Ok(Self {
            document,
            operation_request,
            request,
        })
    }

    fn item_elements(&self) -> Vec<Element<'_>> {
        self.document.root(PRODUCT_NS).query("Items/Item")
    }

    /// Every returned item, wrapped in shape `S`
    pub fn items<'a, S: ItemShape<'a>>(&'a self) -> Vec<S> {
        self.item_elements()
            .into_iter()
            .map(S::from_element)
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.item_elements().len()
    }

    pub const fn request(&self) -> &RequestEcho {
        &self.request
    }

    pub const fn operation_request(&self) -> &OperationRequest {
        &self.operation_request
    }

    /// Item-level faults reported for the requested ids
    pub fn errors(&self) -> &[ApiFault] {
        &self.request.errors
    }

    pub fn raise_for_item_errors(&self) -> Result<(), PaapiError> {
        self.request.raise_for_errors()
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }
}

fn owned(text: Option<&str>) -> Option<String> {
    text.map(str::to_string)
}

fn name_values(element: Element<'_>, path: &str) -> Vec<NameValue> {
    element
        .query(path)
        .into_iter()
        .map(|pair| NameValue {
            name: owned(pair.attribute("Name")),
            value: owned(pair.attribute("Value")),
        })
        .collect()
}

/// The requested id an item-level error message refers to.
///
/// Ids must appear as whole tokens; the longest match wins when one id is a
/// prefix of another (`SKU1` and `SKU12`).
fn matching_item_id<'i>(item_ids: &'i [String], message: &str) -> Option<&'i str> {
    item_ids
        .iter()
        .map(String::as_str)
        .filter(|id| !id.is_empty() && contains_token(message, id))
        .max_by_key(|id| id.len())
}

fn contains_token(message: &str, id: &str) -> bool {
    message.match_indices(id).any(|(start, _)| {
        let before = message[..start].chars().next_back();
        let after = message[start + id.len()..].chars().next();
        !before.is_some_and(is_id_char) && !after.is_some_and(is_id_char)
    })
}

fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_')
}
