use crate::core::errors::{ApiFault, PaapiError};
use crate::core::xml::{Document, Element};
use crate::lookup::FAULT_NS;

/// One `<Error>` element, either from the fault envelope or from the
/// per-item errors of a request echo.
#[derive(Debug, Clone, Copy)]
pub struct ErrorElement<'a> {
    element: Element<'a>,
}

impl<'a> ErrorElement<'a> {
    pub const fn new(element: Element<'a>) -> Self {
        Self { element }
    }

    pub fn code(&self) -> Option<&'a str> {
        self.element.text("Code")
    }

    pub fn message(&self) -> Option<&'a str> {
        self.element.text("Message")
    }

    /// An error is present as soon as it carries a message
    pub fn has_error(&self) -> bool {
        self.message().is_some()
    }

    pub fn as_error(&self) -> Option<ApiFault> {
        let message = self.message()?;
        Some(ApiFault::new(self.code().unwrap_or_default(), message))
    }
}

/// Whole-call fault envelope, such as an invalid signature or throttling.
///
/// Queries are bound to the fault namespace; a regular operation response
/// therefore never reports an error here.
#[derive(Debug, Clone, Copy)]
pub struct FaultEnvelope<'a> {
    root: Element<'a>,
}

impl<'a> FaultEnvelope<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            root: document.root(FAULT_NS),
        }
    }

    pub fn error(&self) -> ErrorElement<'a> {
        ErrorElement::new(self.root.first("Error"))
    }

    pub fn request_id(&self) -> Option<&'a str> {
        self.root.text("RequestID")
    }

    pub fn has_error(&self) -> bool {
        self.error().has_error()
    }

    pub fn as_error(&self) -> Option<ApiFault> {
        let fault = self.error().as_error()?;
        Some(match self.request_id() {
            Some(request_id) => fault.with_request_id(request_id),
            None => fault,
        })
    }

    pub fn raise_for_error(&self) -> Result<(), PaapiError> {
        match self.as_error() {
            Some(fault) => Err(PaapiError::EnvelopeFault(fault)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAULT: &str = r#"<?xml version="1.0"?>
        <ItemLookupErrorResponse xmlns="http://ecs.amazonaws.com/doc/2005-10-05/">
            <Error><Code>AWS.InvalidParameterValue</Code><Message>Foo</Message></Error>
            <RequestID>req-1</RequestID>
        </ItemLookupErrorResponse>"#;

    #[test]
    fn test_fault_envelope_raises() {
        let doc = Document::parse(FAULT.as_bytes()).unwrap();
        let envelope = FaultEnvelope::new(&doc);
        assert!(envelope.has_error());
        assert_eq!(envelope.request_id(), Some("req-1"));

        let err = envelope.raise_for_error().unwrap_err();
        match err {
            PaapiError::EnvelopeFault(fault) => {
                assert_eq!(fault.code, "AWS.InvalidParameterValue");
                assert_eq!(fault.message, "Foo");
                assert_eq!(fault.request_id.as_deref(), Some("req-1"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_product_response_has_no_envelope_fault() {
        let doc = Document::parse(
            br#"<ItemLookupResponse xmlns="http://webservices.amazon.com/AWSECommerceService/2011-08-01">
                <Items><Request><Errors><Error><Code>X</Code><Message>bad id</Message></Error></Errors></Request></Items>
            </ItemLookupResponse>"#,
        )
        .unwrap();
        let envelope = FaultEnvelope::new(&doc);
        assert!(!envelope.has_error());
        assert!(envelope.as_error().is_none());
        assert!(envelope.raise_for_error().is_ok());
    }

    #[test]
    fn test_error_without_message_is_no_error() {
        let doc = Document::parse(
            br#"<R xmlns="http://ecs.amazonaws.com/doc/2005-10-05/"><Error><Code>Only</Code></Error></R>"#,
        )
        .unwrap();
        let envelope = FaultEnvelope::new(&doc);
        assert_eq!(envelope.error().code(), Some("Only"));
        assert!(!envelope.has_error());
        assert!(envelope.raise_for_error().is_ok());
    }
}
