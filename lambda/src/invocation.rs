use serde_json::Value;

/// One execution of the function, independent of the Lambda calling
/// convention.
///
/// The event is carried along untouched and only ever logged, at debug level,
/// next to the request id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    event: Value,
    request_id: String,
}

impl Invocation {
    /// Create an invocation from a raw event and the platform's request id.
    pub fn new(event: Value, request_id: impl Into<String>) -> Self {
        Self {
            event,
            request_id: request_id.into(),
        }
    }

    /// The event payload, as received.
    pub fn event(&self) -> &Value {
        &self.event
    }

    /// The platform-assigned request id.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}
