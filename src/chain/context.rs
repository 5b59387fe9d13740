use std::collections::HashMap;

use nanoid::nanoid;

/// Mutable per-request state, opaque to the chain engine.
///
/// Owned exclusively by the request's lifetime and passed by mutable
/// reference through every plugin invocation. Plugins communicate with
/// each other through the attribute map and fill the response fields.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    attributes: HashMap<String, String>,
    pub response_status: Option<u16>,
    pub response_body: Option<Vec<u8>>,
}

impl RequestContext {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            request_id: nanoid!(),
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            attributes: HashMap::new(),
            response_status: None,
            response_body: None,
        }
    }

    pub fn attribute(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn header(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
