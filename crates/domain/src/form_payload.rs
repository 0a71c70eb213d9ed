//! Serialized form field values
//!
//! A payload is captured fresh from the form on every submission and is never
//! reused. Field order and duplicate names are preserved, so multi-selects and
//! repeated checkboxes arrive at the server the way the browser would send them.

use url::form_urlencoded;

/// Content type sent with every encoded payload.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Ordered `(name, value)` pairs of a form's successful controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Fields with an empty name are dropped, as browsers do
    /// for unnamed controls.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.fields.push((name, value.into()));
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First value recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// `application/x-www-form-urlencoded` body (space encoded as `+`).
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for FormPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Self::new();
        for (k, v) in iter {
            payload.push(k, v);
        }
        payload
    }
}
