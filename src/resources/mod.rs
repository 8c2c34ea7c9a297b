//! One type per API area, each holding a reference to the shared transport.

mod face;
mod face_list;
mod large_face_list;

pub use face::Face;
pub use face_list::FaceList;
pub use large_face_list::LargeFaceList;

pub(crate) use face_list::ListOps;

/// Conditional query-string builder.
///
/// Pairs keep insertion order; encoding is left to the HTTP client.
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair unconditionally.
    pub(crate) fn push(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append a key/value pair only when a value is present.
    pub(crate) fn push_opt(mut self, key: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}
