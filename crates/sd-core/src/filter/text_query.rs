//! Free-text search needle shared by every list view.

/// Case-insensitive substring query.
///
/// An empty query matches everything, so list views can feed the search box
/// straight through without special-casing the blank state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            needle: query.as_ref().trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True when the query is empty or occurs in at least one field.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}
