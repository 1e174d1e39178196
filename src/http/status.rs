use std::collections::HashMap;

/// Mapping from status code to reason phrase.
///
/// Built once before any connection is served and only read afterwards;
/// share it behind an `Arc`. Codes missing from the table have no reason
/// phrase and cannot be encoded.
#[derive(Debug, Clone)]
pub struct StatusTable {
    reasons: HashMap<u16, &'static str>,
}

impl StatusTable {
    /// An empty table. Every lookup fails.
    pub fn empty() -> Self {
        Self {
            reasons: HashMap::new(),
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (u16, &'static str)>) -> Self {
        Self {
            reasons: entries.into_iter().collect(),
        }
    }

    /// Returns the reason phrase for `code`, if the code is known.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::status::StatusTable;
    /// let table = StatusTable::default();
    /// assert_eq!(table.reason(200), Some("OK"));
    /// assert_eq!(table.reason(299), None);
    /// ```
    pub fn reason(&self, code: u16) -> Option<&'static str> {
        self.reasons.get(&code).copied()
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}

impl Default for StatusTable {
    fn default() -> Self {
        Self::from_entries([
            (200, "OK"),
            (201, "Created"),
            (204, "No Content"),
            (400, "Bad Request"),
            (404, "Not Found"),
            (405, "Method Not Allowed"),
            (500, "Internal Server Error"),
        ])
    }
}
