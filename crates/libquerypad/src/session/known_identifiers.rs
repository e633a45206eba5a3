/// Session-lifetime cache of the identifiers the by-id flow accepts.
///
/// Filled on demand from the fixed identifiers document, kept for the rest
/// of the session, and refreshed only by another explicit fetch. Never
/// invalidated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KnownIdentifiers {
    ids: Vec<String>,
}
impl KnownIdentifiers {
    /// Exact, case-sensitive membership test.
    pub fn contains(&self, identifier: &str) -> bool {
        self.ids.iter().any(|id| id == identifier)
    }

    pub fn ids(&self) -> &[String] {
        self.ids.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers matching `input` as a case-insensitive substring, in the
    /// cached order. An empty input matches every identifier.
    pub fn suggestions(&self, input: &str) -> Vec<&str> {
        let needle = input.to_lowercase();
        self.ids
            .iter()
            .filter(|id| id.to_lowercase().contains(&needle))
            .map(|id| id.as_str())
            .collect()
    }

    pub(super) fn fill(&mut self, ids: Vec<String>) {
        self.ids = ids;
    }
}
