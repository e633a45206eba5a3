/// A dispatch handed back by the session's `begin_*` operations: the frozen
/// document to send, optional variable bindings, and the sequence number
/// that guards its completion against stale overwrites.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRequest {
    pub(super) query: String,
    pub(super) seq: u64,
    pub(super) variables: Option<serde_json::Value>,
}
impl PendingRequest {
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn variables(&self) -> Option<&serde_json::Value> {
        self.variables.as_ref()
    }
}
