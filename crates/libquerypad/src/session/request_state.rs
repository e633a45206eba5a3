use crate::client::Response;

/// Lifecycle of one flow's most recent request.
///
/// Re-entrant: a new request started from `Succeeded` or `Failed` returns
/// the flow to `Loading`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestState {
    /// No request has been issued on this flow yet.
    #[default]
    Idle,

    /// A request has been dispatched and has not resolved.
    Loading,

    /// The transport resolved. The envelope is absent when the response
    /// body was empty; an envelope carrying error records still lands here,
    /// with the first message surfaced through the flow's error slot.
    Succeeded(Option<Response>),

    /// The transport failed; carries the synthesized network-error message.
    Failed(String),
}
impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
