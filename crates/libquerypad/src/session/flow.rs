use crate::client::Response;
use crate::client::TransportError;
use crate::document;
use crate::schema::EntitySchema;
use crate::selection::FieldSelection;
use crate::session::PendingRequest;
use crate::session::RequestState;

/// Per-flow state: the field selection, the request lifecycle, the frozen
/// query text of the most recent dispatch, this flow's error slot, and the
/// sequence counter that orders overlapping requests.
#[derive(Clone, Debug, PartialEq)]
pub struct Flow {
    pub(super) error: Option<String>,
    pub(super) frozen_query: Option<String>,
    pub(super) latest_seq: u64,
    pub(super) request_state: RequestState,
    pub(super) selection: FieldSelection,
}
impl Flow {
    pub(super) fn new(schema: &'static EntitySchema) -> Self {
        Self {
            error: None,
            frozen_query: None,
            latest_seq: 0,
            request_state: RequestState::Idle,
            selection: FieldSelection::new(schema),
        }
    }

    /// Transition to `Loading`: clear the error slot, freeze the document
    /// built from the current selection, and issue the next sequence
    /// number. The caller is responsible for validating preconditions
    /// before calling this.
    pub(super) fn begin(
        &mut self,
        variables: Option<serde_json::Value>,
    ) -> PendingRequest {
        let query = document::build(&self.selection);
        self.error = None;
        self.frozen_query = Some(query.clone());
        self.latest_seq += 1;
        self.request_state = RequestState::Loading;

        PendingRequest {
            query,
            seq: self.latest_seq,
            variables,
        }
    }

    /// Apply a resolved request to this flow. If a newer request has been
    /// issued since `seq`, the resolution is stale and discarded.
    pub(super) fn complete(
        &mut self,
        seq: u64,
        outcome: Result<Option<Response>, TransportError>,
    ) {
        if seq != self.latest_seq {
            log::debug!(
                "Discarding a stale resolution of request #{seq} on the \
                `{}` flow; request #{} has been issued since.",
                self.selection.schema().name(),
                self.latest_seq,
            );
            return;
        }

        match outcome {
            Ok(envelope) => {
                if let Some(message) = envelope
                    .as_ref()
                    .and_then(|envelope| envelope.first_error_message())
                {
                    self.error = Some(message.to_string());
                }
                self.request_state = RequestState::Succeeded(envelope);
            },

            Err(transport_error) => {
                let message = format!("network error: {transport_error}");
                self.error = Some(message.clone());
                self.request_state = RequestState::Failed(message);
            },
        }
    }
}
