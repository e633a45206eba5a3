use crate::client::GraphQlClient;
use crate::client::Response;
use crate::client::TransportError;
use crate::document;
use crate::schema::EntitySchema;
use crate::selection::FieldSelection;
use crate::selection::SelectionError;
use crate::session::KnownIdentifiers;
use crate::session::PendingRequest;
use crate::session::RequestState;
use crate::session::flow::Flow;
use serde_json::json;
use thiserror::Error;

type Result<T> = std::result::Result<T, SessionError>;

/// The whole query-building and execution state of one interactive session.
///
/// Owns two independent flows (the `students` collection query and the
/// `catBreed` by-id query) plus the session's known-identifiers cache.
/// The flows never contend for state: each carries its own selection,
/// request lifecycle, frozen query text, and error slot.
///
/// Request execution is split into `begin_*` (validate, transition to
/// `Loading`, hand back the dispatch) and `complete_*` (apply the resolved
/// outcome, discarding it when a newer request was issued in between). The
/// `run_*` drivers wire both around a [`GraphQlClient`] for callers that
/// dispatch one request at a time.
#[derive(Clone, Debug)]
pub struct QuerySession {
    breed_flow: Flow,
    known_identifiers: KnownIdentifiers,
    student_flow: Flow,
}
impl QuerySession {
    pub fn new() -> Self {
        Self {
            breed_flow: Flow::new(EntitySchema::cat_breed()),
            known_identifiers: KnownIdentifiers::default(),
            student_flow: Flow::new(EntitySchema::students()),
        }
    }

    // ---- Student collection flow ----

    /// Flip one field of the student selection, returning the new flag.
    pub fn toggle_student_field(&mut self, field_name: &str) -> Result<bool> {
        Ok(self.student_flow.selection.toggle(field_name)?)
    }

    pub fn student_selection(&self) -> &FieldSelection {
        &self.student_flow.selection
    }

    pub fn student_request_state(&self) -> &RequestState {
        &self.student_flow.request_state
    }

    /// This flow's error slot: the first error record of the most recent
    /// envelope, or the synthesized message of a transport failure.
    pub fn student_error(&self) -> Option<&str> {
        self.student_flow.error.as_deref()
    }

    /// The document the current selection would dispatch, re-derived live.
    pub fn student_query_preview(&self) -> String {
        document::build(&self.student_flow.selection)
    }

    /// The document actually dispatched by the most recent execution.
    /// Editing the selection afterwards does not change this record.
    pub fn student_frozen_query(&self) -> Option<&str> {
        self.student_flow.frozen_query.as_deref()
    }

    /// Validate and start a student collection request.
    pub fn begin_student_request(&mut self) -> Result<PendingRequest> {
        if self.student_flow.selection.is_empty() {
            return Err(SessionError::NoFieldsSelected {
                entity_name: self.student_flow.selection.schema().name(),
            });
        }

        Ok(self.student_flow.begin(None))
    }

    /// Apply a resolved student request. Stale resolutions (a newer request
    /// was issued since `seq`) are discarded.
    pub fn complete_student_request(
        &mut self,
        seq: u64,
        outcome: std::result::Result<Option<Response>, TransportError>,
    ) {
        self.student_flow.complete(seq, outcome);
    }

    /// Begin, dispatch, and complete a student collection request.
    pub async fn run_student_query(
        &mut self,
        client: &GraphQlClient,
    ) -> Result<()> {
        let pending = self.begin_student_request()?;
        let outcome = client.execute(pending.query(), None).await;
        self.complete_student_request(pending.seq(), outcome);
        Ok(())
    }

    // ---- Cat breed by-id flow ----

    /// Flip one field of the cat breed selection, returning the new flag.
    pub fn toggle_breed_field(&mut self, field_name: &str) -> Result<bool> {
        Ok(self.breed_flow.selection.toggle(field_name)?)
    }

    pub fn breed_selection(&self) -> &FieldSelection {
        &self.breed_flow.selection
    }

    pub fn breed_request_state(&self) -> &RequestState {
        &self.breed_flow.request_state
    }

    pub fn breed_error(&self) -> Option<&str> {
        self.breed_flow.error.as_deref()
    }

    pub fn breed_query_preview(&self) -> String {
        document::build(&self.breed_flow.selection)
    }

    pub fn breed_frozen_query(&self) -> Option<&str> {
        self.breed_flow.frozen_query.as_deref()
    }

    /// Validate and start a by-id request for `identifier`.
    ///
    /// The identifier must be non-empty and a member of the
    /// known-identifiers cache (exact, case-sensitive); at least one field
    /// must be selected. Validation failures issue no request and leave the
    /// flow untouched.
    pub fn begin_breed_request(
        &mut self,
        identifier: &str,
    ) -> Result<PendingRequest> {
        if identifier.trim().is_empty() {
            return Err(SessionError::MissingIdentifier);
        }
        if !self.known_identifiers.contains(identifier) {
            return Err(SessionError::UnknownIdentifier {
                identifier: identifier.to_string(),
            });
        }
        if self.breed_flow.selection.is_empty() {
            return Err(SessionError::NoFieldsSelected {
                entity_name: self.breed_flow.selection.schema().name(),
            });
        }

        Ok(self.breed_flow.begin(Some(json!({ "id": identifier }))))
    }

    /// Apply a resolved by-id request. Stale resolutions are discarded.
    pub fn complete_breed_request(
        &mut self,
        seq: u64,
        outcome: std::result::Result<Option<Response>, TransportError>,
    ) {
        self.breed_flow.complete(seq, outcome);
    }

    /// Begin, dispatch, and complete a by-id request for `identifier`.
    pub async fn run_breed_query(
        &mut self,
        client: &GraphQlClient,
        identifier: &str,
    ) -> Result<()> {
        let pending = self.begin_breed_request(identifier)?;
        let outcome = client
            .execute(pending.query(), pending.variables().cloned())
            .await;
        self.complete_breed_request(pending.seq(), outcome);
        Ok(())
    }

    // ---- Known identifiers ----

    pub fn known_identifiers(&self) -> &KnownIdentifiers {
        &self.known_identifiers
    }

    /// Case-insensitive substring suggestions for a partially typed
    /// identifier, in the cached order.
    pub fn suggestions(&self, input: &str) -> Vec<&str> {
        self.known_identifiers.suggestions(input)
    }

    /// Fetch the identifiers the by-id flow accepts and replace the cache
    /// with them.
    ///
    /// Failures are diagnostic-only: they are logged and leave the cache
    /// untouched, and nothing is surfaced through either flow's state.
    pub async fn fetch_known_identifiers(&mut self, client: &GraphQlClient) {
        let envelope = match client
            .execute(document::CAT_BREED_IDS_DOCUMENT, None)
            .await
        {
            Ok(Some(envelope)) => envelope,
            Ok(None) => {
                log::warn!(
                    "Received an empty body while fetching the cat breed \
                    identifiers; keeping the current cache.",
                );
                return;
            },
            Err(transport_error) => {
                log::warn!(
                    "Failed to fetch the cat breed identifiers: \
                    {transport_error}",
                );
                return;
            },
        };

        let Some(records) = envelope
            .data
            .as_ref()
            .and_then(|data| data.get("catBreeds"))
            .and_then(|breeds| breeds.as_array())
        else {
            log::warn!(
                "The cat breed identifiers response carried no `catBreeds` \
                array; keeping the current cache.",
            );
            return;
        };

        let ids: Vec<String> = records
            .iter()
            .filter_map(|record| record.get("id"))
            .filter_map(|id| id.as_str())
            .map(str::to_string)
            .collect();
        log::debug!("Cached {} cat breed identifiers.", ids.len());
        self.known_identifiers.fill(ids);
    }

    /// Fetch the known identifiers only if the cache is currently empty:
    /// the lazy path callers take right before validating user input.
    pub async fn ensure_known_identifiers(&mut self, client: &GraphQlClient) {
        if self.known_identifiers.is_empty() {
            self.fetch_known_identifiers(client).await;
        }
    }
}
impl Default for QuerySession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl QuerySession {
    /// Seed the known-identifiers cache without a transport.
    pub(super) fn inject_known_identifiers(&mut self, ids: Vec<String>) {
        self.known_identifiers.fill(ids);
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Select at least one `{entity_name}` field before executing the query.")]
    NoFieldsSelected {
        entity_name: &'static str,
    },

    #[error("Enter a cat breed identifier before executing the query.")]
    MissingIdentifier,

    #[error(
        "`{identifier}` is not a known cat breed identifier. Pick one of \
        the suggested identifiers instead."
    )]
    UnknownIdentifier {
        identifier: String,
    },

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
