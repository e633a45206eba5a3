use serde::Deserialize;
use serde::Serialize;

/// A GraphQL response envelope.
///
/// `data` and `errors` are mutually non-exclusive: a response may carry
/// partial data alongside error records. The `data` payload is schema-less
/// from this crate's perspective and is kept as raw JSON.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Error>,
}
impl Response {
    /// The message of the first error record, if any. Later error records
    /// are retained in the envelope but never surfaced by the session.
    pub fn first_error_message(&self) -> Option<&str> {
        self.errors.first().map(|error| error.message.as_str())
    }
}

/// One record of a response's `errors` sequence. Only the message is
/// consumed by this crate; any other members of the record are ignored at
/// parse time.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Error {
    #[serde(default)]
    pub message: String,
}
