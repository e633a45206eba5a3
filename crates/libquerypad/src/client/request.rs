use serde::Serialize;

/// The JSON body of a GraphQL request: the query document plus optional
/// variable bindings. `variables` is omitted from the serialized body when
/// absent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Request<'doc> {
    pub query: &'doc str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}
