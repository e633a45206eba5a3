//! Core engine behind the `querypad` CLI.
//!
//! A [`QuerySession`](session::QuerySession) owns two independent query
//! flows: the `students` collection and the `catBreed` by-id lookup. A
//! rendering layer (e.g. the `querypad` CLI) toggles fields on each flow's
//! [`FieldSelection`](selection::FieldSelection), dispatches the generated
//! document through a [`GraphQlClient`](client::GraphQlClient), and renders
//! the recorded request state.

pub mod client;
pub mod document;
pub mod schema;
pub mod selection;
pub mod session;

pub use client::GraphQlClient;
pub use selection::FieldSelection;
pub use session::QuerySession;
