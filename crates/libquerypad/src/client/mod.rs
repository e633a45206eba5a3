mod graphql_client;
mod request;
mod response;

pub use graphql_client::GraphQlClient;
pub use graphql_client::TransportError;
pub use request::Request;
pub use response::Error;
pub use response::Response;
