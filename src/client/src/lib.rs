//! Client for the tracer API.
//!
//! [`RemoteStoreClient`] turns typed calls into JSON-over-HTTP requests against
//! the server named by the `tracer-server` configuration key. The address is
//! looked up on every call and the HTTP layer sits behind [`HttpTransport`], so
//! both can be swapped out in tests.

pub mod endpoint;
pub mod error;
pub mod store_client;
pub mod transport;

pub use error::{ClientError, ErrorKind, EventSubmitFailure, Result};
pub use store_client::RemoteStoreClient;
pub use transport::{BoxError, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
