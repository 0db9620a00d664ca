//! CLI command handlers, one file per subcommand.

mod disposition;
mod request;
mod response;

pub use disposition::run_disposition;
pub use request::{run_request, RequestArgs};
pub use response::run_response;
