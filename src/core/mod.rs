//! Wire-level model shared by builders, suites and the executor.

pub mod api;
pub mod response;
pub mod version;

pub use api::{Api, ApiFamily, ApiResult, Command, Output, RuntimeApiName, ValidationStrategy};
pub use response::{ApiResponse, ResponseLog, ResponseType, parse_plugin_output};
pub use version::RuntimeVersion;
