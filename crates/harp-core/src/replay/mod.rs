//! Request reconstruction: one HAR entry becomes one outbound request value.
//!
//! Nothing here sends anything. [`ReplayRequest::into_http_request`] hands the
//! result to whatever `http`-based client the caller drives.

mod convert;
mod cookie;
mod form;
mod request;

pub use convert::entry_to_request;
pub use cookie::{cookie_header, ReplayCookie};
pub use request::ReplayRequest;
