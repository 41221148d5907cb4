//! CGI request and response plumbing.

pub mod writer;

use crate::domain::request::{FormData, parse_query};
use crate::error::Result;

pub const QUERY_STRING: &str = "QUERY_STRING";

/// Reads form data from the `QUERY_STRING` the web server sets.
///
/// An unset variable reads as an empty query.
pub fn read_query_env() -> Result<FormData> {
    let query = std::env::var(QUERY_STRING).unwrap_or_default();
    parse_query(&query)
}
