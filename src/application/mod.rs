//! Application layer: the endpoint handlers and the dispatch table.
//!
//! `CheckoutRelay` owns the outbound transport and the CGI writer, so each
//! handler reshapes the form data, makes at most one upstream call and writes
//! exactly one response.

pub mod payload;
pub mod relay;
