//! Headers module
//!
//! This module provides a constants for HTTP headers.
//!

pub(crate) const ACCEPT: &str = "Accept";
pub(crate) const APPLICATION_JSON: &str = "application/json";
pub(crate) const USER_AGENT: &str = "User-Agent";
pub(crate) const REQUEST_ID: &str = "X-Request-ID";
