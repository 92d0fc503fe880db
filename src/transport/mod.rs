//! # Transport Providers Module
//!
//! This module contains the Transport Providers that can be used by [`SubmitterClient`],
//! and the [`SubmitterMiddleware`] which wraps every transport of the client.
//!
//! [`SubmitterClient`]: ../dx/submitter_client/type.SubmitterClient.html
//! [`SubmitterMiddleware`]: middleware/struct.SubmitterMiddleware.html

#[cfg(feature = "reqwest")]
pub use self::reqwest::TransportReqwest;
#[cfg(feature = "reqwest")]
pub mod reqwest;

#[cfg(all(feature = "reqwest", feature = "blocking"))]
pub use self::reqwest::blocking;

pub use middleware::SubmitterMiddleware;
pub mod middleware;
