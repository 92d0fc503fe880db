//! # Providers module
//!
//! This module contains the Providers that can be used by [`SubmitterClient`].
//!
//! [`SubmitterClient`]: ../dx/submitter_client/type.SubmitterClient.html

pub mod deserialization_serde;

#[cfg(feature = "tokio")]
pub mod futures_tokio;
