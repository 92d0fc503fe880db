//! # Transport module
//!
//! This module contains the [`Transport`] trait and the [`TransportRequest`] and [`TransportResponse`] types.
//!
//! You can implement this trait for your own types, or use one of the provided
//! features to use a transport library.

use super::{SubmitterError, TransportRequest, TransportResponse};

/// This trait is used to send submissions over the network.
///
/// You can implement this trait for your own types, or use one of the provided
/// features to use a transport library.
///
/// # Examples
/// ```
/// use submitter::core::{Transport, TransportRequest, TransportResponse, SubmitterError};
///
/// struct MyTransport;
///
/// #[async_trait::async_trait]
/// impl Transport for MyTransport {
///    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, SubmitterError> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///    }
/// }
/// ```
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a request.
    ///
    /// # Errors
    /// Should return an [`SubmitterError::Transport`] if the request cannot be
    /// sent or no response has been received. Any received response, whatever
    /// its status code, should be returned as `Ok`.
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, SubmitterError>;
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Blocking transport module
    //!
    //! This module contains the blocking [`Transport`] trait.

    use crate::core::{SubmitterError, TransportRequest, TransportResponse};

    /// This trait is used to send submissions over the network.
    ///
    /// This trait is used for blocking requests.
    ///
    /// # Examples
    /// ```
    /// use submitter::core::{blocking::Transport, TransportRequest, TransportResponse, SubmitterError};
    ///
    /// struct MyTransport;
    ///
    /// impl Transport for MyTransport {
    ///    fn send(&self, req: TransportRequest) -> Result<TransportResponse, SubmitterError> {
    ///         // Send your request here
    ///
    ///         Ok(TransportResponse::default())
    ///    }
    /// }
    /// ```
    pub trait Transport {
        /// Send a request.
        ///
        /// # Errors
        /// Should return an [`SubmitterError::Transport`] if the request cannot be sent.
        fn send(&self, req: TransportRequest) -> Result<TransportResponse, SubmitterError>;
    }
}
