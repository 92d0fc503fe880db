//! # Submitter middleware
//!
//! Transport wrapper which decorates every outgoing request with the headers
//! shared by all submissions.

use crate::core::{
    utils::headers::{ACCEPT, APPLICATION_JSON, REQUEST_ID, USER_AGENT},
    SubmitterError, Transport, TransportRequest, TransportResponse,
};
use uuid::Uuid;

/// Transport wrapper used by the submitter client.
///
/// It adds the `Accept`, `User-Agent` and (optionally) `X-Request-ID` headers
/// before the request is handed over to the wrapped transport.
#[derive(Debug)]
pub struct SubmitterMiddleware<T> {
    /// Wrapped transport.
    pub transport: T,

    /// Whether a fresh `X-Request-ID` should be attached to each request.
    pub include_request_id: bool,

    /// `User-Agent` header value.
    pub user_agent: String,
}

impl<T> SubmitterMiddleware<T> {
    fn prepare_request(&self, mut req: TransportRequest) -> TransportRequest {
        req.headers
            .entry(ACCEPT.into())
            .or_insert_with(|| APPLICATION_JSON.into());
        req.headers
            .insert(USER_AGENT.into(), self.user_agent.clone());

        if self.include_request_id {
            req.headers
                .insert(REQUEST_ID.into(), Uuid::new_v4().to_string());
        }

        req
    }
}

#[async_trait::async_trait]
impl<T> Transport for SubmitterMiddleware<T>
where
    T: Transport,
{
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, SubmitterError> {
        self.transport.send(self.prepare_request(req)).await
    }
}

#[cfg(feature = "blocking")]
impl<T> crate::core::blocking::Transport for SubmitterMiddleware<T>
where
    T: crate::core::blocking::Transport,
{
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, SubmitterError> {
        self.transport.send(self.prepare_request(req))
    }
}
