//! Submit module.
//!
//! Send one form-like submission and normalize its outcome.
//!
//! The submit module contains the [`SubmissionRequest`] (and its builder) and
//! the [`SubmissionResult`]. The request describes what should be sent, the
//! result tells what happened: the server accepted it, the server rejected it,
//! or no response has been received at all.
//!
//! [`SubmissionRequest`]: crate::dx::submit::SubmissionRequest
//! [`SubmissionResult`]: crate::dx::submit::SubmissionResult

#[doc(inline)]
pub use result::SubmissionResult;
pub mod result;

use derive_builder::Builder;
use log::debug;
use mime::Mime;
use std::collections::{HashMap, HashSet};

use crate::{
    core::{
        utils::headers::{ACCEPT, APPLICATION_JSON},
        Deserializer, FieldValue, FormField, SubmitterError, Transport, TransportBody,
        TransportMethod, TransportRequest,
    },
    dx::submitter_client::SubmitterClientInstance,
};

/// Description of one submission.
///
/// Request is immutable once constructed. Use [`SubmissionRequest::builder`]
/// to create one.
///
/// # Examples
/// ```
/// use submitter::{core::TransportMethod, SubmissionRequest};
///
/// # fn main() -> Result<(), submitter::core::SubmitterError> {
/// let request = SubmissionRequest::builder()
///     .target_url("/admin/posts/5")
///     .method(TransportMethod::Put)
///     .field("title", "Best gifts for geeks")
///     .field("status", "published")
///     .build()?;
///
/// assert_eq!(request.fields().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(
    pattern = "owned",
    build_fn(validate = "Self::validate", error = "SubmitterError")
)]
pub struct SubmissionRequest {
    /// Where the submission should be sent.
    ///
    /// Absolute URL or path relative to the transport's base URL.
    #[builder(setter(into))]
    target_url: String,

    /// HTTP method.
    ///
    /// Defaults to [`TransportMethod::Post`].
    #[builder(default = "TransportMethod::Post")]
    method: TransportMethod,

    /// Form fields in insertion order.
    #[builder(setter(custom), default)]
    fields: Vec<FormField>,
}

impl SubmissionRequestBuilder {
    /// Add text field.
    pub fn field<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.push(name.into(), FieldValue::Text(value.into()));
        self
    }

    /// Add binary field (uploaded file).
    pub fn blob<N>(
        mut self,
        name: N,
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Self
    where
        N: Into<String>,
    {
        self.push(
            name.into(),
            FieldValue::Blob {
                file_name,
                content_type,
                bytes,
            },
        );
        self
    }

    fn push(&mut self, name: String, value: FieldValue) {
        self.fields
            .get_or_insert_with(Vec::new)
            .push(FormField { name, value });
    }

    fn validate(&self) -> Result<(), SubmitterError> {
        if let Some(target_url) = &self.target_url {
            if target_url.trim().is_empty() {
                return Err(SubmitterError::invalid_request("target url can't be empty"));
            }
        }

        let is_get = matches!(self.method, Some(TransportMethod::Get));
        let fields = self.fields.as_deref().unwrap_or_default();

        if is_get && fields.iter().any(|field| field.value.is_blob()) {
            return Err(SubmitterError::invalid_request(
                "GET request can't carry binary fields",
            ));
        }

        if is_get {
            let mut names = HashSet::new();
            if let Some(field) = fields.iter().find(|field| !names.insert(&field.name)) {
                return Err(SubmitterError::invalid_request(format!(
                    "GET request can't repeat field '{}'",
                    field.name
                )));
            }
        }

        fields.iter().try_for_each(|field| match &field.value {
            FieldValue::Blob {
                content_type: Some(content_type),
                ..
            } => content_type.parse::<Mime>().map(|_| ()).map_err(|err| {
                SubmitterError::invalid_request(format!(
                    "invalid content type '{}' of field '{}': {}",
                    content_type, field.name, err
                ))
            }),
            _ => Ok(()),
        })?;

        Ok(())
    }
}

impl From<derive_builder::UninitializedFieldError> for SubmitterError {
    fn from(value: derive_builder::UninitializedFieldError) -> Self {
        SubmitterError::invalid_request(format!("'{}' must be set", value.field_name()))
    }
}

impl SubmissionRequest {
    /// Create request builder.
    pub fn builder() -> SubmissionRequestBuilder {
        SubmissionRequestBuilder::default()
    }

    /// Create `DELETE` request without fields.
    ///
    /// # Errors
    /// Returns [`SubmitterError::InvalidRequest`] for an empty `target_url`.
    pub fn delete<S>(target_url: S) -> Result<Self, SubmitterError>
    where
        S: Into<String>,
    {
        Self::builder()
            .target_url(target_url)
            .method(TransportMethod::Delete)
            .build()
    }

    /// Create `GET` request without fields.
    ///
    /// # Errors
    /// Returns [`SubmitterError::InvalidRequest`] for an empty `target_url`.
    pub fn get<S>(target_url: S) -> Result<Self, SubmitterError>
    where
        S: Into<String>,
    {
        Self::builder()
            .target_url(target_url)
            .method(TransportMethod::Get)
            .build()
    }

    /// Where the submission is sent.
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// HTTP method.
    pub fn method(&self) -> TransportMethod {
        self.method
    }

    /// Form fields in insertion order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Content type requested from the server.
    pub fn accept_header(&self) -> &'static str {
        APPLICATION_JSON
    }

    /// Turn submission into transport request.
    ///
    /// `GET` fields become query parameters, fields of other methods are sent
    /// as `multipart/form-data`.
    pub(crate) fn create_transport_request(self) -> TransportRequest {
        let mut query_parameters = HashMap::new();
        let body = match self.method {
            TransportMethod::Get => {
                self.fields.into_iter().for_each(|field| {
                    if let FieldValue::Text(value) = field.value {
                        query_parameters.insert(field.name, value);
                    }
                });
                None
            }
            _ if self.fields.is_empty() => None,
            _ => Some(TransportBody::Form(self.fields)),
        };

        TransportRequest {
            path: self.target_url,
            query_parameters,
            method: self.method,
            headers: HashMap::from([(ACCEPT.into(), APPLICATION_JSON.into())]),
            body,
        }
    }
}

impl<T, D> SubmitterClientInstance<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Perform one network submission.
    ///
    /// The call is suspended until the response arrives or the transport
    /// fails. No retries are made.
    ///
    /// # Example
    /// ```no_run
    /// use submitter::{SubmissionRequest, SubmissionResult, SubmitterClientBuilder};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SubmitterClientBuilder::with_reqwest_transport().build()?;
    ///
    /// let result = client
    ///     .submit(SubmissionRequest::delete("https://admin.example.com/api/posts/5")?)
    ///     .await;
    ///
    /// if let SubmissionResult::Ok { message, .. } = result {
    ///     println!("{:?}", message);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit(&self, request: SubmissionRequest) -> SubmissionResult {
        debug!("{} {}", request.method(), request.target_url());

        match self
            .transport
            .send(request.create_transport_request())
            .await
        {
            Ok(response) => result::response_to_result(self.deserializer.as_ref(), response),
            Err(cause) => SubmissionResult::NetworkError { cause },
        }
    }
}

#[cfg(feature = "blocking")]
impl<T, D> SubmitterClientInstance<T, D>
where
    T: crate::core::blocking::Transport,
    D: Deserializer,
{
    /// Perform one network submission, blocking current thread.
    ///
    /// # Example
    /// ```no_run
    /// use submitter::{SubmissionRequest, SubmitterClientBuilder};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SubmitterClientBuilder::with_reqwest_blocking_transport().build()?;
    ///
    /// let result = client
    ///     .submit_blocking(SubmissionRequest::get("https://admin.example.com/api/posts")?);
    ///
    /// assert!(result.is_ok());
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit_blocking(&self, request: SubmissionRequest) -> SubmissionResult {
        debug!("{} {}", request.method(), request.target_url());

        match self.transport.send(request.create_transport_request()) {
            Ok(response) => result::response_to_result(self.deserializer.as_ref(), response),
            Err(cause) => SubmissionResult::NetworkError { cause },
        }
    }
}
