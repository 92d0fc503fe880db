//! # Reqwest Transport Implementation
//!
//! This module contains the [`TransportReqwest`] struct.
//! It is used to send submissions using the [`reqwest`] crate.
//!
//! It requires the [`reqwest` feature] to be enabled.
//!
//! [`TransportReqwest`]: ./struct.TransportReqwest.html
//! [`reqwest`]: https://docs.rs/reqwest
//! [`reqwest` feature]: ../index.html#features

use crate::{
    core::{
        utils::encoding::encode_query, FieldValue, FormField, SubmitterError, Transport,
        TransportBody, TransportMethod, TransportRequest, TransportResponse,
    },
    dx::submitter_client::{SubmitterClientBuilder, SubmitterClientConfigBuilder},
    providers::deserialization_serde::DeserializerSerde,
};
use bytes::Bytes;
use log::info;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Method, StatusCode,
};
use std::collections::HashMap;

/// This struct is used to send submissions using the [`reqwest`] crate.
/// It is used as the transport type for the [`SubmitterClient`].
///
/// [`reqwest`]: https://docs.rs/reqwest
/// [`SubmitterClient`]: ../dx/submitter_client/type.SubmitterClient.html
#[derive(Clone, Debug, Default)]
pub struct TransportReqwest {
    reqwest_client: reqwest::Client,

    /// The base URL used for relative target URLs.
    ///
    /// It defaults to an empty string, which means that only absolute target
    /// URLs can be used.
    /// # Examples
    /// ```
    /// use submitter::transport::TransportReqwest;
    ///
    /// let transport = {
    ///    let mut transport = TransportReqwest::default();
    ///    transport.base_url = "https://admin.example.com".into();
    ///    transport
    /// };
    /// ```
    pub base_url: String,
}

#[async_trait::async_trait]
impl Transport for TransportReqwest {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, SubmitterError> {
        let request_url = prepare_url(&self.base_url, &request.path, &request.query_parameters);
        info!("{} {}", request.method, request_url);
        let headers = prepare_headers(&request.headers)?;
        let mut builder = self
            .reqwest_client
            .request(prepare_method(request.method), request_url)
            .headers(headers);

        builder = match request.body {
            Some(TransportBody::Form(fields)) => builder.multipart(prepare_form(fields)?),
            None => builder,
        };

        let result = builder.send().await.map_err(SubmitterError::transport)?;

        let status = result.status();
        result
            .bytes()
            .await
            .map_err(SubmitterError::transport)
            .and_then(|bytes| create_result(status, bytes))
    }
}

impl TransportReqwest {
    /// Create a new [`TransportReqwest`] instance.
    ///
    /// It provides a default [`reqwest`] client using [`reqwest::Client::default()`]
    /// and an empty base URL.
    ///
    /// # Example
    /// ```
    /// use submitter::transport::TransportReqwest;
    ///
    /// let transport = TransportReqwest::new();
    /// ```
    ///
    /// [`TransportReqwest`]: ./struct.TransportReqwest.html
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn new() -> Self {
        Self::default()
    }

    /// Create transport which resolves relative target URLs against
    /// `base_url`.
    pub fn with_base_url<S>(base_url: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// set the custom base URL for requests
    pub fn set_base_url<S>(&mut self, base_url: S)
    where
        S: Into<String>,
    {
        self.base_url = base_url.into();
    }
}

fn prepare_form(fields: Vec<FormField>) -> Result<reqwest::multipart::Form, SubmitterError> {
    fields
        .into_iter()
        .try_fold(reqwest::multipart::Form::new(), |form, field| {
            Ok(match field.value {
                FieldValue::Text(text) => form.text(field.name, text),
                FieldValue::Blob {
                    file_name,
                    content_type,
                    bytes,
                } => {
                    let mut part = reqwest::multipart::Part::bytes(bytes);
                    if let Some(file_name) = file_name {
                        part = part.file_name(file_name);
                    }
                    if let Some(content_type) = content_type {
                        part = part
                            .mime_str(&content_type)
                            .map_err(|err| SubmitterError::invalid_request(err.to_string()))?;
                    }
                    form.part(field.name, part)
                }
            })
        })
}

pub(crate) fn prepare_method(method: TransportMethod) -> Method {
    match method {
        TransportMethod::Get => Method::GET,
        TransportMethod::Post => Method::POST,
        TransportMethod::Put => Method::PUT,
        TransportMethod::Patch => Method::PATCH,
        TransportMethod::Delete => Method::DELETE,
    }
}

pub(crate) fn prepare_headers(
    request_headers: &HashMap<String, String>,
) -> Result<HeaderMap, SubmitterError> {
    request_headers
        .iter()
        .try_fold(HeaderMap::new(), |mut headers, (name, value)| {
            headers.insert(
                HeaderName::try_from(name.as_str()).map_err(SubmitterError::transport)?,
                HeaderValue::try_from(value.as_str()).map_err(SubmitterError::transport)?,
            );
            Ok(headers)
        })
}

pub(crate) fn prepare_url(
    base_url: &str,
    path: &str,
    query_params: &HashMap<String, String>,
) -> String {
    let url = if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    };

    match encode_query(query_params) {
        Some(query) if url.contains('?') => format!("{}&{}", url, query),
        Some(query) => format!("{}?{}", url, query),
        None => url,
    }
}

pub(crate) fn create_result(
    status: StatusCode,
    body: Bytes,
) -> Result<TransportResponse, SubmitterError> {
    Ok(TransportResponse {
        status: status.as_u16(),
        body: (!body.is_empty()).then(|| body.to_vec()),
    })
}

impl SubmitterClientBuilder {
    /// Creates a new [`SubmitterClientConfigBuilder`] with the default
    /// [`TransportReqwest`] transport.
    ///
    /// Default transport has no base URL, so target URLs should be absolute.
    /// Use [`SubmitterClientBuilder::with_transport`] with
    /// [`TransportReqwest::with_base_url`] to submit relative paths.
    ///
    /// # Examples
    /// ```
    /// use submitter::SubmitterClientBuilder;
    ///
    /// # fn main() -> Result<(), submitter::core::SubmitterError> {
    /// let client = SubmitterClientBuilder::with_reqwest_transport().build()?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`SubmitterClientConfigBuilder`]: ../dx/submitter_client/struct.SubmitterClientConfigBuilder.html
    /// [`TransportReqwest`]: ./struct.TransportReqwest.html
    pub fn with_reqwest_transport() -> SubmitterClientConfigBuilder<TransportReqwest, DeserializerSerde>
    {
        SubmitterClientBuilder::with_transport(TransportReqwest::new())
    }
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Reqwest Transport Blocking Implementation
    //!
    //! This module contains the blocking [`TransportReqwest`] struct.
    //!
    //! It requires the [`reqwest` and `blocking` feature] to be enabled.
    //!
    //! [`TransportReqwest`]: ./struct.TransportReqwest.html

    use log::info;

    use crate::{
        core::{
            FieldValue, FormField, SubmitterError, TransportBody, TransportRequest,
            TransportResponse,
        },
        dx::submitter_client::{SubmitterClientBuilder, SubmitterClientConfigBuilder},
        providers::deserialization_serde::DeserializerSerde,
        transport::reqwest::{
            create_result, prepare_headers, prepare_method, prepare_url,
        },
    };

    /// This struct is used to send submissions using the blocking [`reqwest`]
    /// client.
    ///
    /// It requires the [`reqwest` and `blocking` feature] to be enabled.
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    #[derive(Clone, Debug, Default)]
    pub struct TransportReqwest {
        reqwest_client: reqwest::blocking::Client,

        /// The base URL used for relative target URLs.
        pub base_url: String,
    }

    impl crate::core::blocking::Transport for TransportReqwest {
        fn send(&self, request: TransportRequest) -> Result<TransportResponse, SubmitterError> {
            let request_url =
                prepare_url(&self.base_url, &request.path, &request.query_parameters);
            info!("{} {}", request.method, request_url);
            let headers = prepare_headers(&request.headers)?;
            let mut builder = self
                .reqwest_client
                .request(prepare_method(request.method), request_url)
                .headers(headers);

            builder = match request.body {
                    Some(TransportBody::Form(fields)) => builder.multipart(prepare_form(fields)?),
                None => builder,
            };

            let result = builder.send().map_err(SubmitterError::transport)?;

            let status = result.status();
                result
                .bytes()
                .map_err(SubmitterError::transport)
                .and_then(|bytes| create_result(status, bytes))
        }
    }

    impl TransportReqwest {
        /// Create a new [`TransportReqwest`] instance.
        ///
        /// # Example
        /// ```
        /// use submitter::transport::blocking::TransportReqwest;
        ///
        /// let transport = TransportReqwest::new();
        /// ```
        pub fn new() -> Self {
            Self::default()
        }

        /// Create transport which resolves relative target URLs against
        /// `base_url`.
        pub fn with_base_url<S>(base_url: S) -> Self
        where
            S: Into<String>,
        {
            Self {
                base_url: base_url.into(),
                ..Default::default()
            }
        }
    }

    fn prepare_form(
        fields: Vec<FormField>,
    ) -> Result<reqwest::blocking::multipart::Form, SubmitterError> {
        fields
            .into_iter()
            .try_fold(reqwest::blocking::multipart::Form::new(), |form, field| {
                Ok(match field.value {
                    FieldValue::Text(text) => form.text(field.name, text),
                    FieldValue::Blob {
                        file_name,
                        content_type,
                        bytes,
                    } => {
                        let mut part = reqwest::blocking::multipart::Part::bytes(bytes);
                        if let Some(file_name) = file_name {
                            part = part.file_name(file_name);
                        }
                        if let Some(content_type) = content_type {
                            part = part
                                .mime_str(&content_type)
                                .map_err(|err| SubmitterError::invalid_request(err.to_string()))?;
                        }
                        form.part(field.name, part)
                    }
                })
            })
    }

    impl SubmitterClientBuilder {
        /// Creates a new [`SubmitterClientConfigBuilder`] with the default
        /// blocking [`TransportReqwest`] transport.
        ///
        /// [`SubmitterClientConfigBuilder`]: ../../dx/submitter_client/struct.SubmitterClientConfigBuilder.html
        pub fn with_reqwest_blocking_transport(
        ) -> SubmitterClientConfigBuilder<TransportReqwest, DeserializerSerde> {
            SubmitterClientBuilder::with_blocking_transport(TransportReqwest::new())
        }
    }

}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;
    use wiremock::matchers::{
        body_string_contains, header, method, path as path_macher, query_param,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test_case("http://host", "/api/posts", "http://host/api/posts" ; "absolute path")]
    #[test_case("http://host/", "/api/posts", "http://host/api/posts" ; "trailing slash")]
    #[test_case("http://host", "api/posts", "http://host/api/posts" ; "relative path")]
    #[test_case("http://host", "https://other/x", "https://other/x" ; "absolute url")]
    #[test_case("", "http://other/x", "http://other/x" ; "absolute url without base")]
    fn join_url(base_url: &str, path: &str, expected: &str) {
        assert_eq!(prepare_url(base_url, path, &HashMap::new()), expected);
    }

    #[test]
    fn append_query_to_existing_query() {
        let query = HashMap::from([("page".to_string(), "2".to_string())]);

        assert_eq!(
            prepare_url("http://host", "/search?q=rust", &query),
            "http://host/search?q=rust&page=2"
        );
    }

    #[test_case("GET" ; "get")]
    #[test_case("POST" ; "post")]
    #[test_case("PUT" ; "put")]
    #[test_case("PATCH" ; "patch")]
    #[test_case("DELETE" ; "delete")]
    #[tokio::test]
    async fn send_with_method(verb: &str) {
        let server = MockServer::start().await;
        let transport_method = match verb {
            "GET" => TransportMethod::Get,
            "POST" => TransportMethod::Post,
            "PUT" => TransportMethod::Put,
            "PATCH" => TransportMethod::Patch,
            _ => TransportMethod::Delete,
        };

        Mock::given(method(verb))
            .and(path_macher("/api/items/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = TransportReqwest::with_base_url(server.uri());

        let request = TransportRequest {
            path: "/api/items/1".into(),
            method: transport_method,
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn send_query_parameters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_macher("/api/products"))
            .and(query_param("search", "smart watch"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let transport = TransportReqwest::with_base_url(server.uri());

        let request = TransportRequest {
            path: "/api/products".into(),
            query_parameters: [("search".into(), "smart watch".into())].into(),
            method: TransportMethod::Get,
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn send_multipart_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_macher("/admin/products"))
            .and(body_string_contains("name=\"title\""))
            .and(body_string_contains("Smart Watch"))
            .and(body_string_contains("filename=\"cover.png\""))
            .respond_with(ResponseTemplate::new(201).set_body_string("{\"message\":\"created\"}"))
            .mount(&server)
            .await;

        let transport = TransportReqwest::with_base_url(server.uri());

        let request = TransportRequest {
            path: "/admin/products".into(),
            method: TransportMethod::Post,
            body: Some(TransportBody::Form(vec![
                FormField {
                    name: "title".into(),
                    value: FieldValue::Text("Smart Watch".into()),
                },
                FormField {
                    name: "image".into(),
                    value: FieldValue::Blob {
                        file_name: Some("cover.png".into()),
                        content_type: Some("image/png".into()),
                        bytes: vec![1, 2, 3],
                    },
                },
            ])),
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn send_headers() {
        let path = "/api/posts";
        let expected_key = "accept";
        let expected_val = "application/json";

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_macher(path))
            .and(header(expected_key, expected_val))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let transport = TransportReqwest::with_base_url(server.uri());

        let request = TransportRequest {
            path: path.into(),
            method: TransportMethod::Get,
            headers: HashMap::from([("Accept".into(), expected_val.into())]),
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn return_response_for_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string("{\"detail\":\"Item nao encontrado\"}"),
            )
            .mount(&server)
            .await;

        let transport = TransportReqwest::with_base_url(server.uri());

        let request = TransportRequest {
            path: "/api/posts/5".into(),
            method: TransportMethod::Delete,
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 404);
        assert!(response.body.is_some());
    }

    #[tokio::test]
    async fn leave_empty_body_unset() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let transport = TransportReqwest::with_base_url(server.uri());

        let request = TransportRequest {
            path: "/api/posts/5".into(),
            method: TransportMethod::Delete,
            ..Default::default()
        };

        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 204);
        assert!(response.body.is_none());
    }

    #[tokio::test]
    async fn return_err_when_server_unreachable() {
        let transport = TransportReqwest::with_base_url("http://127.0.0.1:1");

        let request = TransportRequest {
            path: "/api/posts".into(),
            ..Default::default()
        };

        let result = transport.send(request).await;

        assert!(matches!(result, Err(SubmitterError::Transport { .. })));
    }
}
