//! # Transport Request
//!
//! This module contains the `TransportRequest` struct and related types.
//!
//! The request is what the [`submitter`] client hands over to a [`Transport`]
//! implementation after a [`SubmissionRequest`] has been prepared.
//!
//! [`submitter`]: ../index.html
//! [`Transport`]: ../transport/trait.Transport.html
//! [`SubmissionRequest`]: ../../dx/submit/struct.SubmissionRequest.html

use std::{collections::HashMap, fmt::Display};

/// The method to use for a request.
///
/// This enum represents the method to use for a request. It is used by the
/// [`TransportRequest`] struct.
///
/// [`TransportRequest`]: struct.TransportRequest.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum TransportMethod {
    /// Read-only request. Fields are sent as query parameters.
    #[default]
    Get,

    /// Create request.
    Post,

    /// Full replacement request.
    Put,

    /// Partial update request.
    Patch,

    /// Removal request.
    Delete,
}

impl Display for TransportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransportMethod::Get => "GET",
                TransportMethod::Post => "POST",
                TransportMethod::Put => "PUT",
                TransportMethod::Patch => "PATCH",
                TransportMethod::Delete => "DELETE",
            }
        )
    }
}

/// Single named value of a form body.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FormField {
    /// Name of the form field.
    pub name: String,

    /// Field content.
    pub value: FieldValue,
}

/// Content of a form field.
///
/// Forms carry either plain text values or binary blobs (uploaded files).
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum FieldValue {
    /// Plain text value.
    Text(String),

    /// Binary content, usually an uploaded file.
    Blob {
        /// File name reported to the server.
        file_name: Option<String>,

        /// MIME type of the content.
        content_type: Option<String>,

        /// Raw content.
        bytes: Vec<u8>,
    },
}

impl FieldValue {
    /// Whether value is a binary blob.
    pub fn is_blob(&self) -> bool {
        matches!(self, FieldValue::Blob { .. })
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Body of the request.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TransportBody {
    /// Form which should be sent as `multipart/form-data`.
    Form(Vec<FormField>),
}

/// This struct represents a request to be sent by a [`Transport`].
///
/// All fields are representing certain parts of the request that can be used
/// to prepare one.
///
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportRequest {
    /// path to the resource, or absolute URL
    pub path: String,

    /// query parameters to be sent with the request
    pub query_parameters: HashMap<String, String>,

    /// method to use for the request
    pub method: TransportMethod,

    /// headers to be sent with the request
    pub headers: HashMap<String, String>,

    /// body to be sent with the request
    pub body: Option<TransportBody>,
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;

    #[test_case(TransportMethod::Get, "GET")]
    #[test_case(TransportMethod::Post, "POST")]
    #[test_case(TransportMethod::Put, "PUT")]
    #[test_case(TransportMethod::Patch, "PATCH")]
    #[test_case(TransportMethod::Delete, "DELETE")]
    fn display_http_verb(method: TransportMethod, expected: &str) {
        assert_eq!(method.to_string(), expected);
    }

    #[test]
    fn detect_blob_values() {
        let blob = FieldValue::Blob {
            file_name: Some("cover.png".into()),
            content_type: Some("image/png".into()),
            bytes: vec![0x89, 0x50],
        };

        assert!(blob.is_blob());
        assert!(!FieldValue::from("title").is_blob());
    }
}
