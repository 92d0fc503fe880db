//! # Submission result
//!
//! The module contains the [`SubmissionResult`] type and the rules used to
//! turn a raw [`TransportResponse`] into it.

use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::core::{Deserializer, SubmitterError, TransportResponse};

/// Normalized outcome of one submission.
///
/// Exactly one variant is produced for each submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// Server accepted the submission (status in `2xx` range).
    Ok {
        /// Parsed response document (`Null` for an empty body).
        payload: Value,

        /// Human-readable `message` field from the response document.
        message: Option<String>,
    },

    /// Server responded, but rejected the submission.
    Failed {
        /// Response status code.
        status_code: Option<u16>,

        /// Human-readable `detail` field from the response document.
        detail: Option<String>,
    },

    /// No response has been received.
    NetworkError {
        /// Transport failure.
        cause: SubmitterError,
    },
}

impl SubmissionResult {
    /// Whether server accepted the submission.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Whether server rejected the submission.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Whether submission didn't reach the server.
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. })
    }

    /// Parsed response document of accepted submission.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Ok { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Message provided by the server.
    ///
    /// `message` for accepted and `detail` for rejected submissions.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Ok { message, .. } => message.as_deref(),
            Self::Failed { detail, .. } => detail.as_deref(),
            Self::NetworkError { .. } => None,
        }
    }
}

/// Fields of the response document used to build notifications.
#[derive(Deserialize, Debug, Default)]
struct ResponseBody {
    #[serde(default)]
    message: Option<Value>,

    #[serde(default)]
    detail: Option<ErrorDetail>,
}

/// Shapes of the `detail` field.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
enum ErrorDetail {
    /// `{"detail": "Item not found"}`
    Text(String),

    /// `{"detail": [{"loc": ["body", "title"], "msg": "field required"}]}`
    ValidationErrors(Vec<ValidationError>),

    /// `{"detail": {"msg": "..."}}` or `{"detail": {"message": "..."}}`
    Object {
        #[serde(alias = "message")]
        msg: String,
    },

    /// Anything else is ignored.
    Other(Value),
}

/// Single entry of a validation error list.
#[derive(Deserialize, Debug, Clone, PartialEq)]
struct ValidationError {
    #[serde(default)]
    loc: Vec<Value>,
    msg: String,
}

impl ValidationError {
    fn describe(&self) -> String {
        if self.loc.is_empty() {
            return self.msg.clone();
        }

        let location = self
            .loc
            .iter()
            .map(|part| match part {
                Value::String(part) => part.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");

        format!("{}: {}", location, self.msg)
    }
}

impl ErrorDetail {
    fn describe(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::ValidationErrors(errors) if !errors.is_empty() => Some(
                errors
                    .iter()
                    .map(ValidationError::describe)
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            Self::Object { msg } => Some(msg),
            _ => None,
        }
    }
}

fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        _ => None,
    }
}

/// Interpret transport response.
///
/// Responses in `2xx` range are [`SubmissionResult::Ok`], everything else is
/// [`SubmissionResult::Failed`]. An empty body is a valid document for
/// accepted submissions (`Null` payload).
pub(crate) fn response_to_result<D>(deserializer: &D, response: TransportResponse) -> SubmissionResult
where
    D: Deserializer,
{
    let status = response.status;
    let is_success = response.is_success();

    let Some(body) = response.body.filter(|body| !body.is_empty()) else {
        return if is_success {
            SubmissionResult::Ok {
                payload: Value::Null,
                message: None,
            }
        } else {
            warn!("Submission rejected with status {} and empty body", status);
            SubmissionResult::Failed {
                status_code: Some(status),
                detail: None,
            }
        };
    };

    let payload: Value = match deserializer.deserialize(&body) {
        Ok(payload) => payload,
        Err(error) => {
            warn!("Unable to parse response with status {}: {}", status, error);
            return SubmissionResult::Failed {
                status_code: Some(status),
                detail: None,
            };
        }
    };

    let fields = match &payload {
        Value::Object(_) => ResponseBody::deserialize(&payload).unwrap_or_default(),
        _ => ResponseBody::default(),
    };

    if is_success {
        SubmissionResult::Ok {
            message: fields.message.and_then(text_of),
            payload,
        }
    } else {
        let detail = fields.detail.and_then(ErrorDetail::describe);
        warn!("Submission rejected with status {}: {:?}", status, detail);

        SubmissionResult::Failed {
            status_code: Some(status),
            detail,
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::providers::deserialization_serde::DeserializerSerde;
    use serde_json::json;
    use test_case::test_case;

    fn response(status: u16, body: &str) -> TransportResponse {
        TransportResponse {
            status,
            body: Some(body.as_bytes().to_vec()),
            ..Default::default()
        }
    }

    fn interpret(status: u16, body: &str) -> SubmissionResult {
        response_to_result(&DeserializerSerde, response(status, body))
    }

    #[test]
    fn extract_message_from_accepted_submission() {
        let result = interpret(200, r#"{"message":"Item excluido com sucesso!"}"#);

        assert_eq!(result.server_message(), Some("Item excluido com sucesso!"));
        assert_eq!(
            result.payload(),
            Some(&json!({"message": "Item excluido com sucesso!"}))
        );
    }

    #[test]
    fn accept_response_without_message() {
        let result = interpret(201, r#"{"id":7,"title":"Smart Watch"}"#);

        assert_eq!(
            result,
            SubmissionResult::Ok {
                payload: json!({"id": 7, "title": "Smart Watch"}),
                message: None,
            }
        );
    }

    #[test]
    fn accept_empty_body() {
        let result = response_to_result(
            &DeserializerSerde,
            TransportResponse {
                status: 204,
                ..Default::default()
            },
        );

        assert_eq!(
            result,
            SubmissionResult::Ok {
                payload: Value::Null,
                message: None,
            }
        );
    }

    #[test]
    fn ignore_non_string_message() {
        let result = interpret(200, r#"{"message":{"text":"saved"}}"#);

        assert!(result.is_ok());
        assert_eq!(result.server_message(), None);
    }

    #[test_case(200, r#"["python","rust"]"# ; "accepted pair")]
    #[test_case(200, r#"["python"]"# ; "accepted single")]
    #[test_case(404, r#"["x","Item nao encontrado"]"# ; "rejected pair")]
    #[test_case(200, r#""saved""# ; "accepted string")]
    fn ignore_fields_of_non_object_documents(status: u16, body: &str) {
        let result = interpret(status, body);

        assert_eq!(result.server_message(), None);
        assert_eq!(result.is_ok(), status == 200);
    }

    #[test]
    fn keep_non_object_payload() {
        let result = interpret(200, r#"[1,2,3]"#);

        assert_eq!(result.payload(), Some(&json!([1, 2, 3])));
        assert_eq!(result.server_message(), None);
    }

    #[test_case(404, r#"{"detail":"Item nao encontrado"}"#, Some("Item nao encontrado") ; "text detail")]
    #[test_case(
        422,
        r#"{"detail":[{"loc":["body","title"],"msg":"field required"},{"loc":["body",0],"msg":"invalid"}]}"#,
        Some("body.title: field required; body.0: invalid") ;
        "validation errors"
    )]
    #[test_case(400, r#"{"detail":{"message":"Slug already used"}}"#, Some("Slug already used") ; "object detail")]
    #[test_case(400, r#"{"detail":42}"#, None ; "unsupported detail")]
    #[test_case(500, r#"{"error":"boom"}"#, None ; "missing detail")]
    #[test_case(502, "<html>Bad Gateway</html>", None ; "not a json document")]
    fn extract_detail_from_rejected_submission(status: u16, body: &str, detail: Option<&str>) {
        let result = interpret(status, body);

        assert_eq!(
            result,
            SubmissionResult::Failed {
                status_code: Some(status),
                detail: detail.map(String::from),
            }
        );
    }

    #[test]
    fn fail_on_broken_success_body() {
        let result = interpret(200, "{not json");

        assert_eq!(
            result,
            SubmissionResult::Failed {
                status_code: Some(200),
                detail: None,
            }
        );
    }

    #[test]
    fn fail_on_empty_error_body() {
        let result = interpret(500, "");

        assert_eq!(
            result,
            SubmissionResult::Failed {
                status_code: Some(500),
                detail: None,
            }
        );
    }

    #[test]
    fn expose_variant_predicates() {
        let result = SubmissionResult::NetworkError {
            cause: SubmitterError::Transport {
                details: "timeout".into(),
            },
        };

        assert!(result.is_network_error());
        assert!(!result.is_ok());
        assert!(!result.is_failed());
        assert_eq!(result.server_message(), None);
        assert_eq!(result.payload(), None);
    }
}
