//! Boundary validation for inbound HTTP requests.
//!
//! Request shape (field presence and JSON types) is enforced by serde when the
//! body is extracted. These handlers turn extractor rejections into the
//! standard error envelope so malformed input never reaches the store.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, PathError};
use actix_web::web;
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidBody,
    InvalidPath,
}

impl ErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidBody => "invalid_body",
            Self::InvalidPath => "invalid_path",
        }
    }
}

fn validation_error(code: ErrorCode, message: &str, reason: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "code": code.as_str(),
        "reason": reason,
    }))
}

pub(crate) fn invalid_body_error(err: &JsonPayloadError) -> Error {
    validation_error(
        ErrorCode::InvalidBody,
        "request body is not a valid user payload",
        err.to_string(),
    )
}

pub(crate) fn invalid_path_error(err: &PathError) -> Error {
    validation_error(
        ErrorCode::InvalidPath,
        "path parameter is not a valid user id",
        err.to_string(),
    )
}

/// JSON extractor configuration mapping payload failures to `400` envelopes.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
        debug!(error = %err, path = %req.path(), "rejected request body");
        invalid_body_error(&err).into()
    })
}

/// Path extractor configuration mapping parse failures to `400` envelopes.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req: &HttpRequest| {
        debug!(error = %err, path = %req.path(), "rejected path parameter");
        invalid_path_error(&err).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use actix_web::{App, HttpResponse, http::StatusCode, test as actix_test};
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    struct Payload {
        age: i64,
    }

    async fn echo(payload: web::Json<Payload>, id: web::Path<i64>) -> HttpResponse {
        HttpResponse::Ok().body(format!("{}:{}", id.into_inner(), payload.age))
    }

    #[rstest]
    #[case(r#"{"age": "old"}"#, "invalid_body")]
    #[case(r#"{"age": 1.5}"#, "invalid_body")]
    #[case(r"{}", "invalid_body")]
    #[case(r"not json", "invalid_body")]
    #[actix_web::test]
    async fn malformed_bodies_become_invalid_request(#[case] body: &str, #[case] code: &str) {
        let app = actix_test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(path_config())
                .route("/items/{id}", web::post().to(echo)),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/items/1")
            .insert_header(("content-type", "application/json"))
            .set_payload(body.to_owned())
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value["code"], "invalid_request");
        assert_eq!(value["details"]["code"], code);
    }

    #[rstest]
    #[actix_web::test]
    async fn non_numeric_ids_become_invalid_request() {
        let app = actix_test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(path_config())
                .route("/items/{id}", web::post().to(echo)),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/items/abc")
            .set_json(serde_json::json!({ "age": 3 }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value["details"]["code"], "invalid_path");
    }

    #[rstest]
    fn validation_errors_use_invalid_request_code() {
        let err = invalid_body_error(&JsonPayloadError::ContentType);
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(
            err.details().and_then(|d| d.get("code")).and_then(Value::as_str),
            Some("invalid_body")
        );
    }
}
