//! # TextPrep Server
//!
//! Thin HTTP facade over [`textprep_core`]. Decodes a JSON request, runs the
//! preprocessing engine and encodes the result.
//!
//! ## Routes
//!
//! - `GET /` health check
//! - `POST /preprocess` with `{"text": "...", "options": {...}}`

pub mod config;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use textprep_core::{PreprocessEngine, PreprocessingOptions, PreprocessingResult};

pub use config::ServerConfig;

/// Body returned by the health check
pub const HEALTH_MESSAGE: &str = "Text Preprocessing API is running! 🚀";

// ============================================================================
// State and routing
// ============================================================================

/// Shared, read-only application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: Arc<PreprocessEngine>,
}

impl AppState {
    pub fn new(engine: PreprocessEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PreprocessEngine::english())
    }
}

/// Build the application router
pub fn router(state: AppState, cors: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(health))
        .route("/preprocess", post(preprocess))
        .with_state(state);

    if cors {
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(TraceLayer::new_for_http())
}

// ============================================================================
// Request / response types
// ============================================================================

/// Body of `POST /preprocess`.
///
/// Only a JSON object is accepted, for the body and for `options`; arrays are
/// never decoded positionally.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PreprocessRequest {
    pub text: Option<String>,

    /// Missing or `null` disables every step
    pub options: Option<PreprocessingOptions>,
}

impl<'de> Deserialize<'de> for PreprocessRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;

        let text = match fields.remove("text") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "invalid type for `text`: expected a string, found {}",
                    kind(&other)
                )))
            }
        };

        let options = match fields.remove("options") {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(
                PreprocessingOptions::deserialize(Value::Object(map)).map_err(de::Error::custom)?,
            ),
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "invalid type for `options`: expected an object, found {}",
                    kind(&other)
                )))
            }
        };

        Ok(Self { text, options })
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Errors returned to clients as `{"error": message}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No text provided")]
    MissingInput,

    #[error("{message}")]
    MalformedBody { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingInput => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<textprep_core::Error> for ApiError {
    fn from(err: textprep_core::Error) -> Self {
        match err {
            textprep_core::Error::MissingInput => ApiError::MissingInput,
            other => ApiError::MalformedBody {
                status: StatusCode::BAD_REQUEST,
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = %status, error = %self, "rejected request");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> &'static str {
    HEALTH_MESSAGE
}

async fn preprocess(
    State(state): State<AppState>,
    payload: Result<Json<PreprocessRequest>, JsonRejection>,
) -> Result<Json<PreprocessingResult>, ApiError> {
    let Json(request) = payload?;
    let text = request.text.ok_or(ApiError::MissingInput)?;
    let options = request.options.unwrap_or_default();

    debug!(chars = text.chars().count(), steps = ?options.enabled_steps(), "preprocess request");

    let result = state.engine.try_execute(&text, &options)?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::default(), true)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/preprocess")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], HEALTH_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_full_normalization() {
        let body = r#"{
            "text": "Hello, World! 123",
            "options": {
                "lowercase": true,
                "remove_punctuation": true,
                "remove_numbers": true,
                "remove_extra_spaces": true
            }
        }"#;
        let (status, json) = send(app(), post_json(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["processed_text"], "hello world");
        assert_eq!(json["original_length"], 17);
        assert_eq!(json["processed_length"], 11);
        assert!(json["tokens"].is_null());
        assert!(json["pos_tags"].is_null());
    }

    #[tokio::test]
    async fn test_no_options_is_identity() {
        let (status, json) = send(app(), post_json(r#"{"text": "Keep ME as-is!"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["processed_text"], "Keep ME as-is!");
        assert_eq!(json["original_length"], json["processed_length"]);
        assert!(json["stemmed_words"].is_null());
        assert!(json["lemmatized_words"].is_null());

        let (status, json) =
            send(app(), post_json(r#"{"text": "Same", "options": null}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["processed_text"], "Same");
    }

    #[tokio::test]
    async fn test_token_steps() {
        let body = r#"{
            "text": "the dog barks",
            "options": {"remove_stopwords": 1, "stemming": "yes", "pos_tagging": true}
        }"#;
        let (status, json) = send(app(), post_json(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tokens"], json!(["dog", "barks"]));
        assert_eq!(json["stemmed_words"], json!(["dog", "bark"]));
        assert_eq!(json["pos_tags"], json!([["dog", "NN"], ["barks", "VBZ"]]));
        assert_eq!(json["processed_text"], "dog bark");
    }

    #[tokio::test]
    async fn test_missing_text() {
        for body in [r#"{"text": ""}"#, r#"{"text": null}"#, r#"{}"#] {
            let (status, json) = send(app(), post_json(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["error"], "No text provided");
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (status, json) = send(app(), post_json("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());

        let (status, json) = send(app(), post_json(r#"{"text": 42}"#)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_non_object_body_rejected() {
        for body in [r#"["hi"]"#, r#"["hi", [true, true]]"#, r#""hi""#] {
            let (status, json) = send(app(), post_json(body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert!(json["error"].is_string());
        }
    }

    #[tokio::test]
    async fn test_non_object_options_rejected() {
        for options in ["[true]", "true", "\"lowercase\"", "1"] {
            let body = format!(r#"{{"text": "Hi", "options": {}}}"#, options);
            let (status, json) = send(app(), post_json(&body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert!(json["error"].is_string());
        }
    }

    #[test]
    fn test_request_decoding() {
        let request: PreprocessRequest =
            serde_json::from_str(r#"{"text": "Hi", "options": {"lowercase": 1}, "extra": 0}"#)
                .unwrap();
        assert_eq!(request.text.as_deref(), Some("Hi"));
        assert!(request.options.unwrap().lowercase);

        let request: PreprocessRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_none());
        assert!(request.options.is_none());

        assert!(serde_json::from_str::<PreprocessRequest>(r#"["Hi", {"lowercase": true}]"#).is_err());
        assert!(serde_json::from_str::<PreprocessRequest>(r#"{"text": "Hi", "options": [true]}"#).is_err());
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/preprocess")
            .body(Body::from(r#"{"text": "hi"}"#))
            .unwrap();
        let (status, json) = send(app(), request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_cors_headers() {
        let request = || {
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap()
        };

        let response = app().oneshot(request()).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );

        let response = router(AppState::default(), false)
            .oneshot(request())
            .await
            .unwrap();
        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[test]
    fn test_api_error_status() {
        assert_eq!(ApiError::MissingInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(textprep_core::Error::MissingInput).to_string(),
            "No text provided"
        );
    }
}
