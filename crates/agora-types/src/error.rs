//! Error type shared by every Agora crate

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub type ClResult<T> = std::result::Result<T, Error>;

/// `NotFound`, `PermissionDenied` and `ValidationError` describe faults in the
/// request itself; anything the server or a plugin got wrong maps to 500.
#[derive(Debug)]
pub enum Error {
	NotFound,
	PermissionDenied,
	ValidationError(String),
	/// Server misconfiguration (missing adapter, missing or unusable template)
	ConfigError(String),
	Internal(String),
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Internal(format!("JSON error: {}", err))
	}
}

impl Error {
	fn code(&self) -> (StatusCode, &'static str) {
		match self {
			Error::NotFound => (StatusCode::NOT_FOUND, "E-NOT-FOUND"),
			Error::PermissionDenied => (StatusCode::FORBIDDEN, "E-PERMISSION"),
			Error::ValidationError(_) => (StatusCode::BAD_REQUEST, "E-VALIDATION"),
			Error::ConfigError(_) | Error::Internal(_) => {
				(StatusCode::INTERNAL_SERVER_ERROR, "E-INTERNAL")
			}
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let (status, code) = self.code();
		// Internal details stay in the log, not in the response
		let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
			tracing::error!(error = %self, "Request failed");
			"Internal server error".to_string()
		} else {
			self.to_string()
		};
		let body = serde_json::json!({
			"error": {
				"code": code,
				"message": message,
			}
		});
		(status, Json(body)).into_response()
	}
}


// vim: ts=4
