//! # Error handling for bound collections
//!
//! Every failing handler answers with the same JSON shape:
//!
//! ```json
//! {"error": "users with ID '7' not found", "kind": "not_found"}
//! ```
//!
//! `kind` lets clients branch without matching on the message text.
//!
//! Database errors are never sent to clients. They are logged through `tracing`
//! and replaced with a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Coarse classification carried in every error payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request was malformed: a bad `{id}` segment or an undecodable body.
    Request,
    /// No record matched the requested identifier.
    NotFound,
    /// The persistence layer failed.
    Persistence,
}

/// JSON body sent for any failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorPayload {
    /// Human readable message
    pub error: String,
    pub kind: ErrorKind,
}

/// Per-request failure of a generated handler.
#[derive(Debug)]
pub enum ApiError {
    /// 400 - the `{id}` path segment is not a 64-bit integer
    InvalidId {
        /// The segment as received
        raw: String,
    },

    /// 400 - the request body could not be decoded into the model
    InvalidBody {
        /// Decoder message
        message: String,
    },

    /// 404 - no record with the given identifier
    NotFound {
        /// Resource name (e.g. "users")
        resource: String,
        /// Identifier that was looked up, if known
        id: Option<i64>,
    },

    /// 500 - persistence failure (details logged, not exposed)
    Database {
        /// User-facing generic message
        message: String,
        /// Internal error (logged, not sent to user)
        internal: DbErr,
    },
}

impl ApiError {
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self::InvalidId { raw: raw.into() }
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>, id: Option<i64>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id,
        }
    }

    /// Wrap a database error without inspecting it.
    ///
    /// Prefer [`ApiError::from_db`] in handlers, which turns missing rows into
    /// [`ApiError::NotFound`].
    pub fn database(err: DbErr) -> Self {
        Self::Database {
            message: "A database error occurred".to_string(),
            internal: err,
        }
    }

    /// Classify a database error raised while operating on `resource`/`id`.
    ///
    /// `RecordNotFound` and `RecordNotUpdated` become 404; everything else is a
    /// 500 whose details stay in the logs.
    pub fn from_db(err: DbErr, resource: &str, id: Option<i64>) -> Self {
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Self::not_found(resource, id),
            other => Self::database(other),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidId { .. } | Self::InvalidBody { .. } => ErrorKind::Request,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Database { .. } => ErrorKind::Persistence,
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Request => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Persistence => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Sanitized message for the payload
    fn user_message(&self) -> String {
        match self {
            Self::InvalidId { raw } => format!("invalid id '{raw}'"),
            Self::InvalidBody { message } => format!("invalid request body: {message}"),
            Self::NotFound { resource, id } => {
                if let Some(id) = id {
                    format!("{resource} with ID '{id}' not found")
                } else {
                    format!("{resource} not found")
                }
            }
            Self::Database { message, .. } => message.clone(),
        }
    }

    #[must_use]
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            error: self.user_message(),
            kind: self.kind(),
        }
    }

    fn log_internal(&self) {
        match self {
            Self::Database { internal, .. } => {
                tracing::error!(error = ?internal, "Database error occurred");
            }
            _ => {
                tracing::debug!(
                    error = %self.user_message(),
                    status = %self.status_code(),
                    "API error"
                );
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();
        (self.status_code(), Json(self.payload())).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for ApiError {}

/// Configuration error raised while binding a collection.
///
/// These are programming mistakes, not per-request conditions: [`crate::bind`]
/// panics on them, [`crate::try_bind`] hands them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The collection path contains router syntax such as `{id}` or `*rest`.
    RouteSyntax { path: String, segment: String },
    /// The collection path contains an empty segment (`/a//b`).
    EmptySegment { path: String },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RouteSyntax { path, segment } => write!(
                f,
                "collection path '{path}' contains route syntax in segment '{segment}'"
            ),
            Self::EmptySegment { path } => {
                write!(f, "collection path '{path}' contains an empty segment")
            }
        }
    }
}

impl std::error::Error for BindError {}
