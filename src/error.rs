//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. It centralizes error management, providing a consistent way to
//! represent the failure modes of authentication and task operations.
//!
//! `AppError` implements `actix_web::error::ResponseError` to seamlessly convert
//! application errors into appropriate HTTP responses with JSON bodies. It also
//! provides `From` trait implementations for common error types like
//! `sqlx::Error`, `validator::ValidationErrors`, `jsonwebtoken::errors::Error`,
//! and `bcrypt::BcryptError`, allowing for easy conversion using the `?` operator.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
///
/// The variants mirror the failure modes of the domain rather than raw HTTP
/// statuses; the HTTP mapping lives in the `ResponseError` impl below.
#[derive(Debug)]
pub enum AppError {
    /// A signup was attempted with an email that is already registered (HTTP 400).
    DuplicateEmail,
    /// Login failed. Deliberately carries no detail about whether the email or
    /// the password was wrong (HTTP 401).
    InvalidCredentials,
    /// A bearer token was missing, malformed, expired, carried the wrong
    /// signature or algorithm, or lacked a subject claim (HTTP 401).
    InvalidToken(String),
    /// A token verified but its subject no longer maps to a stored user,
    /// e.g. the account was deleted after issuance (HTTP 401).
    UserNotFound,
    /// No task with the given id exists for the calling owner. A task owned by
    /// someone else is indistinguishable from a missing one (HTTP 404).
    TaskNotFound,
    /// Request body failed schema validation (HTTP 422 Unprocessable Entity).
    ValidationError(String),
    /// An error originating from database operations (HTTP 500).
    DatabaseError(String),
    /// An unexpected server-side error, e.g. a hashing failure (HTTP 500).
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::DuplicateEmail => write!(f, "Email already exists"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::InvalidToken(msg) => write!(f, "Invalid token: {}", msg),
            AppError::UserNotFound => write!(f, "User not found"),
            AppError::TaskNotFound => write!(f, "Task not found"),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// `UserNotFound` renders 401 rather than 404: a structurally valid token for a
/// deleted account is an authentication failure like any other, and the status
/// code must not disclose whether the account exists.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::DuplicateEmail => HttpResponse::BadRequest().json(json!({
                "error": self.to_string()
            })),
            AppError::InvalidCredentials => HttpResponse::Unauthorized().json(json!({
                "error": self.to_string()
            })),
            AppError::InvalidToken(_) => HttpResponse::Unauthorized().json(json!({
                "error": "Invalid token"
            })),
            AppError::UserNotFound => HttpResponse::Unauthorized().json(json!({
                "error": "Invalid token"
            })),
            AppError::TaskNotFound => HttpResponse::NotFound().json(json!({
                "error": self.to_string()
            })),
            AppError::ValidationError(msg) => HttpResponse::UnprocessableEntity().json(json!({
                "error": msg
            })),
            // Database internals are not echoed back to the client.
            AppError::DatabaseError(_) => HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error"
            })),
            AppError::InternalServerError(_) => HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error"
            })),
        }
    }
}

/// Converts `sqlx::Error` into `AppError::DatabaseError`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        AppError::DatabaseError(error.to_string())
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`.
///
/// The detailed validation messages are preserved.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::InvalidToken`.
///
/// This is used when JWT decoding or verification fails.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::InvalidToken(error.to_string())
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::InternalServerError`.
///
/// This handles errors during password hashing.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}
