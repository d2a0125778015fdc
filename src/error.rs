// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing notices.

use crate::navigation::Notice;

/// Application error type that converts to a user-visible notice.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("User not signed in")]
    NotSignedIn,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("News API error: {0}")]
    NewsApi(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Error codes the identity provider returns for a bad email/password pair.
    pub const CREDENTIAL_ERRORS: [&'static str; 4] = [
        "INVALID_PASSWORD",
        "EMAIL_NOT_FOUND",
        "INVALID_LOGIN_CREDENTIALS",
        "INVALID_EMAIL",
    ];

    /// Whether this is an identity-provider rejection of the credentials
    /// themselves (as opposed to a transport or server failure).
    pub fn is_credential_error(&self) -> bool {
        match self {
            AppError::Auth(msg) => Self::CREDENTIAL_ERRORS
                .iter()
                .any(|code| msg.starts_with(code)),
            _ => false,
        }
    }

    /// Build the notice shown to the user for this error.
    pub fn notice(&self) -> Notice {
        match self {
            AppError::NotSignedIn => Notice::alert(self.to_string()),
            AppError::InvalidInput(msg) => Notice::alert(msg.clone()),
            AppError::Auth(msg) => Notice::new("Account", humanize_code(msg)),
            AppError::NewsApi(_) => Notice::new("News", "Unable to load the news feed."),
            AppError::NotFound(_) | AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Unexpected error surfaced to user");
                Notice::new("Error", "Something went wrong. Please try again.")
            }
        }
    }
}

/// Turn an identity-provider code such as `EMAIL_EXISTS` or
/// `WEAK_PASSWORD : Password should be at least 6 characters` into a sentence.
fn humanize_code(msg: &str) -> String {
    let (code, detail) = match msg.split_once(" : ") {
        Some((code, detail)) => (code.trim(), Some(detail.trim())),
        None => (msg.trim(), None),
    };

    if let Some(detail) = detail {
        return detail.to_string();
    }

    let mut words = code.to_lowercase().replace('_', " ");
    if let Some(first) = words.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    words
}

/// Result type alias for controllers and services
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_plain_code() {
        assert_eq!(humanize_code("EMAIL_EXISTS"), "Email exists");
    }

    #[test]
    fn test_humanize_code_with_detail() {
        assert_eq!(
            humanize_code("WEAK_PASSWORD : Password should be at least 6 characters"),
            "Password should be at least 6 characters"
        );
    }

    #[test]
    fn test_not_signed_in_notice_text() {
        let notice = AppError::NotSignedIn.notice();
        assert_eq!(notice.message, "User not signed in");
        assert!(notice.then.is_none());
    }
}
