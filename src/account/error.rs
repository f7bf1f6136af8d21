use std::fmt;

use thiserror::Error;

/// Account failures. The `Display` text is what the patient sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter your email")]
    MissingEmail,

    #[error("Please create a password")]
    MissingPassword,

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("No patient record found. Register first.")]
    NoRecord,

    #[error("Could not save the patient record: {0}")]
    Storage(String),

    #[error("Could not secure the password: {0}")]
    Credential(String),

    #[error("{0}")]
    Remote(#[from] AuthErrorCode),
}

/// Error codes reported by a remote account provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthErrorCode {
    EmailAlreadyInUse,
    InvalidEmail,
    WeakPassword,
    UserNotFound,
    WrongPassword,
    TooManyRequests,
    NetworkRequestFailed,
    /// Any other provider code, with the provider's own message if it sent one.
    Other {
        code: String,
        message: Option<String>,
    },
}

impl AuthErrorCode {
    /// Classify a provider code such as `auth/wrong-password`.
    pub fn from_code(code: &str, message: Option<&str>) -> Self {
        match code {
            "auth/email-already-in-use" => AuthErrorCode::EmailAlreadyInUse,
            "auth/invalid-email" => AuthErrorCode::InvalidEmail,
            "auth/weak-password" => AuthErrorCode::WeakPassword,
            "auth/user-not-found" => AuthErrorCode::UserNotFound,
            "auth/wrong-password" => AuthErrorCode::WrongPassword,
            "auth/too-many-requests" => AuthErrorCode::TooManyRequests,
            "auth/network-request-failed" => AuthErrorCode::NetworkRequestFailed,
            _ => AuthErrorCode::Other {
                code: code.to_string(),
                message: message.filter(|m| !m.is_empty()).map(str::to_string),
            },
        }
    }

    pub fn code(&self) -> &str {
        match self {
            AuthErrorCode::EmailAlreadyInUse => "auth/email-already-in-use",
            AuthErrorCode::InvalidEmail => "auth/invalid-email",
            AuthErrorCode::WeakPassword => "auth/weak-password",
            AuthErrorCode::UserNotFound => "auth/user-not-found",
            AuthErrorCode::WrongPassword => "auth/wrong-password",
            AuthErrorCode::TooManyRequests => "auth/too-many-requests",
            AuthErrorCode::NetworkRequestFailed => "auth/network-request-failed",
            AuthErrorCode::Other { code, .. } => code.as_str(),
        }
    }

    pub fn user_message(&self) -> &str {
        match self {
            AuthErrorCode::EmailAlreadyInUse => "This email is already registered",
            AuthErrorCode::InvalidEmail => "Please enter a valid email address",
            AuthErrorCode::WeakPassword => "Password must be at least 6 characters",
            AuthErrorCode::UserNotFound => "No account found with this email",
            AuthErrorCode::WrongPassword => "Incorrect password",
            AuthErrorCode::TooManyRequests => "Too many attempts. Please try again later",
            AuthErrorCode::NetworkRequestFailed => {
                "Could not reach the account service. Check your connection"
            }
            AuthErrorCode::Other {
                message: Some(message),
                ..
            } => message.as_str(),
            AuthErrorCode::Other { message: None, .. } => "An error occurred",
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

impl std::error::Error for AuthErrorCode {}
