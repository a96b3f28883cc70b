use thiserror::Error;

/// Failure of one API call.
///
/// `Display` is the human string the pages show. The variant is kept so that
/// callers can react to an expired session without parsing that string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Network { message: String },
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    Malformed { message: String },
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Client-side validation failure, raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please complete all fields.")]
    MissingFields,
    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },
    #[error("Amount must be a positive number.")]
    InvalidAmount,
    #[error("Date must look like YYYY-MM-DD.")]
    InvalidDate,
    #[error("Month must be between 1 and 12.")]
    InvalidMonth,
    #[error("Age must be between 1 and 120.")]
    InvalidAge,
    #[error("Please enter a valid {field}.")]
    InvalidNumber { field: &'static str },
    #[error("Please select a category.")]
    MissingCategory,
}
