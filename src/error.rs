use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    #[error("A contact with number {number} already exists")]
    DuplicateNumber { number: String },

    #[error("A contact with email {email} already exists")]
    DuplicateEmail { email: String },

    #[error("Contact not found: {name}")]
    NotFound { name: String },

    #[error("Search term cannot be empty")]
    EmptySearchTerm,

    #[error("Invalid search field '{field}' (use name, number or email)")]
    InvalidSearchField { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ContactResult<T> = Result<T, ContactError>;
