/// Directory domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// A lookup by a unique key (reference id, reset token, onboarding serial)
    /// matched no row.
    #[error("user not found")]
    NotFound,
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The store failed. The context chain names the operation and its key.
    #[error("persistence error: {0:#}")]
    Persistence(#[from] anyhow::Error),
}

impl DirectoryError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "USER_NOT_FOUND",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Persistence(_) => "PERSISTENCE",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
