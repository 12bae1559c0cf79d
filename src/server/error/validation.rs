use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid or missing value for field `{field}`")]
    InvalidInput { field: &'static str },
}

impl ValidationError {
    pub(crate) fn field(field: &'static str) -> Self {
        Self::InvalidInput { field }
    }
}
