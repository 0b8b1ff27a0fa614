use thiserror::Error;

/// A response that decoded fine but cannot be applied to the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("{endpoint} reported failure")]
    Rejected { endpoint: &'static str },
    #[error("{endpoint} response is missing `{field}`")]
    MissingField {
        endpoint: &'static str,
        field: &'static str,
    },
}

impl ResponseError {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Rejected { endpoint } | Self::MissingField { endpoint, .. } => endpoint,
        }
    }
}
