use shared::error::ResponseError;
use thiserror::Error;

use crate::{geolocation::PositionError, notifications::Severity};

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("geolocation is not supported on this platform")]
    GeolocationUnsupported,
    #[error("failed to acquire device position: {0}")]
    Geolocation(#[from] PositionError),
    #[error("invalid coordinates: latitude={latitude:?} longitude={longitude:?}")]
    InvalidCoordinates { latitude: String, longitude: String },
    #[error(transparent)]
    Rejected(#[from] ResponseError),
    #[error("request to {endpoint} failed: {source:#}")]
    Transport {
        endpoint: &'static str,
        source: anyhow::Error,
    },
}

impl FinderError {
    pub fn transport(endpoint: &'static str, source: anyhow::Error) -> Self {
        Self::Transport { endpoint, source }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::GeolocationUnsupported
            | Self::Geolocation(_)
            | Self::InvalidCoordinates { .. } => Severity::Warning,
            Self::Rejected(_) | Self::Transport { .. } => Severity::Danger,
        }
    }

    /// Banner text shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::GeolocationUnsupported => "브라우저가 위치 서비스를 지원하지 않습니다.",
            Self::Geolocation(_) => "위치를 가져올 수 없습니다. 수동으로 입력해주세요.",
            Self::InvalidCoordinates { .. } => "올바른 위도와 경도를 입력해주세요.",
            Self::Rejected(err) if err.endpoint() == shared::protocol::GET_LOCATION_PATH => {
                "위치 정보를 가져오는데 실패했습니다."
            }
            Self::Rejected(_) => "여행지 검색에 실패했습니다.",
            Self::Transport { .. } => "서버 오류가 발생했습니다.",
        }
    }

    /// Sensor and transport failures carry detail worth keeping in the logs.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::Geolocation(_) | Self::Transport { .. })
    }
}
