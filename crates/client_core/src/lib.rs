pub mod backend;
pub mod controller;
pub mod document;
pub mod error;
pub mod geolocation;
pub mod loading;
pub mod notifications;
pub mod render;
pub mod session;

pub use backend::{HttpPlacesBackend, PlacesBackend};
pub use controller::{
    events::{EventOutcome, UiEvent},
    ControllerConfig, FinderController, MapWidget,
};
pub use document::{Document, ElementId};
pub use error::FinderError;
pub use geolocation::{
    FixedGeolocation, GeolocationProvider, MissingGeolocation, Position, PositionError,
    PositionErrorCode, PositionOptions,
};
pub use loading::{LoadingIndicator, LoadingState};
pub use notifications::{Notification, NotificationCenter, Severity};
pub use session::SessionState;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
