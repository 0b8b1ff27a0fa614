//! UI events delivered to the controller and the outcome of handling them.

use uuid::Uuid;

use crate::{document::ElementId, notifications::Severity};

pub const KEY_ENTER: &str = "Enter";

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Initialize,
    RadiusInput(String),
    FieldInput { target: ElementId, value: String },
    LocateRequested,
    SearchRequested,
    KeyDown {
        key: String,
        target: Option<ElementId>,
    },
    Resize,
    DismissNotification(Uuid),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::RadiusInput(_) => "radius_input",
            Self::FieldInput { .. } => "field_input",
            Self::LocateRequested => "locate",
            Self::SearchRequested => "search",
            Self::KeyDown { .. } => "key_down",
            Self::Resize => "resize",
            Self::DismissNotification(_) => "dismiss_notification",
        }
    }

    /// Enter inside one of the coordinate fields submits the search.
    pub fn submits_search(&self) -> bool {
        matches!(
            self,
            Self::KeyDown {
                key,
                target: Some(ElementId::Latitude | ElementId::Longitude),
            } if key == KEY_ENTER
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    Ignored,
    /// The failure has already been surfaced as a notification of this severity.
    Failed(Severity),
}
