//! Routes UI events to controller operations.

use crate::document::ElementId;

use super::{
    events::{EventOutcome, UiEvent},
    FinderController,
};

impl FinderController {
    pub async fn handle_event(&mut self, event: UiEvent) -> EventOutcome {
        let event_name = event.name();
        tracing::debug!(event = event_name, "handling ui event");

        if event.submits_search() {
            return self.run_search().await;
        }

        match event {
            UiEvent::Initialize => {
                self.initialize().await;
                EventOutcome::Handled
            }
            UiEvent::RadiusInput(value) => {
                self.on_radius_input(&value);
                EventOutcome::Handled
            }
            UiEvent::FieldInput { target, value } => match target {
                ElementId::Radius => {
                    self.on_radius_input(&value);
                    EventOutcome::Handled
                }
                ElementId::Latitude | ElementId::Longitude | ElementId::PlaceType => {
                    self.document_mut().set_value(target, value);
                    EventOutcome::Handled
                }
                _ => EventOutcome::Ignored,
            },
            UiEvent::LocateRequested => match self.acquire_device_location().await {
                Ok(_) => EventOutcome::Handled,
                Err(err) => EventOutcome::Failed(err.severity()),
            },
            UiEvent::SearchRequested => self.run_search().await,
            UiEvent::KeyDown { .. } => EventOutcome::Ignored,
            UiEvent::Resize => {
                if self.handle_resize().await {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                }
            }
            UiEvent::DismissNotification(id) => {
                if self.dismiss_notification(id) {
                    EventOutcome::Handled
                } else {
                    EventOutcome::Ignored
                }
            }
        }
    }

    async fn run_search(&mut self) -> EventOutcome {
        match self.search_places().await {
            Ok(_) => EventOutcome::Handled,
            Err(err) => EventOutcome::Failed(err.severity()),
        }
    }
}
