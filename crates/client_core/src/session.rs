use serde::Serialize;
use shared::{
    domain::{Location, Place},
    protocol::SearchOutcome,
};

/// What the page currently shows: the active location and the last search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub location: Option<Location>,
    pub places: Vec<Place>,
}

impl SessionState {
    pub fn apply_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    /// Replaces location and places together; the map markup is returned for rendering.
    pub fn apply_search(&mut self, outcome: SearchOutcome) -> String {
        self.location = Some(outcome.location);
        self.places = outcome.places;
        outcome.map_html
    }
}
