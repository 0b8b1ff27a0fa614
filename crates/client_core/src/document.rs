//! In-memory stand-in for the page's DOM, keyed by the element ids the controller relies on.

use std::collections::HashMap;

use shared::domain::PlaceTypeOption;

use crate::loading::{LoadingIndicator, LoadingState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Radius,
    RadiusValue,
    Map,
    Latitude,
    Longitude,
    LocationInfo,
    CurrentAddress,
    PlaceType,
    ResultsCard,
    PlacesList,
    Loading,
}

impl ElementId {
    pub const ALL: [ElementId; 11] = [
        ElementId::Radius,
        ElementId::RadiusValue,
        ElementId::Map,
        ElementId::Latitude,
        ElementId::Longitude,
        ElementId::LocationInfo,
        ElementId::CurrentAddress,
        ElementId::PlaceType,
        ElementId::ResultsCard,
        ElementId::PlacesList,
        ElementId::Loading,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Radius => "radius",
            Self::RadiusValue => "radiusValue",
            Self::Map => "map",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::LocationInfo => "locationInfo",
            Self::CurrentAddress => "currentAddress",
            Self::PlaceType => "placeType",
            Self::ResultsCard => "resultsCard",
            Self::PlacesList => "placesList",
            Self::Loading => "loading",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|element| element.as_str() == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Form value for inputs and selects.
    pub value: String,
    pub text: String,
    pub inner_html: String,
    pub visible: bool,
    /// Choices offered by a select element.
    pub options: Vec<PlaceTypeOption>,
}

#[derive(Debug, Clone)]
pub struct Document {
    elements: HashMap<ElementId, Element>,
    loading: LoadingIndicator,
}

impl Document {
    pub fn new() -> Self {
        let elements = ElementId::ALL
            .into_iter()
            .map(|id| (id, Element::default()))
            .collect::<HashMap<_, _>>();
        let mut document = Self {
            elements,
            loading: LoadingIndicator::new(),
        };
        for id in [
            ElementId::Radius,
            ElementId::RadiusValue,
            ElementId::Map,
            ElementId::Latitude,
            ElementId::Longitude,
            ElementId::PlaceType,
        ] {
            document.element_mut(id).visible = true;
        }
        document
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[&id]
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        self.elements.entry(id).or_default()
    }

    pub fn value(&self, id: ElementId) -> &str {
        &self.element(id).value
    }

    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        self.element_mut(id).value = value.into();
    }

    pub fn text(&self, id: ElementId) -> &str {
        &self.element(id).text
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.element_mut(id).text = text.into();
    }

    pub fn inner_html(&self, id: ElementId) -> &str {
        &self.element(id).inner_html
    }

    pub fn set_inner_html(&mut self, id: ElementId, html: impl Into<String>) {
        self.element_mut(id).inner_html = html.into();
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        match id {
            ElementId::Loading => self.loading.is_visible(),
            _ => self.element(id).visible,
        }
    }

    pub fn set_visible(&mut self, id: ElementId, visible: bool) {
        match id {
            ElementId::Loading => self.loading.set(if visible {
                LoadingState::Visible
            } else {
                LoadingState::Hidden
            }),
            _ => self.element_mut(id).visible = visible,
        }
    }

    /// Handle on the `loading` element, shared with in-flight calls.
    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    pub fn set_options(&mut self, id: ElementId, options: Vec<PlaceTypeOption>) {
        let element = self.element_mut(id);
        if !options.iter().any(|option| option.value == element.value) {
            if let Some(first) = options.first() {
                element.value = first.value.clone();
            }
        }
        element.options = options;
    }

    pub fn options(&self, id: ElementId) -> &[PlaceTypeOption] {
        &self.element(id).options
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
