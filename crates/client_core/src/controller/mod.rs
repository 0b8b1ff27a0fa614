//! Controller layer: session state, document updates and the two remote calls behind them.

pub mod events;
pub mod orchestration;

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use shared::{
    domain::{Coordinates, Location, Place},
    protocol::{GetLocationRequest, SearchParameters, GET_LOCATION_PATH, SEARCH_PLACES_PATH},
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::{
    backend::PlacesBackend,
    document::{Document, ElementId},
    error::FinderError,
    geolocation::{
        GeolocationProvider, MissingGeolocation, PositionError, PositionErrorCode,
        PositionOptions,
    },
    notifications::{Notification, NotificationCenter, Severity},
    render,
    session::SessionState,
};

pub const DEFAULT_RADIUS_KM: u32 = 5;
pub const DEFAULT_PLACE_TYPE: &str = "tourist_attraction";
const MAP_RESIZE_DELAY: Duration = Duration::from_millis(100);

/// The embedded map that server-rendered markup brings along.
pub trait MapWidget: Send + Sync {
    fn supports_invalidate_size(&self) -> bool {
        true
    }

    fn invalidate_size(&self);
}

#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub position_options: PositionOptions,
    pub default_radius_km: u32,
    pub default_place_type: String,
    pub resize_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            position_options: PositionOptions::default(),
            default_radius_km: DEFAULT_RADIUS_KM,
            default_place_type: DEFAULT_PLACE_TYPE.to_string(),
            resize_delay: MAP_RESIZE_DELAY,
        }
    }
}

pub struct FinderController {
    backend: Arc<dyn PlacesBackend>,
    geolocation: Arc<dyn GeolocationProvider>,
    map_widget: Option<Arc<dyn MapWidget>>,
    config: ControllerConfig,
    document: Document,
    session: SessionState,
    notifications: NotificationCenter,
}

impl FinderController {
    pub fn new(backend: Arc<dyn PlacesBackend>) -> Self {
        Self::new_with_dependencies(
            backend,
            Arc::new(MissingGeolocation),
            ControllerConfig::default(),
        )
    }

    pub fn new_with_dependencies(
        backend: Arc<dyn PlacesBackend>,
        geolocation: Arc<dyn GeolocationProvider>,
        config: ControllerConfig,
    ) -> Self {
        Self {
            backend,
            geolocation,
            map_widget: None,
            config,
            document: Document::new(),
            session: SessionState::default(),
            notifications: NotificationCenter::new(),
        }
    }

    pub fn attach_map_widget(&mut self, widget: Arc<dyn MapWidget>) {
        self.map_widget = Some(widget);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Fills form defaults and the map placeholder, then tries to load the server's place types.
    pub async fn initialize(&mut self) {
        let radius = self.config.default_radius_km.to_string();
        self.on_radius_input(&radius);
        self.document
            .set_options(ElementId::PlaceType, render::default_place_type_options());
        self.document
            .set_value(ElementId::PlaceType, self.config.default_place_type.clone());
        self.document
            .set_inner_html(ElementId::Map, render::render_map_placeholder());

        if let Err(err) = self.load_place_types().await {
            warn!("keeping built-in place types: {err:#}");
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn load_place_types(&mut self) -> anyhow::Result<usize> {
        let options = self.backend.get_place_types().await?;
        if options.is_empty() {
            debug!("server returned no place types");
            return Ok(0);
        }
        let count = options.len();
        self.document.set_options(ElementId::PlaceType, options);
        Ok(count)
    }

    pub fn on_radius_input(&mut self, value: &str) {
        self.document.set_value(ElementId::Radius, value);
        self.document.set_text(ElementId::RadiusValue, value);
    }

    /// Queries the position capability and resolves the result into an address.
    #[tracing::instrument(skip(self))]
    pub async fn acquire_device_location(&mut self) -> Result<Location, FinderError> {
        let position = {
            let _loading = self.document.loading().show();

            if !self.geolocation.is_supported() {
                return Err(self.report(FinderError::GeolocationUnsupported));
            }

            let options = self.config.position_options;
            let outcome = tokio::time::timeout(
                options.timeout,
                self.geolocation.current_position(options),
            )
            .await
            .unwrap_or_else(|_| {
                Err(PositionError::new(
                    PositionErrorCode::Timeout,
                    format!("no position within {}ms", options.timeout.as_millis()),
                ))
            });

            match outcome {
                Ok(position) => position,
                Err(err) => return Err(self.report(err.into())),
            }
        };

        let Coordinates {
            latitude,
            longitude,
        } = position.coords;
        self.document
            .set_value(ElementId::Latitude, latitude.to_string());
        self.document
            .set_value(ElementId::Longitude, longitude.to_string());

        self.resolve_location(latitude, longitude).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn resolve_location(
        &mut self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Location, FinderError> {
        let loading = self.document.loading().show();
        let result = match self
            .backend
            .get_location(GetLocationRequest {
                latitude,
                longitude,
            })
            .await
        {
            Ok(response) => response.into_result().map_err(FinderError::from),
            Err(err) => Err(FinderError::transport(GET_LOCATION_PATH, err)),
        };
        drop(loading);

        let location = result.map_err(|err| self.report(err))?;
        info!(address = %location.address, "location resolved");

        self.session.apply_location(location.clone());
        self.show_location(&location);
        self.notify(render::location_set_message(), Severity::Success);
        Ok(location)
    }

    /// Searches around the coordinates in the form. Returns how many places were found.
    #[tracing::instrument(skip(self))]
    pub async fn search_places(&mut self) -> Result<usize, FinderError> {
        let params = self
            .read_search_parameters()
            .map_err(|err| self.report(err))?;
        debug!(?params, "searching places");

        let loading = self.document.loading().show();
        let result = match self.backend.search_places(params).await {
            Ok(response) => response.into_result().map_err(FinderError::from),
            Err(err) => Err(FinderError::transport(SEARCH_PLACES_PATH, err)),
        };
        drop(loading);

        let outcome = result.map_err(|err| self.report(err))?;
        let map_html = self.session.apply_search(outcome);

        if let Some(location) = self.session.location.clone() {
            self.show_location(&location);
        }
        let places_html = render::render_places(&self.session.places);
        self.show_places_html(places_html);
        self.document.set_inner_html(ElementId::Map, map_html);

        let count = self.session.places.len();
        info!(count, "places found");
        self.notify(render::places_found_message(count), Severity::Success);
        Ok(count)
    }

    pub fn render_places(&mut self, places: &[Place]) {
        self.show_places_html(render::render_places(places));
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> Uuid {
        self.notify_at(message, severity, Utc::now())
    }

    pub fn notify_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: DateTime<Utc>,
    ) -> Uuid {
        self.notifications.prune_expired(now);
        self.notifications.push_at(message, severity, now)
    }

    pub fn dismiss_notification(&mut self, id: Uuid) -> bool {
        self.notifications.dismiss(id)
    }

    pub fn active_notifications(&self, now: DateTime<Utc>) -> Vec<&Notification> {
        self.notifications.active_at(now).collect()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Relayouts the embedded map after a viewport resize. Returns whether it was asked to.
    pub async fn handle_resize(&self) -> bool {
        if !render::is_rendered_map(self.document.inner_html(ElementId::Map)) {
            return false;
        }
        tokio::time::sleep(self.config.resize_delay).await;

        match &self.map_widget {
            Some(widget) if widget.supports_invalidate_size() => {
                widget.invalidate_size();
                true
            }
            _ => false,
        }
    }

    fn read_search_parameters(&self) -> Result<SearchParameters, FinderError> {
        let raw_latitude = self.document.value(ElementId::Latitude);
        let raw_longitude = self.document.value(ElementId::Longitude);
        let (Some(latitude), Some(longitude)) = (
            parse_coordinate(raw_latitude),
            parse_coordinate(raw_longitude),
        ) else {
            return Err(FinderError::InvalidCoordinates {
                latitude: raw_latitude.to_string(),
                longitude: raw_longitude.to_string(),
            });
        };

        let raw_radius = self.document.value(ElementId::Radius);
        let radius_km = parse_radius_km(raw_radius).unwrap_or_else(|| {
            warn!(
                raw_radius,
                fallback_km = self.config.default_radius_km,
                "unreadable radius"
            );
            self.config.default_radius_km
        });

        let place_type = match self.document.value(ElementId::PlaceType).trim() {
            "" => self.config.default_place_type.clone(),
            value => value.to_string(),
        };

        Ok(SearchParameters::from_kilometers(
            Coordinates::new(latitude, longitude),
            radius_km,
            place_type,
        ))
    }

    fn show_location(&mut self, location: &Location) {
        self.document
            .set_text(ElementId::CurrentAddress, location.address.clone());
        self.document.set_visible(ElementId::LocationInfo, true);
    }

    fn show_places_html(&mut self, html: String) {
        self.document.set_inner_html(ElementId::PlacesList, html);
        self.document.set_visible(ElementId::ResultsCard, true);
    }

    /// Surfaces a failure as a banner and hands it back for the caller to return.
    fn report(&mut self, err: FinderError) -> FinderError {
        if err.is_diagnostic() {
            error!("{err}");
        } else {
            warn!("{err}");
        }
        self.notify(err.user_message(), err.severity());
        err
    }
}

/// Reads the longest numeric prefix of a coordinate field, so "37.5abc" gives 37.5.
/// `None` only when the text does not start with a number.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };
    if unsigned.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let bytes = unsigned.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = digits_from(0);
    let mut mantissa_digits = end;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(end + 1);
        mantissa_digits += fraction;
        end += 1 + fraction;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_start = end + 1;
        if matches!(bytes.get(exponent_start), Some(b'+' | b'-')) {
            exponent_start += 1;
        }
        let exponent = digits_from(exponent_start);
        if exponent > 0 {
            end = exponent_start + exponent;
        }
    }

    unsigned[..end].parse::<f64>().ok().map(|value| sign * value)
}

/// Reads the whole-kilometer prefix of a slider value, so "5" and "5.7" both give 5.
pub fn parse_radius_km(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().ok()
}
