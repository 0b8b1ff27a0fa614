//! Pure rendering: session data in, markup out. Nothing here touches the document.

use shared::domain::{Place, PlaceTypeOption};

use crate::notifications::Notification;

pub const STAR_UNITS: u8 = 5;
pub const MAX_TYPE_BADGES: usize = 3;
/// Server-rendered maps are recognised by this marker in their markup.
pub const RENDERED_MAP_MARKER: &str = "folium";
pub const NO_RESULTS_HTML: &str = r#"<p class="text-muted">검색 결과가 없습니다.</p>"#;

const TYPE_LABELS: [(&str, &str); 13] = [
    ("tourist_attraction", "관광지"),
    ("restaurant", "레스토랑"),
    ("hotel", "호텔"),
    ("museum", "박물관"),
    ("park", "공원"),
    ("shopping_mall", "쇼핑몰"),
    ("cafe", "카페"),
    ("bar", "바"),
    ("movie_theater", "영화관"),
    ("amusement_park", "놀이공원"),
    ("point_of_interest", "관심지점"),
    ("establishment", "시설"),
    ("shopping", "쇼핑"),
];

/// Place types offered before the server's list has been loaded.
pub fn default_place_type_options() -> Vec<PlaceTypeOption> {
    TYPE_LABELS[..10]
        .iter()
        .map(|(value, label)| PlaceTypeOption::new(*value, *label))
        .collect()
}

pub fn type_label(code: &str) -> &str {
    TYPE_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Out-of-range and NaN ratings are clamped into `0..=5` so the total stays at five units.
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, f64::from(STAR_UNITS))
        };
        let whole = rating.floor();
        let full = whole as u8;
        let half = full < STAR_UNITS && rating - whole >= 0.5;
        let empty = STAR_UNITS - full - u8::from(half);
        Self { full, half, empty }
    }

    pub fn units(&self) -> u8 {
        self.full + u8::from(self.half) + self.empty
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for _ in 0..self.full {
            out.push_str(r#"<i class="fas fa-star"></i>"#);
        }
        if self.half {
            out.push_str(r#"<i class="fas fa-star-half-alt"></i>"#);
        }
        for _ in 0..self.empty {
            out.push_str(r#"<i class="far fa-star"></i>"#);
        }
        out
    }
}

pub fn format_distance(km: f64) -> String {
    format!("{}km", to_fixed_tenths(km))
}

/// One decimal place with exact ties rounded away from zero, as `toFixed(1)` does.
/// A double sits exactly halfway between two tenths only when it is an odd number of quarters.
fn to_fixed_tenths(value: f64) -> String {
    let quarters = value.abs() * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 == 1.0;
    if !is_tie || quarters >= 1e15 {
        return format!("{value:.1}");
    }
    let tenths = (value.abs() * 10.0).ceil() as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}.{}", tenths / 10, tenths % 10)
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_type_badges(types: &[String]) -> String {
    types
        .iter()
        .take(MAX_TYPE_BADGES)
        .map(|code| {
            format!(
                r#"<span class="place-type-badge">{}</span>"#,
                escape_html(type_label(code))
            )
        })
        .collect()
}

pub fn render_place_card(index: usize, place: &Place) -> String {
    let stars = StarRating::from_rating(place.rating);
    format!(
        concat!(
            r#"<div class="place-item fade-in" style="animation-delay: {delay:.1}s">"#,
            r#"<div class="place-name">{name}</div>"#,
            r#"<div class="place-address"><i class="fas fa-map-marker-alt"></i> {address}</div>"#,
            r#"<div class="place-rating"><i class="fas fa-star"></i> {stars} ({rating})</div>"#,
            r#"<div class="place-distance"><i class="fas fa-route"></i> {distance}</div>"#,
            r#"<div class="place-types">{badges}</div>"#,
            "</div>"
        ),
        delay = index as f64 * 0.1,
        name = escape_html(&place.name),
        address = escape_html(&place.address),
        stars = stars.to_markup(),
        rating = place.rating,
        distance = format_distance(place.distance),
        badges = render_type_badges(&place.types),
    )
}

pub fn render_places(places: &[Place]) -> String {
    if places.is_empty() {
        return NO_RESULTS_HTML.to_string();
    }
    places
        .iter()
        .enumerate()
        .map(|(index, place)| render_place_card(index, place))
        .collect()
}

pub fn render_map_placeholder() -> String {
    concat!(
        r#"<div class="map-placeholder">"#,
        r#"<i class="fas fa-map"></i>"#,
        "<p>위치를 설정하고 여행지를 검색해보세요!</p>",
        "</div>"
    )
    .to_string()
}

pub fn is_rendered_map(html: &str) -> bool {
    html.contains(RENDERED_MAP_MARKER)
}

pub fn render_notification(notification: &Notification) -> String {
    format!(
        concat!(
            r#"<div class="alert alert-{severity} alert-dismissible fade show" data-id="{id}">"#,
            "{message}",
            r#"<button type="button" class="btn-close" data-bs-dismiss="alert"></button>"#,
            "</div>"
        ),
        severity = notification.severity.as_str(),
        id = notification.id,
        message = escape_html(&notification.message),
    )
}

pub fn location_set_message() -> &'static str {
    "현재 위치가 설정되었습니다!"
}

pub fn places_found_message(count: usize) -> String {
    format!("{count}개의 여행지를 찾았습니다!")
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
