//! Transient, dismissable banners.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const NOTIFICATION_TTL_MS: i64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::milliseconds(NOTIFICATION_TTL_MS)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> Uuid {
        self.push_at(message, severity, Utc::now())
    }

    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: DateTime<Utc>,
    ) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: now,
        };
        let id = notification.id;
        self.items.push(notification);
        id
    }

    /// Removes a banner before it expires. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|notification| notification.id != id);
        self.items.len() != before
    }

    pub fn prune_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items
            .retain(|notification| !notification.is_expired_at(now));
        before - self.items.len()
    }

    pub fn active_at(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Notification> {
        self.items
            .iter()
            .filter(move |notification| !notification.is_expired_at(now))
    }

    /// Everything pushed and not yet dismissed or pruned, oldest first.
    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_ms(base: DateTime<Utc>, offset_ms: i64) -> DateTime<Utc> {
        base + Duration::milliseconds(offset_ms)
    }

    #[test]
    fn notification_lives_for_five_seconds() {
        let mut center = NotificationCenter::new();
        let created = Utc::now();
        center.push_at("saved", Severity::Success, created);

        assert_eq!(center.active_at(at_ms(created, 4_900)).count(), 1);
        assert_eq!(center.active_at(at_ms(created, 5_100)).count(), 0);
    }

    #[test]
    fn banners_coexist_and_dismiss_independently() {
        let mut center = NotificationCenter::new();
        let now = Utc::now();
        let first = center.push_at("first", Severity::Warning, now);
        let second = center.push_at("second", Severity::Danger, now);

        assert!(center.dismiss(first));
        assert!(!center.dismiss(first));

        let remaining = center.active_at(now).collect::<Vec<_>>();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
    }

    #[test]
    fn prune_drops_only_expired_banners() {
        let mut center = NotificationCenter::new();
        let start = Utc::now();
        center.push_at("old", Severity::Success, start);
        center.push_at("new", Severity::Warning, at_ms(start, 3_000));

        assert_eq!(center.prune_expired(at_ms(start, 5_100)), 1);
        assert_eq!(center.len(), 1);
        assert_eq!(center.all()[0].message, "new");
    }
}
