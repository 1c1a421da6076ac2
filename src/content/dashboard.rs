//! Data behind the dashboard's parallel slots.
//!
//! [`DashboardSource`] stands in for three independent backends. Each fetch
//! can be slowed by the configured [`Latency`] or made to fail through
//! [`DashboardConfig::failing_slots`](crate::config::DashboardConfig), so the
//! overview page can show slots loading and failing independently.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{Config, Latency};

/// One of the dashboard's named slots.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Analytics,
    Team,
    Notifications,
}

impl Slot {
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Analytics => "analytics",
            Slot::Team => "team",
            Slot::Notifications => "notifications",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Slot::Analytics => "Analytics",
            Slot::Team => "Team",
            Slot::Notifications => "Notifications",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SlotError {
    #[error("failed to load {0}")]
    Unavailable(Slot),
}

#[derive(Debug, PartialEq)]
pub struct Analytics {
    pub page_views: u64,
    pub unique_visitors: u64,
    pub bounce_rate: f32,
    pub avg_session: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Presence {
    Online,
    Away,
    Offline,
}

impl Presence {
    pub fn as_str(self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Away => "away",
            Presence::Offline => "offline",
        }
    }
}

#[derive(Debug)]
pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub presence: Presence,
    pub last_active: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
        }
    }
}

#[derive(Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub icon: &'static str,
}

pub const ANALYTICS: Analytics = Analytics {
    page_views: 12_543,
    unique_visitors: 8_921,
    bounce_rate: 23.4,
    avg_session: "3m 42s",
};

pub const TEAM: &[Member] = &[
    Member { name: "Alice Johnson", role: "Frontend Developer", avatar: "👩‍💻", presence: Presence::Online, last_active: "Active now" },
    Member { name: "Bob Smith", role: "Backend Developer", avatar: "👨‍💻", presence: Presence::Away, last_active: "5 minutes ago" },
    Member { name: "Carol Davis", role: "UI/UX Designer", avatar: "👩‍🎨", presence: Presence::Online, last_active: "Active now" },
    Member { name: "David Wilson", role: "DevOps Engineer", avatar: "👨‍🔧", presence: Presence::Offline, last_active: "2 hours ago" },
];

pub const NOTIFICATIONS: &[Notice] = &[
    Notice {
        kind: NoticeKind::Success,
        title: "Deployment Successful",
        message: "Your Next.js app has been deployed to production",
        time: "2 minutes ago",
        icon: "✅",
    },
    Notice {
        kind: NoticeKind::Info,
        title: "New User Registered",
        message: "John Doe just signed up for your service",
        time: "15 minutes ago",
        icon: "👤",
    },
    Notice {
        kind: NoticeKind::Warning,
        title: "High Memory Usage",
        message: "Server memory usage is at 85%",
        time: "1 hour ago",
        icon: "⚠️",
    },
    Notice {
        kind: NoticeKind::Info,
        title: "Database Backup Complete",
        message: "Daily backup completed successfully",
        time: "3 hours ago",
        icon: "💾",
    },
];

/// Mock backend for the dashboard slots.
#[derive(Clone, Debug, Default)]
pub struct DashboardSource {
    latency: Latency,
    failing: Vec<Slot>,
}

impl DashboardSource {
    pub fn new(latency: Latency, failing: Vec<Slot>) -> Self {
        Self { latency, failing }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.latency.clone(), config.dashboard.failing_slots.clone())
    }

    pub async fn analytics(&self) -> Result<&'static Analytics, SlotError> {
        self.fetch(Slot::Analytics).await?;
        Ok(&ANALYTICS)
    }

    pub async fn team(&self) -> Result<&'static [Member], SlotError> {
        self.fetch(Slot::Team).await?;
        Ok(TEAM)
    }

    pub async fn notifications(&self) -> Result<&'static [Notice], SlotError> {
        self.fetch(Slot::Notifications).await?;
        Ok(NOTIFICATIONS)
    }

    async fn fetch(&self, slot: Slot) -> Result<(), SlotError> {
        if let Some(delay) = self.latency.for_slot(slot) {
            debug!(%slot, delay_ms = delay.as_millis() as u64, "simulating slow fetch");
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(&slot) {
            warn!(%slot, "injected slot failure");
            return Err(SlotError::Unavailable(slot));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;

    #[tokio::test]
    async fn default_source_answers_immediately() {
        let source = DashboardSource::default();
        assert_eq!(source.analytics().await.unwrap().page_views, 12_543);
        assert_eq!(source.team().await.unwrap().len(), 4);
        assert_eq!(source.notifications().await.unwrap()[0].title, "Deployment Successful");
    }

    #[tokio::test]
    async fn injected_failure_hits_only_that_slot() {
        let source = DashboardSource::new(Latency::default(), vec![Slot::Notifications]);
        assert_eq!(source.notifications().await.unwrap_err(), SlotError::Unavailable(Slot::Notifications));
        assert!(source.team().await.is_ok());
        assert_eq!(SlotError::Unavailable(Slot::Team).to_string(), "failed to load team");
    }

    #[tokio::test(start_paused = true)]
    async fn slots_wait_for_the_slowest_not_the_sum() {
        let latency = Latency { enabled: true, ..Latency::default() };
        let source = DashboardSource::new(latency, Vec::new());

        let started = Instant::now();
        let (a, t, n) = tokio::join!(source.analytics(), source.team(), source.notifications());
        assert!(a.is_ok() && t.is_ok() && n.is_ok());

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1500));
        assert!(elapsed < Duration::from_millis(1000 + 800 + 1500));
    }
}
