//! Site configuration.
//!
//! Loaded from an optional TOML file. Every key has a default, so an empty
//! file (or no file at all) gives a working server with artificial latency
//! switched off.
//!
//! ```toml
//! addr = "127.0.0.1:3000"
//!
//! [latency]
//! enabled = true
//! analytics_ms = 1000
//! team_ms = 800
//! notifications_ms = 1500
//!
//! [dashboard]
//! failing_slots = ["notifications"]
//! ```

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::content::dashboard::Slot;
use crate::error::Error;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub addr: SocketAddr,
    pub latency: Latency,
    pub dashboard: DashboardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            latency: Latency::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::Config { path: path.to_owned(), source })?;
        Self::from_toml(&text)
    }
}

/// Artificial delays for the dashboard's parallel slots.
///
/// Stands in for real data fetching so the slots visibly load on their own
/// schedules. Off by default.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Latency {
    pub enabled: bool,
    pub analytics_ms: u64,
    pub team_ms: u64,
    pub notifications_ms: u64,
}

impl Default for Latency {
    fn default() -> Self {
        Self { enabled: false, analytics_ms: 1000, team_ms: 800, notifications_ms: 1500 }
    }
}

impl Latency {
    /// The delay for `slot`, or `None` when latency is disabled.
    pub fn for_slot(&self, slot: Slot) -> Option<Duration> {
        if !self.enabled {
            return None;
        }
        let ms = match slot {
            Slot::Analytics => self.analytics_ms,
            Slot::Team => self.team_ms,
            Slot::Notifications => self.notifications_ms,
        };
        Some(Duration::from_millis(ms))
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Slots whose fetch fails, to show each slot's error boundary.
    pub failing_slots: Vec<Slot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
        assert_eq!(Config::default().latency.for_slot(Slot::Team), None);
    }

    #[test]
    fn reads_every_section() {
        let config = Config::from_toml(
            r#"
            addr = "0.0.0.0:8080"
            [latency]
            enabled = true
            team_ms = 5
            [dashboard]
            failing_slots = ["notifications"]
            "#,
        )
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.latency.for_slot(Slot::Team), Some(Duration::from_millis(5)));
        assert_eq!(config.latency.for_slot(Slot::Analytics), Some(Duration::from_millis(1000)));
        assert_eq!(config.dashboard.failing_slots, vec![Slot::Notifications]);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(Config::from_toml("port = 3000"), Err(Error::Toml(_))));
        assert!(Config::from_toml("[latency]\nslow = true").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
