//! Record types persisted by the history store

use crate::mode::ContentMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded prompt/output pair
///
/// Created for every successful generation. The `id` is a monotonic
/// counter assigned by the store, independent of the timestamp, so that
/// two interactions created within the same clock tick stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Monotonically increasing identifier, stable across list reordering
    pub id: u64,
    /// The raw user-entered text, before mode composition
    pub prompt: String,
    /// The text returned by the generation provider, verbatim
    pub output: String,
    /// Content mode active at submission time
    pub mode: ContentMode,
    /// Creation timestamp, used for display and day-grouping
    pub created_at: DateTime<Utc>,
}

/// Persisted display theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl Theme {
    /// Parse a theme from its persisted string form
    ///
    /// Unknown values map to `None`; the caller falls back to the default.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}
