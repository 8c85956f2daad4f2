//! Content mode types and utilities
//!
//! This module defines the content types a user can generate:
//! blog posts, Instagram captions, YouTube scripts, and summaries.
//! The active mode is prefixed to the user prompt before generation.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content mode for generation requests
///
/// Determines what kind of content the provider is asked to produce.
/// The mode label is prepended to the user prompt as `"{mode}: {input}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentMode {
    /// Long-form blog article
    #[default]
    Blog,

    /// Short social media caption
    Instagram,

    /// Video script outline
    YouTube,

    /// Condensed summary of a topic
    Summary,
}

/// All content modes, in display order
pub const ALL_MODES: [ContentMode; 4] = [
    ContentMode::Blog,
    ContentMode::Instagram,
    ContentMode::YouTube,
    ContentMode::Summary,
];

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blog => write!(f, "Blog"),
            Self::Instagram => write!(f, "Instagram"),
            Self::YouTube => write!(f, "YouTube"),
            Self::Summary => write!(f, "Summary"),
        }
    }
}

impl ContentMode {
    /// Parse a content mode from a string
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the mode ("blog", "instagram", "youtube", "summary")
    ///
    /// # Returns
    ///
    /// Returns the parsed ContentMode or an error if the string is invalid
    ///
    /// # Examples
    ///
    /// ```
    /// use draftgen::mode::ContentMode;
    ///
    /// let mode = ContentMode::parse_str("blog").unwrap();
    /// assert_eq!(mode, ContentMode::Blog);
    /// ```
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "blog" => Ok(Self::Blog),
            "instagram" | "insta" => Ok(Self::Instagram),
            "youtube" | "yt" => Ok(Self::YouTube),
            "summary" => Ok(Self::Summary),
            other => Err(format!("Unknown content mode: {}", other)),
        }
    }

    /// Get a user-friendly description of this mode
    pub fn description(&self) -> &'static str {
        match self {
            Self::Blog => "Long-form blog article",
            Self::Instagram => "Short social media caption",
            Self::YouTube => "Video script outline",
            Self::Summary => "Condensed summary",
        }
    }

    /// Get a colored tag representation of this mode
    ///
    /// # Returns
    ///
    /// A colored string suitable for display in the session prompt
    pub fn colored_tag(&self) -> String {
        match self {
            Self::Blog => format!("[{}]", "BLOG".blue()),
            Self::Instagram => format!("[{}]", "INSTAGRAM".purple()),
            Self::YouTube => format!("[{}]", "YOUTUBE".red()),
            Self::Summary => format!("[{}]", "SUMMARY".green()),
        }
    }
}
