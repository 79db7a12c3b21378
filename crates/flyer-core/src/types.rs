//! Core domain types for Flyer Studio
//!
//! The three option sets are closed: every `match` on them is exhaustive so a
//! new variant cannot be silently mishandled by pickers, prompts or layout.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a CLI/config string does not name a known option
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Step through a closed option set, wrapping at both ends
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    all[next]
}

/// Match a user-supplied string against either the key or the display label
fn parse_option<T: Copy>(
    kind: &'static str,
    all: &[T],
    key: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
    value: &str,
) -> Result<T, ParseOptionError> {
    let needle = value.trim().to_lowercase();
    all.iter()
        .copied()
        .find(|opt| key(opt) == needle || label(opt).to_lowercase() == needle)
        .ok_or_else(|| ParseOptionError {
            kind,
            value: value.to_string(),
            expected: all.iter().map(key).collect::<Vec<_>>().join(", "),
        })
}

// ─────────────────────────────────────────────────────────────────────────────
// Target Audience
// ─────────────────────────────────────────────────────────────────────────────

/// Who the flyer addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetAudience {
    #[default]
    Kids,
    Parents,
}

impl TargetAudience {
    pub const ALL: [TargetAudience; 2] = [TargetAudience::Kids, TargetAudience::Parents];

    /// Localized display label, also used verbatim in prompts
    pub fn label(&self) -> &'static str {
        match self {
            TargetAudience::Kids => "Niños y Adolescentes",
            TargetAudience::Parents => "Padres y Educadores",
        }
    }

    /// Stable identifier used by the CLI and config files
    pub fn key(&self) -> &'static str {
        match self {
            TargetAudience::Kids => "kids",
            TargetAudience::Parents => "parents",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, true)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, false)
    }
}

impl fmt::Display for TargetAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TargetAudience {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("target audience", &Self::ALL, Self::key, Self::label, s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Category
// ─────────────────────────────────────────────────────────────────────────────

/// Content angle/style of the flyer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Tip,
    Challenge,
    Curiosity,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Tip, Category::Challenge, Category::Curiosity];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Tip => "Consejo o Tip Financiero",
            Category::Challenge => "Reto",
            Category::Curiosity => "Curiosidad o Cultura",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Tip => "tip",
            Category::Challenge => "challenge",
            Category::Curiosity => "curiosity",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, true)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, false)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("category", &Self::ALL, Self::key, Self::label, s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Social Format
// ─────────────────────────────────────────────────────────────────────────────

/// Width:height ratio of a rendered flyer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    pub width: f32,
    pub height: f32,
}

impl AspectRatio {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Height for a given width, rounded to whole units
    pub fn height_for(&self, width: u16) -> u16 {
        ((width as f32) * self.height / self.width).round() as u16
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Output platform, which fixes the aspect ratio of the preview card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialFormat {
    #[default]
    Instagram,
    Facebook,
    #[serde(rename = "tiktok")]
    TikTok,
}

impl SocialFormat {
    pub const ALL: [SocialFormat; 3] = [
        SocialFormat::Instagram,
        SocialFormat::Facebook,
        SocialFormat::TikTok,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SocialFormat::Instagram => "Instagram (1:1)",
            SocialFormat::Facebook => "Facebook (1.91:1)",
            SocialFormat::TikTok => "TikTok (9:16)",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SocialFormat::Instagram => "instagram",
            SocialFormat::Facebook => "facebook",
            SocialFormat::TikTok => "tiktok",
        }
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        match self {
            SocialFormat::Instagram => AspectRatio::new(1.0, 1.0),
            SocialFormat::Facebook => AspectRatio::new(1.91, 1.0),
            SocialFormat::TikTok => AspectRatio::new(9.0, 16.0),
        }
    }

    /// Maximum render width of the card, in CSS pixels
    pub fn max_width_px(&self) -> u16 {
        match self {
            SocialFormat::Instagram => 500,
            SocialFormat::Facebook => 600,
            SocialFormat::TikTok => 350,
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, true)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, false)
    }
}

impl fmt::Display for SocialFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SocialFormat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("format", &Self::ALL, Self::key, Self::label, s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Generated Content
// ─────────────────────────────────────────────────────────────────────────────

/// Structured flyer text as returned by the content generator
///
/// Field names on the wire are camelCase (`callToAction`). `points` is
/// expected to hold 3 entries and `hashtags` 5, but neither is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyerContent {
    pub title: String,
    pub description: String,
    pub points: Vec<String>,
    pub call_to_action: String,
    pub hashtags: Vec<String>,
    /// Long-form text that accompanies the post
    pub caption: String,
}

impl FlyerContent {
    /// Hashtags in the form they are pasted into a post
    pub fn hashtags_line(&self) -> String {
        self.hashtags.join(" ")
    }
}

/// Current selections plus the result of the last successful generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlyerState {
    pub target: TargetAudience,
    pub category: Category,
    pub format: SocialFormat,
    pub user_prompt: String,
    pub content: Option<FlyerContent>,
    /// `data:image/png;base64,...` URI, absent when no image was produced
    pub image_url: Option<String>,
}

impl FlyerState {
    pub fn has_flyer(&self) -> bool {
        self.content.is_some()
    }
}
