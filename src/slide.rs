//! Slide records and the merge step that prepares them for templating.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// The six slide layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    Cover,
    Problem,
    Point,
    Comparison,
    Summary,
    Cta,
}

impl SlideKind {
    pub const ALL: [SlideKind; 6] = [
        SlideKind::Cover,
        SlideKind::Problem,
        SlideKind::Point,
        SlideKind::Comparison,
        SlideKind::Summary,
        SlideKind::Cta,
    ];

    /// Exact name lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Cover => "cover",
            SlideKind::Problem => "problem",
            SlideKind::Point => "point",
            SlideKind::Comparison => "comparison",
            SlideKind::Summary => "summary",
            SlideKind::Cta => "cta",
        }
    }

    /// Slide roles that show a profile photo.
    pub fn takes_profile(&self) -> bool {
        matches!(self, SlideKind::Cover | SlideKind::Cta)
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_type() -> String {
    SlideKind::Point.as_str().to_string()
}

/// Accept either a JSON string or a number for free-text fields such as `number`.
fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match v {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// One slide as read from the input document.
///
/// Which fields matter depends on `slide_type`; the rest are ignored by the
/// template.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Slide {
    /// Raw type name as written in the input. Also used as the filename suffix.
    #[serde(rename = "type", default = "default_type")]
    pub slide_type: String,

    // cover
    pub badge: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub highlight: Option<String>,

    // problem
    pub emoji: Option<String>,
    pub main_text: Option<String>,
    pub sub_text: Option<String>,

    // point
    #[serde(deserialize_with = "de_opt_text")]
    pub number: Option<String>,
    pub heading: Option<String>,
    pub body: Option<String>,

    // comparison
    pub left_label: Option<String>,
    pub right_label: Option<String>,
    pub left_items: Vec<String>,
    pub right_items: Vec<String>,

    // summary
    pub items: Vec<String>,

    // cta
    pub message: Option<String>,
    pub sub_message: Option<String>,
    #[serde(deserialize_with = "de_opt_text")]
    pub contact: Option<String>,
    pub name: Option<String>,
    pub handle: Option<String>,

    // shared, may be filled from run-level defaults
    pub footer_name: Option<String>,
    pub footer_handle: Option<String>,
    pub profile_name: Option<String>,
    pub profile_title: Option<String>,

    /// Per-slide asset overrides (name or path)
    pub logo_image: Option<String>,
    pub profile_image: Option<String>,
}

impl Slide {
    pub fn new(slide_type: impl Into<String>) -> Self {
        Self {
            slide_type: slide_type.into(),
            ..Default::default()
        }
    }

    /// The layout this slide dispatches to, or `None` for an unknown type.
    pub fn kind(&self) -> Option<SlideKind> {
        SlideKind::from_name(&self.slide_type)
    }

    /// Return a copy with shared defaults filled into absent fields.
    ///
    /// Values already present on the slide always win. Profile name and title
    /// are only injected for slide kinds that show a profile.
    pub fn with_defaults(&self, defaults: &SharedDefaults) -> Slide {
        let mut out = self.clone();
        fill(&mut out.footer_name, &defaults.footer_name);
        fill(&mut out.footer_handle, &defaults.footer_handle);
        if self.kind().is_some_and(|k| k.takes_profile()) {
            fill(&mut out.profile_name, &defaults.profile_name);
            fill(&mut out.profile_title, &defaults.profile_title);
        }
        out
    }
}

fn fill(slot: &mut Option<String>, default: &Option<String>) {
    if slot.is_none() {
        if let Some(v) = default.as_ref().filter(|v| !v.is_empty()) {
            *slot = Some(v.clone());
        }
    }
}

/// Run-level values applied to slides that do not set them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedDefaults {
    pub footer_name: Option<String>,
    pub footer_handle: Option<String>,
    pub profile_name: Option<String>,
    pub profile_title: Option<String>,
}

/// 1-based position of a slide within its deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current: usize,
    pub total: usize,
}

impl PageInfo {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// The visible `"i / n"` label.
    pub fn label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }
}

/// A slide after the merge step: defaults applied, assets resolved and the
/// page position fixed. This is what templates consume.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSlide {
    pub data: Slide,
    pub page: PageInfo,
    /// Logo data URI
    pub logo: Option<String>,
    /// Profile photo data URI
    pub profile: Option<String>,
}

impl EnrichedSlide {
    /// Build a slide with no assets, mostly useful for tests.
    pub fn bare(data: Slide, page: PageInfo) -> Self {
        Self {
            data,
            page,
            logo: None,
            profile: None,
        }
    }
}
