//! Reading a render job from its JSON document.
//!
//! Two shapes are accepted: a bare array of slide objects, or an object with a
//! `slides` array plus optional run-level defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::assets::ProfileSpec;
use crate::slide::{SharedDefaults, Slide};
use crate::theme::DEFAULT_THEME;
use crate::{Error, Result};

/// Output file prefix used when none is given.
pub const DEFAULT_PREFIX: &str = "card";

/// Everything one run needs besides the output directory and backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    /// Slides in page order
    pub slides: Vec<Slide>,
    pub theme: String,
    pub prefix: String,
    pub defaults: SharedDefaults,
    pub assets_dir: Option<PathBuf>,
    pub profile: ProfileSpec,
    pub logo: Option<String>,
}

impl Default for RenderJob {
    fn default() -> Self {
        Self {
            slides: Vec::new(),
            theme: DEFAULT_THEME.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            defaults: SharedDefaults::default(),
            assets_dir: None,
            profile: ProfileSpec::None,
            logo: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeckFile {
    slides: Vec<Slide>,
    theme: Option<String>,
    prefix: Option<String>,
    footer_name: Option<String>,
    footer_handle: Option<String>,
    assets_dir: Option<String>,
    profile_image: ProfileSpec,
    logo_image: Option<String>,
    profile_name: Option<String>,
    profile_title: Option<String>,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

impl From<DeckFile> for RenderJob {
    fn from(deck: DeckFile) -> Self {
        let base = RenderJob::default();
        RenderJob {
            slides: deck.slides,
            theme: non_empty(deck.theme).unwrap_or(base.theme),
            prefix: non_empty(deck.prefix).unwrap_or(base.prefix),
            defaults: SharedDefaults {
                footer_name: non_empty(deck.footer_name),
                footer_handle: non_empty(deck.footer_handle),
                profile_name: non_empty(deck.profile_name),
                profile_title: non_empty(deck.profile_title),
            },
            assets_dir: non_empty(deck.assets_dir).map(PathBuf::from),
            profile: deck.profile_image,
            logo: non_empty(deck.logo_image),
        }
    }
}

/// Values supplied outside the document (command line). Every `Some` wins
/// over the document's top-level value of the same name.
#[derive(Debug, Clone, Default)]
pub struct JobOverrides {
    pub theme: Option<String>,
    pub prefix: Option<String>,
    pub footer_name: Option<String>,
    pub footer_handle: Option<String>,
    pub assets_dir: Option<PathBuf>,
    pub profile: Option<ProfileSpec>,
    pub logo: Option<String>,
    pub profile_name: Option<String>,
    pub profile_title: Option<String>,
}

impl RenderJob {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            ..Default::default()
        }
    }

    /// Parse either accepted JSON shape.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        match value {
            serde_json::Value::Array(_) => {
                let slides: Vec<Slide> = serde_json::from_value(value)?;
                Ok(Self::new(slides))
            }
            serde_json::Value::Object(_) => {
                let deck: DeckFile = serde_json::from_value(value)?;
                Ok(deck.into())
            }
            _ => Err(Error::InputError(
                "expected an array of slides or an object with a \"slides\" array".into(),
            )),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Apply out-of-document values on top of the document's defaults.
    pub fn apply_overrides(&mut self, o: JobOverrides) {
        if let Some(v) = o.theme {
            self.theme = v;
        }
        if let Some(v) = o.prefix {
            self.prefix = v;
        }
        if let Some(v) = o.footer_name {
            self.defaults.footer_name = Some(v);
        }
        if let Some(v) = o.footer_handle {
            self.defaults.footer_handle = Some(v);
        }
        if let Some(v) = o.profile_name {
            self.defaults.profile_name = Some(v);
        }
        if let Some(v) = o.profile_title {
            self.defaults.profile_title = Some(v);
        }
        if let Some(v) = o.assets_dir {
            self.assets_dir = Some(v);
        }
        if let Some(v) = o.profile {
            self.profile = v;
        }
        if let Some(v) = o.logo {
            self.logo = Some(v);
        }
    }
}
