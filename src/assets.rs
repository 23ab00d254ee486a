//! Image asset resolution and inline embedding.
//!
//! Profile photos and logos are embedded into slide markup as base64 data URIs
//! so the rendered HTML is self-contained. A missing or unreadable image never
//! fails the run; it simply renders as "no image".

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use base64::Engine as Base64Engine;
use log::{debug, warn};
use serde::{Deserialize, Deserializer};

/// Slide roles that can carry a profile photo.
pub const PROFILE_ROLES: [&str; 2] = ["cover", "cta"];

const AUTO_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Locate an image file.
///
/// Tried in order: an existing absolute path, `base_dir/name`, then `name`
/// relative to the working directory.
pub fn resolve(name_or_path: &str, base_dir: Option<&Path>) -> Option<PathBuf> {
    if name_or_path.is_empty() {
        return None;
    }
    let p = Path::new(name_or_path);
    if p.is_absolute() && p.exists() {
        return Some(p.to_path_buf());
    }
    if let Some(dir) = base_dir {
        let candidate = dir.join(name_or_path);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    if p.exists() {
        return Some(p.to_path_buf());
    }
    None
}

/// MIME type derived from the file extension; unknown extensions map to PNG.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

/// Read a file into a `data:` URI. Returns an empty string when the file
/// cannot be read.
pub fn embed(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => {
            let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
            format!("data:{};base64,{}", mime_for(path), encoded)
        }
        Err(e) => {
            warn!("Could not read image {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Per-run cache of embedded images keyed by resolved path.
#[derive(Debug, Default)]
pub struct AssetCache {
    entries: HashMap<PathBuf, String>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed `path`, reading it from disk at most once.
    pub fn embed(&mut self, path: &Path) -> String {
        let key = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.entries
            .entry(key)
            .or_insert_with(|| embed(path))
            .clone()
    }

    /// Resolve and embed. `None` when the image is missing or empty.
    pub fn load(&mut self, name_or_path: &str, base_dir: Option<&Path>) -> Option<String> {
        let Some(path) = resolve(name_or_path, base_dir) else {
            warn!("Image not found, rendering without it: {}", name_or_path);
            return None;
        };
        let uri = self.embed(&path);
        if uri.is_empty() {
            return None;
        }
        debug!("Embedded {} ({} bytes of base64)", path.display(), uri.len());
        Some(uri)
    }
}

/// How the profile photo(s) for a run are specified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfileSpec {
    #[default]
    None,
    /// One image used for every profile role
    Single(String),
    /// Role name (`cover`, `cta`) to image
    PerRole(BTreeMap<String, String>),
    /// Scan the assets directory for well-known file names
    Auto,
}

impl ProfileSpec {
    /// Parse the command-line form: `auto`, `role=path[,role=path]`, or a path.
    pub fn parse_cli(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return ProfileSpec::None;
        }
        if s.eq_ignore_ascii_case("auto") {
            return ProfileSpec::Auto;
        }
        let is_role_pair = |part: &str| {
            part.split_once('=')
                .is_some_and(|(role, _)| PROFILE_ROLES.contains(&role.trim()))
        };
        if s.split(',').all(is_role_pair) {
            let map = s
                .split(',')
                .filter_map(|part| part.split_once('='))
                .map(|(role, path)| (role.trim().to_string(), path.trim().to_string()))
                .collect();
            return ProfileSpec::PerRole(map);
        }
        ProfileSpec::Single(s.to_string())
    }

    /// Image name or path assigned to `role`, before resolution.
    fn candidates(&self, role: &str, assets_dir: Option<&Path>) -> Option<String> {
        match self {
            ProfileSpec::None => None,
            ProfileSpec::Single(path) => Some(path.clone()),
            ProfileSpec::PerRole(map) => map.get(role).cloned(),
            ProfileSpec::Auto => {
                let Some(dir) = assets_dir else {
                    warn!("profile_image is \"auto\" but no assets directory is set");
                    return None;
                };
                auto_profile_name(dir, role)
            }
        }
    }
}

fn auto_profile_name(dir: &Path, role: &str) -> Option<String> {
    let stems = [format!("profile_{role}"), "profile".to_string()];
    stems
        .iter()
        .flat_map(|stem| AUTO_EXTENSIONS.iter().map(move |ext| format!("{stem}.{ext}")))
        .find(|name| dir.join(name).is_file())
}

impl<'de> Deserialize<'de> for ProfileSpec {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Map(BTreeMap<String, String>),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => ProfileSpec::None,
            Some(Raw::Text(s)) if s.is_empty() => ProfileSpec::None,
            Some(Raw::Text(s)) if s.eq_ignore_ascii_case("auto") => ProfileSpec::Auto,
            Some(Raw::Text(s)) => ProfileSpec::Single(s),
            Some(Raw::Map(m)) => ProfileSpec::PerRole(m),
        })
    }
}

/// Images embedded once per run and shared by every slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAssets {
    pub logo: Option<String>,
    /// Role name to data URI
    pub profiles: BTreeMap<String, String>,
}

impl ResolvedAssets {
    pub fn profile_for(&self, role: &str) -> Option<&str> {
        self.profiles.get(role).map(String::as_str)
    }
}

/// Resolve and embed the run-level logo and profile images.
pub fn resolve_shared(
    logo: Option<&str>,
    profile: &ProfileSpec,
    assets_dir: Option<&Path>,
    cache: &mut AssetCache,
) -> ResolvedAssets {
    let logo = logo
        .filter(|l| !l.is_empty())
        .and_then(|l| cache.load(l, assets_dir));

    let mut profiles = BTreeMap::new();
    for role in PROFILE_ROLES {
        if let Some(name) = profile.candidates(role, assets_dir) {
            if let Some(uri) = cache.load(&name, assets_dir) {
                profiles.insert(role.to_string(), uri);
            }
        }
    }

    ResolvedAssets { logo, profiles }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types_by_extension() {
        assert_eq!(mime_for(Path::new("a.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("a.gif")), "image/gif");
        assert_eq!(mime_for(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_for(Path::new("a.svg")), "image/svg+xml");
        assert_eq!(mime_for(Path::new("a.bmp")), "image/png");
        assert_eq!(mime_for(Path::new("noext")), "image/png");
    }

    #[test]
    fn resolve_prefers_base_dir_then_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("logo.png"), b"png").unwrap();

        let found = resolve("logo.png", Some(dir.path())).unwrap();
        assert_eq!(found, dir.path().join("logo.png"));

        assert!(resolve("logo.png", None).is_none());
        assert!(resolve("", Some(dir.path())).is_none());

        let abs = dir.path().join("logo.png");
        assert_eq!(resolve(abs.to_str().unwrap(), None).unwrap(), abs);
    }

    #[test]
    fn embed_missing_file_is_empty() {
        assert_eq!(embed(Path::new("/definitely/not/here.png")), "");
    }

    #[test]
    fn embed_encodes_bytes_with_mime_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.jpg");
        std::fs::write(&path, b"hello").unwrap();
        assert_eq!(embed(&path), "data:image/jpeg;base64,aGVsbG8=");
    }

    #[test]
    fn cache_embeds_once_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.png");
        std::fs::write(&path, b"abc").unwrap();

        let mut cache = AssetCache::new();
        let first = cache.embed(&path);
        let second = cache.embed(&path);
        assert_eq!(first, second);
        assert_eq!(cache.entries.len(), 1);
    }

    #[test]
    fn parse_cli_forms() {
        assert_eq!(ProfileSpec::parse_cli(""), ProfileSpec::None);
        assert_eq!(ProfileSpec::parse_cli("AUTO"), ProfileSpec::Auto);
        assert_eq!(
            ProfileSpec::parse_cli("me.png"),
            ProfileSpec::Single("me.png".into())
        );
        let ProfileSpec::PerRole(map) = ProfileSpec::parse_cli("cover=a.png, cta=b.png") else {
            panic!("expected per-role spec");
        };
        assert_eq!(map["cover"], "a.png");
        assert_eq!(map["cta"], "b.png");
        // not a known role, so this is treated as a plain path
        assert_eq!(
            ProfileSpec::parse_cli("x=y.png"),
            ProfileSpec::Single("x=y.png".into())
        );
    }

    #[test]
    fn deserialize_forms() {
        let spec: ProfileSpec = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(spec, ProfileSpec::Auto);
        let spec: ProfileSpec = serde_json::from_str("\"me.png\"").unwrap();
        assert_eq!(spec, ProfileSpec::Single("me.png".into()));
        let spec: ProfileSpec = serde_json::from_str("{\"cta\":\"c.png\"}").unwrap();
        assert!(matches!(spec, ProfileSpec::PerRole(ref m) if m["cta"] == "c.png"));
        let spec: ProfileSpec = serde_json::from_str("null").unwrap();
        assert_eq!(spec, ProfileSpec::None);
    }

    #[test]
    fn single_profile_applies_to_both_roles() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("me.png"), b"me").unwrap();
        let mut cache = AssetCache::new();
        let assets = resolve_shared(
            None,
            &ProfileSpec::Single("me.png".into()),
            Some(dir.path()),
            &mut cache,
        );
        assert_eq!(assets.profile_for("cover"), assets.profile_for("cta"));
        assert!(assets.profile_for("cover").is_some());
        assert!(assets.logo.is_none());
        assert_eq!(cache.entries.len(), 1);
    }

    #[test]
    fn auto_profile_scans_role_names_then_generic() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("profile_cta.jpg"), b"cta").unwrap();
        std::fs::write(dir.path().join("profile.png"), b"generic").unwrap();
        let mut cache = AssetCache::new();
        let assets = resolve_shared(None, &ProfileSpec::Auto, Some(dir.path()), &mut cache);
        assert!(assets.profile_for("cta").unwrap().starts_with("data:image/jpeg"));
        assert!(assets.profile_for("cover").unwrap().starts_with("data:image/png"));
    }

    #[test]
    fn missing_logo_degrades_to_none() {
        let mut cache = AssetCache::new();
        let assets = resolve_shared(Some("nope.png"), &ProfileSpec::None, None, &mut cache);
        assert_eq!(assets, ResolvedAssets::default());
    }
}
