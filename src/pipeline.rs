//! The render pipeline: deck in, one PNG per slide out.
//!
//! [`prepare`] does everything up to the HTML (theme lookup, asset embedding,
//! default merging, template dispatch) without touching the rasterizer.
//! [`render`] then rasterizes the prepared slides one at a time. The first
//! rasterizer failure aborts the run; files already written stay on disk.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::assets::{self, AssetCache, ResolvedAssets};
use crate::raster::{self, Rasterizer};
use crate::slide::{EnrichedSlide, PageInfo, Slide};
use crate::templates::{self, CANVAS_PX};
use crate::theme::{self, ThemePalette};
use crate::{Error, RenderConfig, RenderJob, Result, Viewport};

/// Subdirectory of the output directory that receives intermediate HTML.
pub const HTML_DIR: &str = "_html";

/// One slide's document, ready for the rasterizer.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSlide {
    pub page: PageInfo,
    /// Raw type name from the input (filename suffix)
    pub slide_type: String,
    /// `{prefix}_{index:02}_{type}`, without extension
    pub file_stem: String,
    pub html: String,
}

/// Build the output file stem for the slide at 1-based `index`.
///
/// Characters that cannot safely appear in a file name are replaced with `_`.
pub fn output_stem(prefix: &str, index: usize, slide_type: &str) -> String {
    let clean: String = slide_type
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{prefix}_{index:02}_{clean}")
}

/// Resolve the run's palette, warning on unknown names.
pub fn resolve_theme(name: &str) -> &'static ThemePalette {
    match theme::get(name) {
        Some(p) => p,
        None => {
            warn!(
                "Unknown theme '{}'; falling back to '{}'",
                name,
                theme::DEFAULT_THEME
            );
            theme::lookup(theme::DEFAULT_THEME)
        }
    }
}

/// Merge run-level defaults and assets into one slide.
///
/// Per-slide `logo_image` / `profile_image` fields win over the shared assets.
fn enrich(
    slide: &Slide,
    job: &RenderJob,
    shared: &ResolvedAssets,
    cache: &mut AssetCache,
    page: PageInfo,
) -> EnrichedSlide {
    let data = slide.with_defaults(&job.defaults);
    let assets_dir = job.assets_dir.as_deref();

    let logo = match data.logo_image.as_deref().filter(|s| !s.is_empty()) {
        Some(name) => cache.load(name, assets_dir),
        None => shared.logo.clone(),
    };

    let profile = match data.kind() {
        Some(kind) if kind.takes_profile() => {
            match data.profile_image.as_deref().filter(|s| !s.is_empty()) {
                Some(name) => cache.load(name, assets_dir),
                None => shared.profile_for(kind.as_str()).map(str::to_string),
            }
        }
        _ => None,
    };

    EnrichedSlide {
        data,
        page,
        logo,
        profile,
    }
}

/// Produce the HTML for every slide of `job`, in order.
pub fn prepare(job: &RenderJob) -> Vec<PreparedSlide> {
    let palette = resolve_theme(&job.theme);

    let mut cache = AssetCache::new();
    let shared = assets::resolve_shared(
        job.logo.as_deref(),
        &job.profile,
        job.assets_dir.as_deref(),
        &mut cache,
    );
    debug!(
        "Shared assets: logo={}, profiles={:?}",
        shared.logo.is_some(),
        shared.profiles.keys().collect::<Vec<_>>()
    );

    let total = job.slides.len();
    job.slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let page = PageInfo::new(i + 1, total);
            let enriched = enrich(slide, job, &shared, &mut cache, page);
            PreparedSlide {
                page,
                slide_type: slide.slide_type.clone(),
                file_stem: output_stem(&job.prefix, page.current, &slide.slide_type),
                html: templates::render_slide(&enriched, palette),
            }
        })
        .collect()
}

/// Render every slide of `job` into `out_dir` and return the written PNG paths
/// in page order.
pub fn render(
    job: &RenderJob,
    out_dir: &Path,
    rasterizer: &mut dyn Rasterizer,
    config: &RenderConfig,
) -> Result<Vec<PathBuf>> {
    config.validate()?;
    create_dir(out_dir)?;

    let prepared = prepare(job);

    let html_dir = out_dir.join(HTML_DIR);
    if config.keep_html {
        create_dir(&html_dir)?;
    }

    let canvas = Viewport::square(CANVAS_PX);
    let mut outputs = Vec::with_capacity(prepared.len());
    for slide in &prepared {
        if config.keep_html {
            let html_path = html_dir.join(format!("{}.html", slide.file_stem));
            std::fs::write(&html_path, &slide.html)?;
            debug!("HTML: {}", html_path.display());
        }

        let png = rasterizer.rasterize(&slide.html, canvas)?;
        let out_path = out_dir.join(format!("{}.png", slide.file_stem));
        raster::write_normalized(&png, config.size, &out_path)?;

        info!(
            "[{}/{}] {}.png ({})",
            slide.page.current,
            slide.page.total,
            slide.file_stem,
            rasterizer.name()
        );
        outputs.push(out_path);
    }

    Ok(outputs)
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| Error::OutputDirError {
        path: path.to_path_buf(),
        source,
    })
}
