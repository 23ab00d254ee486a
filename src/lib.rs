//! Card-news renderer
//!
//! Turns a JSON deck of slides into square PNG images. Each slide is rendered
//! to a themed HTML document, handed to an external HTML rasterizer, and the
//! result is resampled to the exact output size.
//!
//! # Backends
//!
//! - **PDF** (default): an HTML-to-PDF tool followed by a PDF-to-PNG tool,
//!   run as child processes (`weasyprint` and `pdftoppm` unless configured)
//! - **CDP** (feature `cdp`): screenshots from headless Chrome via the
//!   Chrome DevTools Protocol
//!
//! # Example
//!
//! ```no_run
//! use cardnews::{RenderConfig, RenderJob};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let job = RenderJob::from_json_str(r#"[{"type":"summary","title":"Recap","items":["a","b"]}]"#)?;
//! let config = RenderConfig::default();
//!
//! let mut rasterizer = cardnews::new_rasterizer(&config)?;
//! let files = cardnews::pipeline::render(&job, std::path::Path::new("./output"), &mut rasterizer, &config)?;
//! println!("wrote {} files", files.len());
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod error;
pub mod job;
pub mod pipeline;
pub mod raster;
pub mod slide;
pub mod templates;
pub mod theme;

pub use error::{Error, Result};
pub use job::{JobOverrides, RenderJob};
pub use raster::Rasterizer;
pub use slide::{EnrichedSlide, PageInfo, SharedDefaults, Slide, SlideKind};
pub use theme::ThemePalette;

// Headless Chrome backend
#[cfg(feature = "cdp")]
pub mod cdp;

/// Default side length of the output images in pixels
pub const DEFAULT_SIZE: u32 = 1080;

/// Which rasterizer to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// External HTML-to-PDF and PDF-to-PNG tools
    #[default]
    Pdf,
    /// Headless Chrome screenshots (requires the `cdp` feature)
    Cdp,
}

/// Configuration for a render run
///
/// The defaults produce 1080×1080 images through `weasyprint` and `pdftoppm`
/// at 96 DPI, so one CSS pixel maps to one output pixel.
///
/// # Examples
///
/// ```
/// let cfg = cardnews::RenderConfig::default();
/// assert_eq!(cfg.size.width, 1080);
/// assert!(!cfg.keep_html);
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Exact pixel size of every output image
    pub size: Viewport,
    /// Rasterizer backend
    pub backend: BackendKind,
    /// Also write each slide's HTML to `<output>/_html/` for inspection
    pub keep_html: bool,
    /// HTML-to-PDF program (PDF backend)
    pub pdf_command: String,
    /// PDF-to-PNG program (PDF backend)
    pub raster_command: String,
    /// Rasterization resolution for the PDF backend
    pub dpi: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: Viewport::square(DEFAULT_SIZE),
            backend: BackendKind::default(),
            keep_html: false,
            pdf_command: "weasyprint".to_string(),
            raster_command: "pdftoppm".to_string(),
            dpi: raster::pdf::CSS_DPI,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(Error::ConfigError("output size must be non-zero".into()));
        }
        if self.dpi == 0 {
            return Err(Error::ConfigError("dpi must be non-zero".into()));
        }
        Ok(())
    }
}

/// Pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::square(DEFAULT_SIZE)
    }
}

/// Create the rasterizer selected by `config.backend`.
pub fn new_rasterizer(config: &RenderConfig) -> Result<Box<dyn Rasterizer>> {
    config.validate()?;
    match config.backend {
        BackendKind::Pdf => Ok(Box::new(raster::PdfRasterizer::new(
            config.pdf_command.clone(),
            config.raster_command.clone(),
            config.dpi,
        ))),
        #[cfg(feature = "cdp")]
        BackendKind::Cdp => Ok(Box::new(cdp::CdpRasterizer::new(Viewport::square(
            templates::CANVAS_PX,
        ))?)),
        #[cfg(not(feature = "cdp"))]
        BackendKind::Cdp => Err(Error::ConfigError(
            "the cdp backend requires building with the `cdp` feature".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.size, Viewport::square(1080));
        assert_eq!(config.backend, BackendKind::Pdf);
        assert_eq!(config.dpi, 96);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let config = RenderConfig {
            size: Viewport { width: 0, height: 10 },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[cfg(not(feature = "cdp"))]
    #[test]
    fn test_cdp_backend_needs_feature() {
        let config = RenderConfig {
            backend: BackendKind::Cdp,
            ..Default::default()
        };
        assert!(matches!(new_rasterizer(&config), Err(Error::ConfigError(_))));
    }
}
