//! Rasterizer backends and output normalization.
//!
//! A rasterizer turns one complete HTML document into PNG bytes. The bytes
//! may come back at whatever size the backend produced; [`normalize_png`]
//! resamples them to the exact output size.

pub mod pdf;

use std::path::Path;

use image::{imageops::FilterType, DynamicImage, ImageFormat};
use log::debug;

use crate::{Error, Result, Viewport};

pub use pdf::PdfRasterizer;

/// Core trait for HTML rasterizer implementations
pub trait Rasterizer {
    /// Short backend name used in log output
    fn name(&self) -> &'static str;

    /// Render a complete HTML document laid out for `viewport` into PNG bytes.
    ///
    /// Any intermediate files must be removed before returning, whether or not
    /// rendering succeeded.
    fn rasterize(&mut self, html: &str, viewport: Viewport) -> Result<Vec<u8>>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn rasterize(&mut self, html: &str, viewport: Viewport) -> Result<Vec<u8>> {
        (**self).rasterize(html, viewport)
    }
}

/// Decode rasterizer output and resample it to exactly `size` if needed.
pub fn normalize_png(png: &[u8], size: Viewport) -> Result<DynamicImage> {
    if png.is_empty() {
        return Err(Error::RenderError("rasterizer produced no output".into()));
    }
    let img = image::load_from_memory_with_format(png, ImageFormat::Png)?;
    if img.width() == size.width && img.height() == size.height {
        return Ok(img);
    }
    debug!(
        "Resampling {}x{} to {}x{}",
        img.width(),
        img.height(),
        size.width,
        size.height
    );
    Ok(img.resize_exact(size.width, size.height, FilterType::Lanczos3))
}

/// Normalize `png` to `size` and write it to `out` as PNG.
pub fn write_normalized(png: &[u8], size: Viewport, out: &Path) -> Result<()> {
    let img = normalize_png(png, size)?;
    img.save_with_format(out, ImageFormat::Png)?;
    Ok(())
}
