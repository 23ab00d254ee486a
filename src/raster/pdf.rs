//! Two-stage process backend: an HTML-to-PDF tool, then a PDF-to-PNG tool.
//!
//! The defaults are `weasyprint <in.html> <out.pdf>` followed by
//! `pdftoppm -png -singlefile -r <dpi> <in.pdf> <out>`. Both run as blocking
//! child processes, once each, with no retry.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::raster::Rasterizer;
use crate::{Error, Result, Viewport};

/// CSS pixels per inch; at this DPI one CSS pixel becomes one output pixel.
pub const CSS_DPI: u32 = 96;

/// Rasterizer that shells out to external PDF tools.
#[derive(Debug, Clone)]
pub struct PdfRasterizer {
    pdf_command: String,
    raster_command: String,
    dpi: u32,
}

impl PdfRasterizer {
    pub fn new(pdf_command: impl Into<String>, raster_command: impl Into<String>, dpi: u32) -> Self {
        Self {
            pdf_command: pdf_command.into(),
            raster_command: raster_command.into(),
            dpi,
        }
    }

    fn html_to_pdf(&self, html_path: &Path, pdf_path: &Path) -> Result<()> {
        let mut cmd = Command::new(&self.pdf_command);
        cmd.arg(html_path).arg(pdf_path);
        run(&self.pdf_command, &mut cmd)?;
        if !pdf_path.is_file() {
            return Err(Error::RenderError(format!(
                "{} exited successfully but wrote no PDF",
                self.pdf_command
            )));
        }
        Ok(())
    }

    fn pdf_to_png(&self, pdf_path: &Path, out_base: &Path) -> Result<Vec<u8>> {
        let mut cmd = Command::new(&self.raster_command);
        cmd.args(["-png", "-singlefile", "-r"])
            .arg(self.dpi.to_string())
            .arg(pdf_path)
            .arg(out_base);
        run(&self.raster_command, &mut cmd)?;

        let png_path = out_base.with_extension("png");
        std::fs::read(&png_path).map_err(|e| {
            Error::RenderError(format!(
                "{} produced no image at {}: {}",
                self.raster_command,
                png_path.display(),
                e
            ))
        })
    }
}

impl Rasterizer for PdfRasterizer {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn rasterize(&mut self, html: &str, _viewport: Viewport) -> Result<Vec<u8>> {
        // page size comes from the document's @page rule; the temp dir is
        // removed on drop whichever way this returns
        let dir = tempfile::Builder::new().prefix("cardnews-").tempdir()?;
        let html_path = dir.path().join("slide.html");
        let pdf_path = dir.path().join("slide.pdf");
        let out_base = dir.path().join("slide");

        std::fs::write(&html_path, html)?;
        self.html_to_pdf(&html_path, &pdf_path)?;
        self.pdf_to_png(&pdf_path, &out_base)
    }
}

/// Run a command to completion, turning spawn failures and non-zero exits
/// into render errors that carry the tool's stderr.
fn run(program: &str, cmd: &mut Command) -> Result<()> {
    debug!("Running {:?}", cmd);
    let output = cmd.output().map_err(|e| {
        Error::RenderError(format!(
            "failed to spawn {program} (is it installed and on PATH?): {e}"
        ))
    })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::RenderError(format!(
            "{program} failed with {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_a_render_error() {
        let mut r = PdfRasterizer::new("cardnews-no-such-tool", "pdftoppm", CSS_DPI);
        let err = r
            .rasterize("<html></html>", Viewport::square(10))
            .unwrap_err();
        match err {
            Error::RenderError(msg) => assert!(msg.contains("cardnews-no-such-tool")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_render_error() {
        // `false` ignores its arguments and exits 1
        let mut r = PdfRasterizer::new("false", "pdftoppm", CSS_DPI);
        let err = r
            .rasterize("<html></html>", Viewport::square(10))
            .unwrap_err();
        assert!(matches!(err, Error::RenderError(ref m) if m.contains("false failed")));
    }

    #[cfg(unix)]
    #[test]
    fn tool_that_writes_nothing_is_a_render_error() {
        // `true` exits 0 without creating the PDF
        let mut r = PdfRasterizer::new("true", "pdftoppm", CSS_DPI);
        let err = r
            .rasterize("<html></html>", Viewport::square(10))
            .unwrap_err();
        assert!(matches!(err, Error::RenderError(ref m) if m.contains("wrote no PDF")));
    }
}
