//! Chrome DevTools Protocol rasterizer

use std::sync::Arc;
use std::time::Duration;

use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use log::debug;

use crate::raster::Rasterizer;
use crate::{Error, Result, Viewport};

/// Time given to web fonts and images to settle after navigation.
const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Screenshot backend driving a headless Chrome (uses the `headless_chrome` crate)
///
/// One browser and one tab are reused for every slide of a run. Each slide is
/// written to a temporary file and loaded through a `file://` URL so relative
/// font imports behave as they would in a normal browser.
pub struct CdpRasterizer {
    browser: Browser,
    tab: Arc<Tab>,
    viewport: Viewport,
}

impl CdpRasterizer {
    pub fn new(viewport: Viewport) -> Result<Self> {
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((viewport.width, viewport.height)))
            .build()
            .map_err(|e| Error::InitializationError(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| Error::InitializationError(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::InitializationError(format!("Failed to create tab: {}", e)))?;

        Ok(Self { browser, tab, viewport })
    }

    /// Close the browser and its child process.
    pub fn close(self) -> Result<()> {
        drop(self.tab);
        drop(self.browser);
        Ok(())
    }
}

impl Rasterizer for CdpRasterizer {
    fn name(&self) -> &'static str {
        "cdp"
    }

    fn rasterize(&mut self, html: &str, viewport: Viewport) -> Result<Vec<u8>> {
        if viewport != self.viewport {
            debug!(
                "Requested viewport {}x{} differs from window {}x{}; output will be resampled",
                viewport.width, viewport.height, self.viewport.width, self.viewport.height
            );
        }

        let file = tempfile::Builder::new()
            .prefix("cardnews-")
            .suffix(".html")
            .tempfile()?;
        std::fs::write(file.path(), html)?;
        let path = std::fs::canonicalize(file.path())?;
        let url = format!("file://{}", path.display());

        self.tab
            .navigate_to(&url)
            .map_err(|e| Error::CdpError(format!("Navigation failed: {}", e)))?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| Error::CdpError(format!("Wait for navigation failed: {}", e)))?;

        std::thread::sleep(SETTLE_DELAY);

        self.tab
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| Error::RenderError(format!("Screenshot failed: {}", e)))
    }
}
