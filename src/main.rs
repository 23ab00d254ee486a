use std::path::PathBuf;

use anyhow::Context as _;
use cardnews::assets::ProfileSpec;
use cardnews::{BackendKind, JobOverrides, RenderConfig, RenderJob, Viewport};
use clap::builder::PossibleValuesParser;
use clap::{Parser, ValueEnum};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "cardnews", version, about = "Render a JSON slide deck into square PNG cards")]
struct Cli {
    /// Slides JSON file (an array of slides, or an object with a "slides" array).
    slides: PathBuf,

    /// Output directory for the PNG files.
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Color theme (overrides the document's "theme").
    #[arg(long, value_parser = PossibleValuesParser::new(cardnews::theme::names()))]
    theme: Option<String>,

    /// Output file prefix.
    #[arg(long)]
    prefix: Option<String>,

    /// Footer brand name.
    #[arg(long)]
    footer_name: Option<String>,

    /// Footer handle, e.g. an account name.
    #[arg(long)]
    footer_handle: Option<String>,

    /// Side length of the square output images in pixels.
    #[arg(long, default_value_t = cardnews::DEFAULT_SIZE)]
    size: u32,

    /// Profile photo: `auto`, a path, or `cover=a.png,cta=b.png`.
    #[arg(long)]
    profile_image: Option<String>,

    /// Logo image path or name inside the assets directory.
    #[arg(long)]
    logo_image: Option<String>,

    /// Directory searched for profile and logo images.
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Name shown next to the cover profile photo.
    #[arg(long)]
    profile_name: Option<String>,

    /// Title shown under the profile name.
    #[arg(long)]
    profile_title: Option<String>,

    /// Rasterizer backend.
    #[arg(long, value_enum, default_value_t = BackendChoice::Pdf)]
    backend: BackendChoice,

    /// Keep each slide's HTML in `<output-dir>/_html/`.
    #[arg(long)]
    keep_html: bool,

    /// HTML-to-PDF program for the pdf backend.
    #[arg(long, env = "CARDNEWS_PDF_COMMAND", default_value = "weasyprint")]
    pdf_command: String,

    /// PDF-to-PNG program for the pdf backend.
    #[arg(long, env = "CARDNEWS_RASTER_COMMAND", default_value = "pdftoppm")]
    raster_command: String,

    /// Rasterization DPI for the pdf backend (96 maps CSS pixels 1:1).
    #[arg(long, default_value_t = cardnews::raster::pdf::CSS_DPI)]
    dpi: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Pdf,
    Cdp,
}

impl Cli {
    fn overrides(&self) -> JobOverrides {
        JobOverrides {
            theme: self.theme.clone(),
            prefix: self.prefix.clone(),
            footer_name: self.footer_name.clone(),
            footer_handle: self.footer_handle.clone(),
            assets_dir: self.assets_dir.clone(),
            profile: self.profile_image.as_deref().map(ProfileSpec::parse_cli),
            logo: self.logo_image.clone(),
            profile_name: self.profile_name.clone(),
            profile_title: self.profile_title.clone(),
        }
    }

    fn config(&self) -> RenderConfig {
        RenderConfig {
            size: Viewport::square(self.size),
            backend: match self.backend {
                BackendChoice::Pdf => BackendKind::Pdf,
                BackendChoice::Cdp => BackendKind::Cdp,
            },
            keep_html: self.keep_html,
            pdf_command: self.pdf_command.clone(),
            raster_command: self.raster_command.clone(),
            dpi: self.dpi,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut job = RenderJob::from_path(&cli.slides)
        .with_context(|| format!("read slides '{}'", cli.slides.display()))?;
    job.apply_overrides(cli.overrides());

    let config = cli.config();
    let mut rasterizer = cardnews::new_rasterizer(&config)?;

    info!(
        "Rendering {} slides with theme '{}' into {}",
        job.slides.len(),
        job.theme,
        cli.output_dir.display()
    );
    let files = cardnews::pipeline::render(&job, &cli.output_dir, &mut rasterizer, &config)?;
    info!("Done: {} PNG files written", files.len());

    Ok(())
}
