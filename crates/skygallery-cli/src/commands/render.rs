use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use skygallery_core::view::{render_page, ImageFilterForm};
use skygallery_core::{PageKind, QueryParams};

use super::{load_config, load_fixture};

#[derive(Args)]
pub struct RenderArgs {
    /// Request path (defaults to the images route)
    #[arg(long)]
    pub path: Option<String>,

    /// Raw query string, e.g. "thumbnail_size=small&sort=date"
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Image page fixture (TOML)
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Gallery config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write HTML to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let page = load_fixture(args.fixture.as_deref())?;

    let path = args.path.as_deref().unwrap_or(&config.routes.images);
    let kind = config.routes.resolve(path).unwrap_or_else(|| {
        tracing::warn!(path, "path matches no route, rendering the plain images page");
        PageKind::Images
    });
    let query = QueryParams::parse(&args.query);
    let form = ImageFilterForm::from_query(&query);

    let html = render_page(kind, &config, path, &query, &form, &page)
        .context("Failed to render images page")?;

    if let Some(ref output) = args.output {
        std::fs::write(output, &html)
            .with_context(|| format!("Failed to write HTML to {}", output.display()))?;
        println!("Page saved to {}", output.display());
    } else {
        print!("{}", html);
    }

    Ok(())
}
