use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::Style;

use super::load_config;

#[derive(Args)]
pub struct RoutesArgs {
    /// Gallery config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &RoutesArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let title = Style::new().cyan().bold();
    let label = Style::new().dim();
    let path = Style::new().underlined();

    println!();
    println!("  {}", title.apply_to(&config.site_name));
    println!();
    for (name, url) in config.routes.entries() {
        println!("  {:<22}{}", label.apply_to(name), path.apply_to(url));
    }
    println!(
        "  {:<22}{}",
        label.apply_to("static"),
        path.apply_to(&config.static_url)
    );
    println!();

    Ok(())
}
