use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use log::{error, info};

use folio::config::{SiteConfig, CONFIG_FILE};
use folio::models::content::Content;
use folio::{boot, pages};

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Build a static portfolio site")]
struct Args {
    /// Path to the site config file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every page into the output directory
    Build {
        /// Override the configured output directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate config and content without writing pages
    Check,
    /// Print the gallery manifest as JSON
    Manifest,
}

fn load(config_path: &Path) -> Result<(SiteConfig, Content), String> {
    let config = SiteConfig::load(config_path)?;
    let content = Content::load(&config.content)?;
    Ok((config, content))
}

fn run(args: Args) -> Result<(), String> {
    let (config, content) = load(&args.config)?;

    match args.command {
        Command::Build { out } => {
            let out_dir = out.unwrap_or_else(|| config.output_dir.clone());
            let report = boot::check(&config, &content, &out_dir);
            if !report.ok() {
                return Err(format!("boot check failed with {} error(s)", report.errors));
            }
            let built = pages::build_site(&config, &content, &out_dir)?;
            info!("Site written to {}", out_dir.display());
            println!(
                "{} page(s), {} gallery overlay(s), {} asset(s) -> {}",
                built.pages.len(),
                built.galleries,
                built.assets_copied,
                out_dir.display()
            );
        }
        Command::Check => {
            let galleries = content.galleries()?;
            println!(
                "ok: {} project(s), {} gallery overlay(s), {} skill(s), {} contact link(s)",
                content.projects.len(),
                galleries.len(),
                content.skills.len(),
                content.contacts.len()
            );
        }
        Command::Manifest => {
            let manifest = content.manifest()?;
            let json = serde_json::to_string_pretty(&manifest).map_err(|e| e.to_string())?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
