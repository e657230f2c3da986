//! Static page assembly: home and about pages written to the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use log::{debug, info, warn};
use serde::Serialize;

use crate::config::SiteConfig;
use crate::gallery;
use crate::models::content::Content;
use crate::models::profile::NavItem;
use crate::render::render_document;

pub mod about;
pub mod icons;
pub mod sections;

pub const INDEX_PAGE: &str = "index.html";
pub const ABOUT_PAGE: &str = "about.html";

#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct BuildReport {
    pub pages: Vec<PathBuf>,
    pub galleries: usize,
    pub images: usize,
    pub assets_copied: usize,
}

fn default_nav() -> Vec<NavItem> {
    [
        ("Home", "index.html"),
        ("About", "about.html"),
        ("Projects", "index.html#projects"),
        ("Contact", "index.html#contact"),
    ]
    .iter()
    .map(|(label, href)| NavItem {
        label: label.to_string(),
        href: href.to_string(),
    })
    .collect()
}

fn nav_items(content: &Content) -> Vec<NavItem> {
    if content.nav.is_empty() {
        default_nav()
    } else {
        content.nav.clone()
    }
}

fn footer_year(config: &SiteConfig) -> i32 {
    config.year.unwrap_or_else(|| chrono::Local::now().year())
}

fn chrome_top(config: &SiteConfig, content: &Content, active: &str) -> String {
    let mut html = sections::render_nav(&config.site_name, &nav_items(content), active);
    if config.is_development() {
        html.push_str(&sections::render_dev_banner());
    }
    html
}

/// Scripts appended after the page body. The gallery runtime is only
/// emitted when the page carries at least one overlay.
fn page_scripts(with_galleries: bool) -> String {
    let mut scripts = sections::render_menu_script();
    if with_galleries {
        scripts.push_str(&gallery::runtime_script());
    }
    scripts
}

pub fn render_index(config: &SiteConfig, content: &Content) -> Result<String, String> {
    let mut body = chrome_top(config, content, INDEX_PAGE);
    body.push_str(&sections::render_hero(&content.hero));
    body.push_str(&sections::render_about_teaser(&content.about.teaser));
    body.push_str(&sections::render_skills(&content.skills));
    body.push_str(&sections::render_projects(&content.projects)?);
    body.push_str(&sections::render_contact(&content.contacts));
    body.push_str(&sections::render_footer(&config.owner, footer_year(config)));
    Ok(render_document(
        &config.site_name,
        &config.description,
        &body,
        &page_scripts(!content.galleries()?.is_empty()),
    ))
}

pub fn render_about_page(config: &SiteConfig, content: &Content) -> String {
    let mut body = chrome_top(config, content, ABOUT_PAGE);
    body.push_str(&sections::render_page_header("About"));
    body.push_str(&about::render_about(&content.about, &config.owner));
    body.push_str(&sections::render_footer(&config.owner, footer_year(config)));
    render_document(
        &format!("About - {}", config.site_name),
        &config.description,
        &body,
        &page_scripts(false),
    )
}

/// Render every page into `out_dir` and copy the asset directory alongside.
pub fn build_site(config: &SiteConfig, content: &Content, out_dir: &Path) -> Result<BuildReport, String> {
    fs::create_dir_all(out_dir)
        .map_err(|e| format!("cannot create {}: {}", out_dir.display(), e))?;
    let out = canonical(out_dir)?;
    let assets = if config.asset_dir.is_dir() {
        Some(canonical(&config.asset_dir)?)
    } else {
        None
    };
    if assets.as_deref() == Some(out.as_path()) {
        return Err(format!(
            "asset directory {} is the output directory",
            config.asset_dir.display()
        ));
    }

    let mut report = BuildReport {
        galleries: content.galleries()?.len(),
        images: content.image_paths().len(),
        ..BuildReport::default()
    };

    let pages = [
        (INDEX_PAGE, render_index(config, content)?),
        (ABOUT_PAGE, render_about_page(config, content)),
    ];
    for (name, html) in pages {
        let path = out_dir.join(name);
        fs::write(&path, html).map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
        info!("  Wrote {}", path.display());
        report.pages.push(path);
    }

    if let Some(assets) = &assets {
        report.assets_copied = copy_tree(assets, out_dir, &out)?;
    } else {
        warn!(
            "  Asset directory {} missing, no assets copied",
            config.asset_dir.display()
        );
    }

    info!(
        "Built {} page(s), {} galler{}, {} asset(s) copied",
        report.pages.len(),
        report.galleries,
        if report.galleries == 1 { "y" } else { "ies" },
        report.assets_copied
    );
    Ok(report)
}

fn canonical(path: &Path) -> Result<PathBuf, String> {
    path.canonicalize()
        .map_err(|e| format!("cannot resolve {}: {}", path.display(), e))
}

/// Recursively copy the contents of `src` into `dest`, skipping `out` when
/// the output directory sits inside the asset tree. Returns files copied.
fn copy_tree(src: &Path, dest: &Path, out: &Path) -> Result<usize, String> {
    let mut copied = 0;
    let entries =
        fs::read_dir(src).map_err(|e| format!("cannot read {}: {}", src.display(), e))?;
    for entry in entries {
        let entry = entry.map_err(|e| format!("cannot read entry in {}: {}", src.display(), e))?;
        let path = entry.path();
        let target = dest.join(entry.file_name());
        if path.is_dir() {
            if path == out {
                debug!("  Skipping output directory {}", path.display());
                continue;
            }
            fs::create_dir_all(&target)
                .map_err(|e| format!("cannot create {}: {}", target.display(), e))?;
            copied += copy_tree(&path, &target, out)?;
        } else {
            fs::copy(&path, &target).map_err(|e| {
                format!("cannot copy {} -> {}: {}", path.display(), target.display(), e)
            })?;
            debug!("  Copied {}", target.display());
            copied += 1;
        }
    }
    Ok(copied)
}
