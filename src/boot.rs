use log::{error, info, warn};
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::models::content::Content;

/// Outcome of the pre-build checks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BootReport {
    pub warnings: u32,
    pub errors: u32,
}

impl BootReport {
    pub fn ok(&self) -> bool {
        self.errors == 0
    }
}

/// Run all pre-build checks.
/// Creates the output directory, warns about missing assets and images,
/// and counts anything that would make the build fail.
pub fn check(config: &SiteConfig, content: &Content, out_dir: &Path) -> BootReport {
    info!("Folio boot check starting...");
    let mut report = BootReport::default();

    // ── 1. Output directory ────────────────────────────
    if !out_dir.exists() {
        match fs::create_dir_all(out_dir) {
            Ok(_) => info!("  Created directory: {}", out_dir.display()),
            Err(e) => {
                error!("  FAILED to create directory {}: {}", out_dir.display(), e);
                report.errors += 1;
            }
        }
    }

    // ── 2. Output directory writable ───────────────────
    if out_dir.exists() {
        let test_file = out_dir.join(".write_test");
        match fs::write(&test_file, "test") {
            Ok(_) => {
                let _ = fs::remove_file(&test_file);
            }
            Err(e) => {
                error!("  Output directory not writable: {}", e);
                report.errors += 1;
            }
        }
    }

    // ── 3. Asset directory ─────────────────────────────
    let assets = &config.asset_dir;
    if !assets.is_dir() {
        warn!("  Missing asset directory: {} (images will 404)", assets.display());
        report.warnings += 1;
    } else {
        // ── 4. Referenced images ───────────────────────
        for image in content.image_paths() {
            if !assets.join(image).exists() {
                warn!("  Missing image: {}", image);
                report.warnings += 1;
            }
        }
    }

    // ── 5. Galleries ───────────────────────────────────
    if let Err(e) = content.galleries() {
        error!("  Invalid gallery: {}", e);
        report.errors += 1;
    }

    if report.errors > 0 {
        error!(
            "Boot check finished with {} error(s) and {} warning(s)",
            report.errors, report.warnings
        );
    } else if report.warnings > 0 {
        warn!("Boot check passed with {} warning(s)", report.warnings);
    } else {
        info!("Boot check passed");
    }
    report
}
