use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, error, info};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::builder::types::BuildStats;
use crate::config::{Config, CONFIG_FILES};
use crate::toc::{insert_page_toc, scan_page, TocOutcome};
use crate::utils::error::{BoxResult, PagetocError};
use crate::utils::fs as fsutils;

/// Process the whole site: inject TOC lists into pages, mirror everything
/// else into the destination unchanged.
///
/// A page that fails to process is logged and counted; the pass keeps going.
pub fn build_site(config: &Config) -> BoxResult<BuildStats> {
    fsutils::create_directory(&config.destination)?;

    let excludes = compile_excludes(&config.exclude)?;
    let (pages, assets) = collect_files(config, &excludes)?;

    info!(
        "Processing {} pages from {}",
        pages.len(),
        config.source.display()
    );

    let results: Vec<Result<TocOutcome, (PathBuf, PagetocError)>> = pages
        .par_iter()
        .map(|page| process_page(page, config).map_err(|err| (page.clone(), err)))
        .collect();

    let mut stats = BuildStats {
        pages: pages.len(),
        ..BuildStats::default()
    };
    for result in results {
        match result {
            Ok(TocOutcome::Inserted { .. }) => stats.inserted += 1,
            Ok(TocOutcome::Removed) => stats.removed += 1,
            Err((path, err)) => {
                error!("Failed to process {}: {}", path.display(), err);
                stats.failed += 1;
            }
        }
    }

    for asset in &assets {
        let target = destination_path(asset, config)?;
        fsutils::copy_file(asset, &target)?;
        stats.copied += 1;
    }

    info!(
        "Site pass complete: {} pages ({} lists inserted, {} containers removed, {} failed), {} files copied",
        stats.pages, stats.inserted, stats.removed, stats.failed, stats.copied
    );
    Ok(stats)
}

/// Dry-run variant of [`build_site`]: report what each page would get,
/// without writing anything.
pub fn check_site(config: &Config) -> BoxResult<BuildStats> {
    let excludes = compile_excludes(&config.exclude)?;
    let (pages, assets) = collect_files(config, &excludes)?;

    let mut stats = BuildStats {
        pages: pages.len(),
        copied: assets.len(),
        ..BuildStats::default()
    };
    for page in &pages {
        let scanned = fs::read_to_string(page)
            .map_err(PagetocError::Io)
            .and_then(|html| scan_page(&html, config));
        match scanned {
            Ok(scan) => match scan.outcome(config) {
                TocOutcome::Inserted { entries } => {
                    info!("{}: would insert a {}-entry list", page.display(), entries);
                    stats.inserted += 1;
                }
                TocOutcome::Removed => {
                    info!("{}: would remove the TOC container", page.display());
                    stats.removed += 1;
                }
            },
            Err(err) => {
                error!("{}: {}", page.display(), err);
                stats.failed += 1;
            }
        }
    }

    info!(
        "Check complete: {} pages ({} would insert, {} would remove, {} failed), {} files would be copied",
        stats.pages, stats.inserted, stats.removed, stats.failed, stats.copied
    );
    Ok(stats)
}

/// Remove the destination directory without building
pub fn clean_destination(config: &Config) -> BoxResult<()> {
    if config.destination.exists() {
        info!("Removing {}", config.destination.display());
        fsutils::remove_directory(&config.destination)?;
    } else {
        debug!("Nothing to clean at {}", config.destination.display());
    }
    Ok(())
}

/// Transform one page and write it to its mirrored destination path.
fn process_page(page: &Path, config: &Config) -> Result<TocOutcome, PagetocError> {
    let html = fs::read_to_string(page)?;
    let result = insert_page_toc(&html, config)?;

    let target = destination_path(page, config)?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, &result.html)?;

    debug!("{} -> {}", page.display(), target.display());
    Ok(result.outcome)
}

fn destination_path(path: &Path, config: &Config) -> Result<PathBuf, PagetocError> {
    let relative = path.strip_prefix(&config.source).map_err(|_| {
        PagetocError::Generic(format!(
            "File {} is outside the source directory",
            path.display()
        ))
    })?;
    Ok(config.destination.join(relative))
}

fn compile_excludes(patterns: &[String]) -> BoxResult<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|e| {
                PagetocError::Config(format!("Invalid exclude pattern '{}': {}", pattern, e)).into()
            })
        })
        .collect()
}

/// Split the source tree into pages to transform and files to mirror.
fn collect_files(config: &Config, excludes: &[Pattern]) -> BoxResult<(Vec<PathBuf>, Vec<PathBuf>)> {
    let destination = config.destination.canonicalize().ok();

    let mut pages = Vec::new();
    let mut assets = Vec::new();
    for entry in WalkDir::new(&config.source) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();

        // Never pick up our own output
        if let (Some(dest), Ok(canonical)) = (&destination, path.canonicalize()) {
            if canonical.starts_with(dest) {
                continue;
            }
        }

        let relative = path.strip_prefix(&config.source).unwrap_or(path);
        if is_config_file(relative) {
            continue;
        }
        if excludes.iter().any(|pattern| pattern.matches_path(relative)) {
            debug!("Excluded {}", relative.display());
            continue;
        }

        if is_page(path, config) {
            pages.push(path.to_path_buf());
        } else {
            assets.push(path.to_path_buf());
        }
    }

    pages.sort();
    assets.sort();
    Ok((pages, assets))
}

fn is_config_file(relative: &Path) -> bool {
    relative
        .file_name()
        .map(|name| CONFIG_FILES.iter().any(|candidate| name == *candidate))
        .unwrap_or(false)
}

fn is_page(path: &Path, config: &Config) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            config.html_extensions.iter().any(|known| *known == ext)
        })
        .unwrap_or(false)
}
