//! Pipeline orchestration
//!
//! Scans the source folder, runs the safety gate, plans every destination,
//! then copies files one at a time into the output hierarchy.

use super::copy::{copy_exclusive, CopyLog};
use crate::config::{CollisionPolicy, Settings};
use crate::discovery::{self, GateReport};
use crate::error::{GroovesError, Result};
use crate::layout::Layout;
use crate::types::{is_target, PlannedCopy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Pipeline result summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    /// Every file found under the source folder
    pub total_files: usize,
    /// `.mid` files among them
    pub target_files: usize,
    /// Files copied into the output hierarchy
    pub copied: usize,
    /// Target files left alone (unclassifiable, or colliding under `--skip-existing`)
    pub skipped: usize,
}

/// Run the full reorganization
pub fn run(settings: &Settings) -> Result<PipelineResult> {
    let pipeline_start = Instant::now();
    settings.validate()?;

    // Phase 1: Discovery
    info!("Scanning {}", settings.source_root.display());
    let files = discovery::scan(&settings.source_root)?;

    // Phase 2: Safety gate (nothing has been written yet)
    let report = discovery::check(&settings.source_root, &files)?;
    print_scan_summary(settings, &report);

    // Phase 3: Planning
    let layout = Layout::new(&settings.source_root, &settings.output_root);
    let (plan, unclassified) = plan_copies(&layout, &files)?;
    info!(
        "Planned {} copies ({} unclassifiable)",
        plan.len(),
        unclassified
    );

    if settings.dry_run {
        return Ok(run_dry_run(&plan, &report, unclassified, settings));
    }

    // Phase 4: Copy
    std::fs::create_dir_all(&settings.output_root)
        .map_err(|e| GroovesError::output_error(&settings.output_root, e))?;
    println!(
        "Created output directory: {}",
        settings.output_root.display().to_string().green()
    );

    let mut log = CopyLog::open(&settings.log_path())?;
    let skipped = copy_all(&plan, &mut log, settings)?;

    info!(
        "Total pipeline time: {:.2}s",
        pipeline_start.elapsed().as_secs_f64()
    );

    Ok(PipelineResult {
        total_files: report.total_files,
        target_files: report.target_files,
        copied: log.count(),
        skipped: skipped + unclassified,
    })
}

/// Compute the destination of every target file, in discovery order
///
/// Returns the planned copies and the number of files the classifier skipped.
pub fn plan_copies(layout: &Layout, files: &[PathBuf]) -> Result<(Vec<PlannedCopy>, usize)> {
    let mut plan = Vec::new();
    let mut unclassified = 0;

    for file in files.iter().filter(|f| is_target(f)) {
        match layout.destination_for(file)? {
            Some(destination) => plan.push(PlannedCopy {
                source: file.clone(),
                destination,
            }),
            None => unclassified += 1,
        }
    }

    Ok((plan, unclassified))
}

/// Copy planned files in order, returning how many collisions were skipped
fn copy_all(plan: &[PlannedCopy], log: &mut CopyLog, settings: &Settings) -> Result<usize> {
    let progress_bar = if settings.show_progress {
        let pb = ProgressBar::new(plan.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut skipped = 0;

    for planned in plan {
        match copy_exclusive(&planned.source, &planned.destination) {
            Ok(bytes) => {
                let n = log.record(&planned.destination)?;
                debug!(
                    "#{} {} -> {} ({} bytes)",
                    n,
                    planned.source.display(),
                    planned.destination.display(),
                    bytes
                );
            }
            Err(e) if e.is_recoverable() && settings.on_collision == CollisionPolicy::Skip => {
                warn!("Skipping {}: {}", planned.source.display(), e);
                skipped += 1;
            }
            Err(e) => {
                if let Some(ref pb) = progress_bar {
                    pb.abandon();
                }
                return Err(e);
            }
        }

        if let Some(ref pb) = progress_bar {
            pb.inc(1);
            pb.set_message(
                planned
                    .source
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
        }
    }

    if let Some(pb) = progress_bar {
        pb.finish_with_message("Copy complete");
    }

    Ok(skipped)
}

/// Dry run mode - show where files would go without touching the disk
fn run_dry_run(
    plan: &[PlannedCopy],
    report: &GateReport,
    unclassified: usize,
    settings: &Settings,
) -> PipelineResult {
    println!();
    println!("=== DRY RUN MODE ===");
    println!();

    for planned in plan {
        let relative = planned
            .destination
            .strip_prefix(&settings.output_root)
            .unwrap_or(planned.destination.as_path());
        println!("  {}", planned.source.display());
        println!("    -> {}", relative.display().to_string().cyan());
    }

    println!();
    println!("─────────────────────────────────────────");
    println!();
    println!(
        "Would copy {} files into {}",
        plan.len(),
        settings.output_root.display()
    );
    println!("Would log to {}", settings.log_path().display());
    println!();

    PipelineResult {
        total_files: report.total_files,
        target_files: report.target_files,
        copied: 0,
        skipped: unclassified,
    }
}

/// Print what the scan found
fn print_scan_summary(settings: &Settings, report: &GateReport) {
    println!(
        "Found {} files in {}",
        report.total_files,
        settings.source_root.display().to_string().green()
    );

    let extensions: Vec<String> = report
        .extensions
        .iter()
        .map(|ext| if ext.is_empty() { "(none)".to_string() } else { ext.clone() })
        .collect();
    println!("Found filetypes: {}", extensions.join(", "));

    println!(
        "First found midi element: {}",
        report.first_target.display().to_string().magenta()
    );
}
