//! CLI output formatting for every command.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects. Diagnostics go through `log`;
//! these listings are the command's actual result.
//!
//! # Output Format
//!
//! ## Update
//!
//! ```text
//! Categories
//! 001 Animals (3 photos)
//! 002 Street Art (1 photos)
//!
//! Updated 2 categories, 4 images (2 without captions)
//! ```
//!
//! ## Validate
//!
//! ```text
//! Local validation: 4 references checked
//!     Missing local file: gallery/animals/bear.jpg (expected at docs/images/gallery/animals/bear.jpg)
//!     Unreferenced image: gallery/animals/owl.jpg
//! Validation failed with 2 issues
//! ```
//!
//! ## Render
//!
//! ```text
//! 001 Animals → gallery.html
//!     3 tiles in 3 columns, 540px tall
//! 002 Animals → gallery-animals.html
//!     3 tiles in 3 columns, 540px tall
//! 003 Birds → gallery-birds.html
//!     No images in this category yet.
//!
//! Rendered 3 pages
//! ```

use crate::generate::RenderedPage;
use crate::sync::SyncOutcome;
use crate::update::UpdateSummary;
use crate::validate::ValidationReport;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional photo count.
///
/// ```text
/// 001 Animals (5 photos)
/// 001 Animals
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{} {} ({} photos)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

// ============================================================================
// Update
// ============================================================================

pub fn format_update_summary(summary: &UpdateSummary) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    for (i, (name, count)) in summary.per_category.iter().enumerate() {
        lines.push(entity_header(i + 1, name, Some(*count)));
    }
    lines.push(String::new());
    lines.push(format!(
        "Updated {}, {} ({} without captions)",
        plural(summary.categories, "category", "categories"),
        plural(summary.total_images, "image", "images"),
        summary.without_captions
    ));
    lines
}

pub fn print_update_summary(summary: &UpdateSummary) {
    for line in format_update_summary(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Validate
// ============================================================================

/// `label` names the pass, e.g. "Local" or "Remote".
pub fn format_validation_report(label: &str, report: &ValidationReport) -> Vec<String> {
    let mut lines = vec![format!(
        "{} validation: {} checked",
        label,
        plural(report.checked, "reference", "references")
    )];
    for issue in &report.issues {
        lines.push(format!("{}{}", indent(1), issue));
    }
    if report.is_ok() {
        lines.push("All checks passed".to_string());
    } else {
        lines.push(format!(
            "Validation failed with {}",
            plural(report.issues.len(), "issue", "issues")
        ));
    }
    lines
}

pub fn print_validation_report(label: &str, report: &ValidationReport) {
    for line in format_validation_report(label, report) {
        println!("{}", line);
    }
}

// ============================================================================
// Render
// ============================================================================

pub fn format_render_output(pages: &[RenderedPage]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, page) in pages.iter().enumerate() {
        lines.push(format!(
            "{} \u{2192} {}",
            entity_header(i + 1, &page.title, None),
            page.path
        ));
        let detail = match (&page.message, page.columns, page.height) {
            (Some(message), _, _) => message.clone(),
            (None, Some(columns), Some(height)) => format!(
                "{} in {}, {}px tall",
                plural(page.tiles, "tile", "tiles"),
                plural(columns, "column", "columns"),
                height.round()
            ),
            _ => plural(page.tiles, "tile", "tiles"),
        };
        lines.push(format!("{}{}", indent(1), detail));
    }
    lines.push(String::new());
    lines.push(format!("Rendered {}", plural(pages.len(), "page", "pages")));
    lines
}

pub fn print_render_output(pages: &[RenderedPage]) {
    for line in format_render_output(pages) {
        println!("{}", line);
    }
}

// ============================================================================
// Sync
// ============================================================================

pub fn format_sync_outcome(outcome: SyncOutcome, target: &str) -> Vec<String> {
    match outcome {
        SyncOutcome::Synced => vec![format!("Synced images to {}", target)],
        SyncOutcome::Partial => vec![
            format!("Synced images to {}", target),
            format!(
                "{}Some files may not have been transferred; check the log",
                indent(1)
            ),
        ],
    }
}

pub fn print_sync_outcome(outcome: SyncOutcome, target: &str) {
    for line in format_sync_outcome(outcome, target) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
