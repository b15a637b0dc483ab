use std::path::Path;

use walkdir::WalkDir;

use crate::error::{ExtractError, Result};
use crate::parsers::{Extractor, Format};
use crate::report::Reporter;
use crate::track::{EmptyReason, ExtractionResult, ExtractionStatus};

#[derive(Debug, Default)]
pub struct ScanSummary {
    pub results: Vec<ExtractionResult>,
    pub files_seen: usize,
    pub contributing: usize,
    pub rejected: usize,
    pub empty: usize,
    pub errors: usize,
}

impl ScanSummary {
    fn record(&mut self, result: ExtractionResult) {
        self.files_seen += 1;
        match &result.status {
            ExtractionStatus::Success if !result.track.is_empty() => self.contributing += 1,
            ExtractionStatus::Success | ExtractionStatus::Empty(EmptyReason::NoGeometry) => {
                self.empty += 1
            }
            ExtractionStatus::Empty(EmptyReason::Rejected) => self.rejected += 1,
            ExtractionStatus::Error(_) => self.errors += 1,
        }
        self.results.push(result);
    }

    pub fn contributing_tracks(&self) -> impl Iterator<Item = &ExtractionResult> {
        self.results.iter().filter(|r| r.contributes())
    }

    pub fn total_points(&self) -> usize {
        self.contributing_tracks().map(|r| r.track.len()).sum()
    }
}

/// Extracts every activity file in `data_dir`, one at a time, in listing order.
///
/// Files with unknown extensions are ignored. A file that fails to parse is
/// reported and counted, never propagated; only an unreadable `data_dir`
/// itself is an error.
pub fn scan_directory(
    data_dir: &Path,
    recursive: bool,
    extractor: &Extractor,
    reporter: &mut dyn Reporter,
) -> Result<ScanSummary> {
    println!(
        "Searching for activity files in {} directory...",
        data_dir.display()
    );

    // min_depth(1) would silently skip a root that is a plain file
    if data_dir.metadata().is_ok_and(|m| !m.is_dir()) {
        return Err(ExtractError::NotADirectory(data_dir.display().to_string()));
    }

    let walker = WalkDir::new(data_dir).min_depth(1);
    let walker = if recursive { walker } else { walker.max_depth(1) };

    let mut summary = ScanSummary::default();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // the root itself must be listable, anything below is best effort
            Err(e) if e.depth() == 0 => {
                return Err(ExtractError::Walk {
                    path: data_dir.display().to_string(),
                    source: e,
                });
            }
            Err(e) => {
                log::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(format) = Format::from_path(entry.path()) else {
            log::trace!("ignoring {}", entry.path().display());
            continue;
        };

        let result = extractor.extract_path(entry.path(), format);
        for notice in &result.notices {
            reporter.report(&result.file_name, notice);
        }
        log::debug!(
            "{}: {} points, activity {}",
            result.file_name,
            result.track.len(),
            result.activity_type
        );

        summary.record(result);
    }

    println!("Found {} activity files", summary.files_seen);
    Ok(summary)
}
