pub mod fit;
pub mod gpx;

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::ExtractorConfig;
use crate::report::Notice;
use crate::track::{EmptyReason, ExtractionResult, ExtractionStatus, Track};

/// Source container, decided from the file name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Gpx,
    Fit,
    FitGz,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Format> {
        let file_name = path.file_name()?.to_str()?.to_ascii_lowercase();

        // .fit.gz must win over .fit
        if file_name.ends_with(".fit.gz") {
            Some(Format::FitGz)
        } else if file_name.ends_with(".fit") {
            Some(Format::Fit)
        } else if file_name.ends_with(".gpx") {
            Some(Format::Gpx)
        } else {
            None
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Gpx => f.write_str("GPX"),
            Format::Fit => f.write_str("FIT"),
            Format::FitGz => f.write_str("FIT (gzip)"),
        }
    }
}

/// Turns one activity file into a track and its activity classification.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Extractor { config }
    }

    /// Opens `path` and extracts it as `format`. I/O failures end up in the
    /// result's status like any other per-file failure.
    pub fn extract_path(&self, path: &Path, format: Format) -> ExtractionResult {
        let file_name = base_name(path);

        match File::open(path) {
            Ok(file) => self.extract_reader(&file_name, file, format),
            Err(e) => {
                let mut result = ExtractionResult::new(file_name, format);
                fail(&mut result, e.to_string());
                result
            }
        }
    }

    pub fn extract_reader<R: Read>(
        &self,
        file_name: &str,
        reader: R,
        format: Format,
    ) -> ExtractionResult {
        let mut result = ExtractionResult::new(file_name, format);

        let outcome = match format {
            Format::Gpx => gpx::extract(reader, &self.config, &mut result),
            Format::Fit => fit::extract(reader, &self.config, &mut result),
            Format::FitGz => fit::extract_gz(reader, &self.config, &mut result),
        };

        match outcome {
            Ok(()) => {
                if result.status == ExtractionStatus::Success && result.track.is_empty() {
                    result.status = ExtractionStatus::Empty(EmptyReason::NoGeometry);
                    result.notices.push(Notice::EmptyGeometry);
                }
            }
            Err(e) => {
                log::debug!("{} failed to parse as {}: {:?}", file_name, format, e);
                fail(&mut result, e.to_string());
            }
        }

        result
    }
}

/// Applies the allowlist to the activity type already stored in `result`.
/// Returns false, leaving an empty rejected result, when the file must be skipped.
fn classify(config: &ExtractorConfig, result: &mut ExtractionResult) -> bool {
    if config.accepts(&result.activity_type) {
        return true;
    }

    result.track = Track::new();
    result.status = ExtractionStatus::Empty(EmptyReason::Rejected);
    result.notices.push(Notice::SkippedActivity {
        activity: result.activity_type.clone(),
    });
    false
}

fn fail(result: &mut ExtractionResult, message: String) {
    result.track = Track::new();
    result.notices.push(Notice::ParseError {
        message: message.clone(),
    });
    result.status = ExtractionStatus::Error(message);
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
