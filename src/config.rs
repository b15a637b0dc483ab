use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;

use crate::activity::ActivityType;

pub const DEFAULT_ACCEPTED_TYPES: [&str; 4] = ["run", "running", "trail running", "treadmill"];

// 2^31 / 180, rounded the way activity exports commonly do
pub const SEMICIRCLES_PER_DEGREE: f64 = 11_930_464.71;

pub const DATA_DIR: &str = "activities";
pub const OUT_PATH: &str = "runs.geojson";

/// Settings owned by an `Extractor`. Immutable once built.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    accepted_types: BTreeSet<String>,
    semicircle_divisor: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig::with_accepted_types(DEFAULT_ACCEPTED_TYPES)
    }
}

impl ExtractorConfig {
    pub fn with_accepted_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ExtractorConfig {
            accepted_types: types
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .collect(),
            semicircle_divisor: SEMICIRCLES_PER_DEGREE,
        }
    }

    pub fn semicircle_divisor(&self) -> f64 {
        self.semicircle_divisor
    }

    /// An absent declaration never filters a file out.
    pub fn accepts(&self, activity: &ActivityType) -> bool {
        match activity {
            ActivityType::Unknown => true,
            ActivityType::Declared(label) => self.accepted_types.contains(label),
        }
    }
}

/// Batch settings for the command-line driver.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Extract running tracks from GPX and FIT activity files")]
pub struct ScanConfig {
    /// Directory holding .gpx, .fit and .fit.gz files
    #[arg(short, long, env = "RUNTRACK_DATA_DIR", default_value = DATA_DIR)]
    pub data_dir: PathBuf,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// GeoJSON file receiving the accepted tracks
    #[arg(short, long, env = "RUNTRACK_OUTPUT", default_value = OUT_PATH)]
    pub output: PathBuf,

    /// Polygon (JSON ring or GeoJSON Polygon) that a track's midpoint must fall inside
    #[arg(short, long)]
    pub boundary: Option<PathBuf>,
}
