pub mod activity;
pub mod boundary;
pub mod config;
pub mod error;
pub mod parsers;
pub mod report;
pub mod scan;
pub mod sink;
pub mod track;

pub use activity::ActivityType;
pub use config::{ExtractorConfig, ScanConfig};
pub use error::{ExtractError, Result};
pub use parsers::{Extractor, Format};
pub use report::{CollectingReporter, Notice, Reporter, StdoutReporter};
pub use scan::{ScanSummary, scan_directory};
pub use track::{Coordinate, EmptyReason, ExtractionResult, ExtractionStatus, Track};
