use geo::{LineString, Point};

use crate::activity::ActivityType;
use crate::parsers::Format;
use crate::report::Notice;

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for Point {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.longitude, coordinate.latitude)
    }
}

impl From<Point> for Coordinate {
    fn from(point: Point) -> Self {
        Coordinate::new(point.y(), point.x())
    }
}

/// Coordinates in recording order. Never reordered once pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    coordinates: Vec<Coordinate>,
}

impl Track {
    pub fn new() -> Self {
        Track::default()
    }

    pub fn push(&mut self, coordinate: Coordinate) {
        self.coordinates.push(coordinate);
    }

    pub fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, coordinates: I) {
        self.coordinates.extend(coordinates);
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// The coordinate halfway through the recording, used for boundary checks.
    pub fn midpoint(&self) -> Option<Coordinate> {
        self.coordinates.get(self.coordinates.len() / 2).copied()
    }

    pub fn to_line_string(&self) -> LineString {
        self.coordinates
            .iter()
            .map(|c| (c.longitude, c.latitude))
            .collect::<Vec<_>>()
            .into()
    }
}

impl From<Vec<Coordinate>> for Track {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Track { coordinates }
    }
}

impl FromIterator<Coordinate> for Track {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Track {
            coordinates: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The file parsed but held no usable positions, routes included.
    NoGeometry,
    /// The declared activity type is outside the accepted set.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionStatus {
    Success,
    Empty(EmptyReason),
    Error(String),
}

/// Outcome of extracting one source file.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub file_name: String,
    pub format: Format,
    pub track: Track,
    pub activity_type: ActivityType,
    pub status: ExtractionStatus,
    pub notices: Vec<Notice>,
}

impl ExtractionResult {
    pub(crate) fn new(file_name: impl Into<String>, format: Format) -> Self {
        ExtractionResult {
            file_name: file_name.into(),
            format,
            track: Track::new(),
            activity_type: ActivityType::Unknown,
            status: ExtractionStatus::Success,
            notices: Vec::new(),
        }
    }

    /// Whether this file should be handed to a downstream consumer.
    pub fn contributes(&self) -> bool {
        self.status == ExtractionStatus::Success && !self.track.is_empty()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, ExtractionStatus::Error(_))
    }
}
