use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use geo::{Contains, LineString, Point, Polygon};
use serde::Deserialize;

use crate::error::{ExtractError, Result};
use crate::report::{Notice, Reporter};
use crate::track::{ExtractionResult, Track};

#[derive(Deserialize)]
#[serde(untagged)]
enum BoundaryFile {
    Ring(Vec<[f64; 2]>),
    Geometry {
        #[serde(rename = "type")]
        kind: String,
        coordinates: Vec<Vec<[f64; 2]>>,
    },
}

/// Area an activity must fall inside to be kept. Coordinates are `[lon, lat]`.
#[derive(Debug, Clone)]
pub struct Boundary {
    polygon: Polygon,
}

impl Boundary {
    pub fn new(polygon: Polygon) -> Self {
        Boundary { polygon }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let file: BoundaryFile = serde_json::from_reader(reader)
            .map_err(|e| ExtractError::Boundary(format!("{}: {}", path.display(), e)))?;
        Boundary::from_file(file)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: BoundaryFile =
            serde_json::from_str(json).map_err(|e| ExtractError::Boundary(e.to_string()))?;
        Boundary::from_file(file)
    }

    fn from_file(file: BoundaryFile) -> Result<Self> {
        let mut rings = match file {
            BoundaryFile::Ring(ring) => vec![ring],
            BoundaryFile::Geometry { kind, coordinates } => {
                if kind != "Polygon" {
                    return Err(ExtractError::Boundary(format!(
                        "expected a Polygon geometry, got {}",
                        kind
                    )));
                }
                coordinates
            }
        }
        .into_iter()
        .map(|ring| LineString::from(ring.into_iter().map(|[x, y]| (x, y)).collect::<Vec<_>>()));

        let exterior = rings
            .next()
            .ok_or_else(|| ExtractError::Boundary("polygon has no rings".to_string()))?;
        if exterior.0.len() < 3 {
            return Err(ExtractError::Boundary(
                "exterior ring needs at least 3 positions".to_string(),
            ));
        }

        Ok(Boundary::new(Polygon::new(exterior, rings.collect())))
    }

    /// Checks the middle of the recording, not every point.
    pub fn contains_track(&self, track: &Track) -> bool {
        track
            .midpoint()
            .is_some_and(|midpoint| self.polygon.contains(&Point::from(midpoint)))
    }

    /// Keeps the results whose track lies inside, reporting the rest.
    /// Returns the kept results and how many were dropped.
    pub fn filter<'a, I>(
        &self,
        results: I,
        reporter: &mut dyn Reporter,
    ) -> (Vec<&'a ExtractionResult>, usize)
    where
        I: IntoIterator<Item = &'a ExtractionResult>,
    {
        let mut kept = Vec::new();
        let mut outside = 0;

        for result in results {
            if self.contains_track(&result.track) {
                kept.push(result);
            } else {
                reporter.report(&result.file_name, &Notice::OutsideBoundary);
                outside += 1;
            }
        }

        (kept, outside)
    }
}
