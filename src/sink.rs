use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::track::ExtractionResult;

/// Downstream consumer of accepted tracks.
pub trait TrackSink {
    fn accept(&mut self, result: &ExtractionResult) -> Result<()>;

    /// Flushes whatever was accepted. Returns how many tracks were written.
    fn finish(self: Box<Self>) -> Result<usize>;
}

#[derive(Serialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: LineGeometry,
    properties: Properties,
}

#[derive(Serialize)]
struct LineGeometry {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: Vec<[f64; 2]>,
}

#[derive(Serialize)]
struct Properties {
    file: String,
    activity_type: String,
    points: usize,
}

impl From<&ExtractionResult> for Feature {
    fn from(result: &ExtractionResult) -> Self {
        Feature {
            kind: "Feature",
            geometry: LineGeometry {
                kind: "LineString",
                coordinates: result
                    .track
                    .to_line_string()
                    .coords()
                    .map(|c| [c.x, c.y])
                    .collect(),
            },
            properties: Properties {
                file: result.file_name.clone(),
                activity_type: result.activity_type.to_string(),
                points: result.track.len(),
            },
        }
    }
}

/// Writes every accepted track as one GeoJSON `LineString` feature.
pub struct GeoJsonSink<W: Write> {
    writer: W,
    features: Vec<Feature>,
}

impl GeoJsonSink<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(GeoJsonSink::new(BufWriter::new(file)))
    }
}

impl<W: Write> GeoJsonSink<W> {
    pub fn new(writer: W) -> Self {
        GeoJsonSink {
            writer,
            features: Vec::new(),
        }
    }

    fn write_out(mut self) -> Result<(W, usize)> {
        let count = self.features.len();
        let collection = FeatureCollection {
            kind: "FeatureCollection",
            features: self.features,
        };
        serde_json::to_writer(&mut self.writer, &collection)?;
        self.writer.flush()?;
        Ok((self.writer, count))
    }

    /// Like `finish`, but hands the writer back.
    pub fn into_inner(self) -> Result<W> {
        self.write_out().map(|(writer, _)| writer)
    }
}

impl<W: Write> TrackSink for GeoJsonSink<W> {
    fn accept(&mut self, result: &ExtractionResult) -> Result<()> {
        if result.contributes() {
            self.features.push(Feature::from(result));
        }
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<usize> {
        self.write_out().map(|(_, count)| count)
    }
}
