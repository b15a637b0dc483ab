use super::classify;
use crate::activity::ActivityType;
use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::report::Notice;
use crate::track::{Coordinate, ExtractionResult};
use gpx::{Gpx, Waypoint};
use std::io::{BufReader, Read};

pub(super) fn extract<R: Read>(
    reader: R,
    config: &ExtractorConfig,
    result: &mut ExtractionResult,
) -> Result<()> {
    let gpx: Gpx = gpx::read(BufReader::new(reader))?;

    // Only the first track's type classifies the whole file
    if let Some(first) = gpx.tracks.first() {
        result.activity_type = ActivityType::from_optional(first.type_.as_deref());
        if !classify(config, result) {
            return Ok(());
        }
    }

    for track in &gpx.tracks {
        for segment in &track.segments {
            result.track.extend(coordinates(&segment.points));
        }
    }

    if result.track.is_empty() {
        for route in &gpx.routes {
            result.notices.push(Notice::RouteFallback);
            result.track.extend(coordinates(&route.points));
        }
    }

    Ok(())
}

// gpx::read already fails the document on a missing or out-of-range lat/lon
fn coordinates(points: &[Waypoint]) -> impl Iterator<Item = Coordinate> + '_ {
    points
        .iter()
        .map(|waypoint| Coordinate::from(waypoint.point()))
}
