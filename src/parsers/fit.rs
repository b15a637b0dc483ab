use super::classify;
use crate::activity::ActivityType;
use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};
use crate::track::{Coordinate, ExtractionResult};
use fitparser::profile::MesgNum;
use fitparser::{FitDataRecord, Value};
use flate2::read::GzDecoder;
use std::io::Read;

/**
 * Parse .fit files, and .fit.gz files as exported by Strava for newer activities.
 */
pub(super) fn extract<R: Read>(
    mut reader: R,
    config: &ExtractorConfig,
    result: &mut ExtractionResult,
) -> Result<()> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    extract_from_bytes(&data, config, result)
}

/// Inflates the whole payload in memory, then parses it exactly like a plain FIT file.
pub(super) fn extract_gz<R: Read>(
    reader: R,
    config: &ExtractorConfig,
    result: &mut ExtractionResult,
) -> Result<()> {
    let mut decoder = GzDecoder::new(reader);
    let mut decompressed_data = Vec::new();
    decoder
        .read_to_end(&mut decompressed_data)
        .map_err(ExtractError::Decompression)?;

    extract_from_bytes(&decompressed_data, config, result)
}

fn extract_from_bytes(
    data: &[u8],
    config: &ExtractorConfig,
    result: &mut ExtractionResult,
) -> Result<()> {
    let fit_file =
        fitparser::from_bytes(data).map_err(|e| ExtractError::FitParse(e.to_string()))?;

    if let Some(sport) = declared_sport(&fit_file) {
        result.activity_type = sport;
        if !classify(config, result) {
            return Ok(());
        }
    }

    let divisor = config.semicircle_divisor();
    for record in fit_file.iter().filter(|r| r.kind() == MesgNum::Record) {
        if let Some(coordinate) = extract_coordinates_from_record(record, divisor) {
            result.track.push(coordinate);
        }
    }

    Ok(())
}

/// The last `sport` field seen across all sport messages.
fn declared_sport(fit_file: &[FitDataRecord]) -> Option<ActivityType> {
    let mut sport = None;

    for message in fit_file.iter().filter(|r| r.kind() == MesgNum::Sport) {
        for field in message.fields() {
            if field.name() == "sport" {
                if let Some(label) = sport_label(field.value()) {
                    sport = Some(label);
                }
            }
        }
    }

    sport.map(|label| ActivityType::declared(&label))
}

fn sport_label(value: &Value) -> Option<String> {
    match value {
        // sports unknown to the profile decode as "unknown_variant_N"
        Value::String(name) => Some(name.clone()),
        _ => None,
    }
}

// One coordinate per record, and only when both axes decoded
fn extract_coordinates_from_record(record: &FitDataRecord, divisor: f64) -> Option<Coordinate> {
    let mut latitude: Option<f64> = None;
    let mut longitude: Option<f64> = None;

    for field in record.fields() {
        match field.name() {
            "position_lat" => latitude = extract_coordinate_value(field.value()),
            "position_long" => longitude = extract_coordinate_value(field.value()),
            _ => {} // ignore other fields
        }
    }

    let (lat, lon) = (latitude?, longitude?);

    // convert from semicircles to degrees
    Some(Coordinate::new(lat / divisor, lon / divisor))
}

fn extract_coordinate_value(value: &Value) -> Option<f64> {
    match value {
        // 0x7FFFFFFF marks an unset sint32
        Value::SInt32(v) if *v == i32::MAX => None,
        Value::SInt32(v) => Some(*v as f64),
        Value::UInt32(v) => Some(*v as f64),
        Value::SInt16(v) => Some(*v as f64),
        Value::UInt16(v) => Some(*v as f64),
        Value::SInt8(v) => Some(*v as f64),
        Value::UInt8(v) => Some(*v as f64),
        Value::Float32(v) => Some(*v as f64),
        Value::Float64(v) => Some(*v),
        _ => None,
    }
}
