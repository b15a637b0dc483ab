#![allow(dead_code)]

use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

const CRC_TABLE: [u16; 16] = [
    0x0000, 0xCC01, 0xD801, 0x1400, 0xF001, 0x3C00, 0x2800, 0xE401, 0xA001, 0x6C00, 0x7800,
    0xB401, 0x5000, 0x9C01, 0x8801, 0x4400,
];

fn crc_byte(crc: u16, byte: u8) -> u16 {
    let tmp = CRC_TABLE[(crc & 0xF) as usize];
    let crc = ((crc >> 4) & 0x0FFF) ^ tmp ^ CRC_TABLE[(byte & 0xF) as usize];
    let tmp = CRC_TABLE[(crc & 0xF) as usize];
    ((crc >> 4) & 0x0FFF) ^ tmp ^ CRC_TABLE[((byte >> 4) & 0xF) as usize]
}

fn crc(bytes: &[u8]) -> u16 {
    bytes.iter().fold(0, |crc, b| crc_byte(crc, *b))
}

const SPORT_MESG: u16 = 12;
const RECORD_MESG: u16 = 20;

const BASE_ENUM: u8 = 0x00;
const BASE_SINT32: u8 = 0x85;

/// Minimal FIT writer: one optional sport message followed by position records.
#[derive(Default)]
pub struct FitBuilder {
    data: Vec<u8>,
}

impl FitBuilder {
    pub fn new() -> Self {
        FitBuilder::default()
    }

    fn definition(&mut self, local: u8, global: u16, fields: &[(u8, u8, u8)]) {
        self.data.push(0x40 | local);
        self.data.push(0); // reserved
        self.data.push(0); // little endian
        self.data.extend_from_slice(&global.to_le_bytes());
        self.data.push(fields.len() as u8);
        for (number, size, base) in fields {
            self.data.extend_from_slice(&[*number, *size, *base]);
        }
    }

    /// `sport` is the raw enum value: 1 running, 2 cycling.
    pub fn sport(mut self, sport: u8) -> Self {
        self.definition(0, SPORT_MESG, &[(0, 1, BASE_ENUM)]);
        self.data.push(0);
        self.data.push(sport);
        self
    }

    /// Records with both axes present, in raw semicircles.
    pub fn records(mut self, positions: &[(i32, i32)]) -> Self {
        self.definition(
            1,
            RECORD_MESG,
            &[(0, 4, BASE_SINT32), (1, 4, BASE_SINT32)],
        );
        for (lat, lon) in positions {
            self.data.push(1);
            self.data.extend_from_slice(&lat.to_le_bytes());
            self.data.extend_from_slice(&lon.to_le_bytes());
        }
        self
    }

    /// Records carrying only a latitude.
    pub fn latitude_only_records(mut self, latitudes: &[i32]) -> Self {
        self.definition(2, RECORD_MESG, &[(0, 4, BASE_SINT32)]);
        for lat in latitudes {
            self.data.push(2);
            self.data.extend_from_slice(&lat.to_le_bytes());
        }
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut file = Vec::with_capacity(self.data.len() + 16);
        file.push(14);
        file.push(0x10);
        file.extend_from_slice(&2093u16.to_le_bytes());
        file.extend_from_slice(&(self.data.len() as u32).to_le_bytes());
        file.extend_from_slice(b".FIT");
        let header_crc = crc(&file);
        file.extend_from_slice(&header_crc.to_le_bytes());
        file.extend_from_slice(&self.data);
        let file_crc = crc(&file);
        file.extend_from_slice(&file_crc.to_le_bytes());
        file
    }
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

pub fn degrees_to_semicircles(degrees: f64) -> i32 {
    (degrees * 11_930_464.71).round() as i32
}

pub fn gpx_track(kind: Option<&str>, segments: &[&[(f64, f64)]]) -> String {
    let kind = kind
        .map(|k| format!("<type>{}</type>", k))
        .unwrap_or_default();
    let segments: String = segments
        .iter()
        .map(|points| {
            let points: String = points
                .iter()
                .map(|(lat, lon)| format!(r#"<trkpt lat="{}" lon="{}"></trkpt>"#, lat, lon))
                .collect();
            format!("<trkseg>{}</trkseg>", points)
        })
        .collect();
    format!("<trk>{}{}</trk>", kind, segments)
}

pub fn gpx_document(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="runtrack-tests" xmlns="http://www.topografix.com/GPX/1/1">
{}
</gpx>"#,
        body
    )
}
