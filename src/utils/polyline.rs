//! Codec de polylines codificadas (precisión 5)
//!
//! Los servicios de ruteo devuelven la geometría como un string compacto de
//! deltas de coordenadas en zig-zag, en bloques de 5 bits desplazados en 63.

use thiserror::Error;

use crate::models::geo::Coordinate;
use crate::utils::errors::ClientError;

const PRECISION: f64 = 1e5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolylineError {
    #[error("invalid character {character:?} at byte {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("polyline ended in the middle of a value")]
    Truncated,

    #[error("value starting at byte {0} does not fit in 32 bits")]
    Overflow(usize),
}

impl From<PolylineError> for ClientError {
    fn from(err: PolylineError) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Decodificar una polyline de precisión 5 en puntos `(lat, lon)`.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::with_capacity(bytes.len() / 4);
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while index < bytes.len() {
        lat += next_value(bytes, &mut index)?;
        lon += next_value(bytes, &mut index)?;
        points.push(Coordinate::new(lat as f64 / PRECISION, lon as f64 / PRECISION));
    }

    Ok(points)
}

fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let start = *index;
    let mut result: i64 = 0;
    let mut shift = 0u32;

    loop {
        let byte = *bytes.get(*index).ok_or(PolylineError::Truncated)?;
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                character: byte as char,
                index: *index,
            });
        }
        *index += 1;

        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
        if shift > 30 {
            return Err(PolylineError::Overflow(start));
        }
    }

    Ok(if result & 1 != 0 { !(result >> 1) } else { result >> 1 })
}

/// Codificar puntos como polyline de precisión 5.
pub fn encode(points: &[Coordinate]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;

    for point in points {
        let lat = (point.lat * PRECISION).round() as i64;
        let lon = (point.lon * PRECISION).round() as i64;
        push_value(&mut out, lat - prev_lat);
        push_value(&mut out, lon - prev_lon);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

fn push_value(out: &mut String, delta: i64) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };
    while value >= 0x20 {
        out.push((((value & 0x1f) | 0x20) as u8 + 63) as char);
        value >>= 5;
    }
    out.push((value as u8 + 63) as char);
}
