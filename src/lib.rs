//! polyline-codec: the Encoded Polyline Algorithm in Rust.
//!
//! Coordinate sequences are scaled, rounded to integers, delta-coded against
//! the previous coordinate, zigzag-mapped and written as base-32 varints in
//! printable ASCII.
//!
//! The crate provides:
//! - The scalar varint codec (`varint`)
//! - Codec profiles: dimension and scale (`config`)
//! - Coordinate, sequence and flat-array codecs as methods on [`Codec`]
//! - Free functions using [`DEFAULT_CODEC`] (2 dimensions, scale 1e5)
//!
//! Encoders append to a caller-owned `Vec<u8>`, so buffers can be reserved
//! up front and reused. Decoders borrow their input and hand back the
//! unconsumed remainder as a sub-slice.
//!
//! # Quick Start
//!
//! ```
//! let line = [[38.5, -120.2], [40.7, -120.95], [43.252, -126.453]];
//! let encoded = polyline_codec::encode_coords(&line);
//! assert_eq!(encoded, b"_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//!
//! let (decoded, rest) = polyline_codec::decode_coords(&encoded).unwrap();
//! assert_eq!(decoded.len(), 3);
//! assert!(rest.is_empty());
//! ```
//!
//! Other precisions and dimensions use their own [`Codec`]:
//!
//! ```
//! use polyline_codec::Codec;
//!
//! let codec = Codec::with_precision(2, 6).unwrap();
//! let mut buf = Vec::with_capacity(64);
//! codec.encode_coords(&mut buf, &[[38.5, -120.2]]);
//! assert_eq!(buf, b"_izlhA~rlgdF");
//! ```

pub mod config;
pub mod error;
pub mod varint;

mod coord;
mod coords;
mod flat;

pub use config::{Codec, DEFAULT_CODEC, PRECISION_5, PRECISION_6, XYZ_PRECISION_5};
pub use error::{PolylineError, Result};
pub use varint::{decode_int, decode_uint, encode_int, encode_uint};

// ---------------------------------------------------------------------------
// Default-codec entry points
// ---------------------------------------------------------------------------

/// Encode one coordinate with the default codec.
pub fn encode_coord(coord: &[f64]) -> Vec<u8> {
    let mut buf = Vec::new();
    DEFAULT_CODEC.encode_coord(&mut buf, coord);
    buf
}

/// Decode one coordinate with the default codec.
pub fn decode_coord(data: &[u8]) -> Result<(Vec<f64>, &[u8])> {
    DEFAULT_CODEC.decode_coord(data)
}

/// Encode a coordinate sequence with the default codec.
pub fn encode_coords<C: AsRef<[f64]>>(coords: &[C]) -> Vec<u8> {
    let mut buf = Vec::new();
    DEFAULT_CODEC.encode_coords(&mut buf, coords);
    buf
}

/// Decode a coordinate sequence with the default codec.
pub fn decode_coords(data: &[u8]) -> Result<(Vec<Vec<f64>>, &[u8])> {
    DEFAULT_CODEC.decode_coords(data)
}

/// Encode a flat coordinate buffer with the default codec.
pub fn encode_flat_coords(flat: &[f64]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    DEFAULT_CODEC.encode_flat_coords(&mut buf, flat)?;
    Ok(buf)
}

/// Decode into a flat coordinate buffer with the default codec.
pub fn decode_flat_coords<'a>(dest: &mut Vec<f64>, data: &'a [u8]) -> Result<&'a [u8]> {
    DEFAULT_CODEC.decode_flat_coords(dest, data)
}
