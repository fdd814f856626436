// Coordinate sequence codec.
//
// The first coordinate is written as absolute values; every later one as the
// per-dimension difference from its predecessor. Deltas are taken between the
// rounded integers, so rounding error never accumulates along the line.
//
// Decoding needs at least one coordinate: an empty buffer is reported as
// `UnterminatedSequence`, unlike the flat decoder which accepts it.

use crate::config::Codec;
use crate::error::Result;
use crate::varint;

impl Codec {
    /// Append the delta encoding of `coords` to `buf`.
    ///
    /// Coordinates are expected to have `dim` components each; components
    /// past `dim` are ignored.
    pub fn encode_coords<C: AsRef<[f64]>>(&self, buf: &mut Vec<u8>, coords: &[C]) {
        let start = buf.len();
        let mut last = vec![0i64; self.dim()];
        for coord in coords {
            for (prev, &x) in last.iter_mut().zip(coord.as_ref()) {
                let v = self.quantize(x);
                varint::encode_int(buf, v.wrapping_sub(*prev));
                *prev = v;
            }
        }
        log::trace!(
            "encoded {} coordinates into {} bytes",
            coords.len(),
            buf.len() - start
        );
    }

    /// Decode a coordinate sequence occupying the whole of `data`.
    ///
    /// Returns the coordinates and the (empty) remainder. The first error
    /// aborts the decode and discards everything decoded so far.
    pub fn decode_coords<'a>(&self, mut data: &'a [u8]) -> Result<(Vec<Vec<f64>>, &'a [u8])> {
        let mut coords = Vec::new();
        let mut last = vec![0i64; self.dim()];
        loop {
            let mut coord = Vec::with_capacity(self.dim());
            for prev in last.iter_mut() {
                let (delta, rest) = varint::decode_int(data)?;
                *prev = prev.wrapping_add(delta);
                coord.push(self.dequantize(*prev));
                data = rest;
            }
            coords.push(coord);
            if data.is_empty() {
                break;
            }
        }
        log::trace!("decoded {} coordinates", coords.len());
        Ok((coords, data))
    }

    /// Encode `coords` as a polyline string.
    pub fn encode_coords_to_string<C: AsRef<[f64]>>(&self, coords: &[C]) -> String {
        let mut buf = Vec::new();
        self.encode_coords(&mut buf, coords);
        // Every byte is in [63, 127), so the buffer is ASCII.
        buf.into_iter().map(char::from).collect()
    }

    /// Decode a polyline string.
    pub fn decode_coords_str(&self, polyline: &str) -> Result<Vec<Vec<f64>>> {
        let (coords, _) = self.decode_coords(polyline.as_bytes())?;
        Ok(coords)
    }
}
