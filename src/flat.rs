// Flat-array variant of the sequence codec.
//
// Same wire format as `coords`, but coordinates live in one `[f64]` laid out
// coordinate after coordinate (`x0, y0, x1, y1, ...`). Decoding appends to a
// caller-supplied buffer so repeated decodes can share one allocation.

use crate::config::Codec;
use crate::error::{PolylineError, Result};
use crate::varint;

impl Codec {
    /// Append the delta encoding of a flat coordinate buffer to `buf`.
    ///
    /// Fails with `DimensionalMismatch`, leaving `buf` untouched, if
    /// `flat.len()` is not a multiple of the codec dimension.
    pub fn encode_flat_coords(&self, buf: &mut Vec<u8>, flat: &[f64]) -> Result<()> {
        self.check_flat_len(flat.len())?;
        let start = buf.len();
        buf.reserve(flat.len());
        let mut last = vec![0i64; self.dim()];
        for coord in flat.chunks_exact(self.dim()) {
            for (prev, &x) in last.iter_mut().zip(coord) {
                let v = self.quantize(x);
                varint::encode_int(buf, v.wrapping_sub(*prev));
                *prev = v;
            }
        }
        log::trace!(
            "encoded {} flat coordinates into {} bytes",
            flat.len() / self.dim(),
            buf.len() - start
        );
        Ok(())
    }

    /// Decode every coordinate in `data`, appending components to `dest`.
    ///
    /// `dest` may already hold coordinates; its length must be a multiple of
    /// the codec dimension. Deltas restart from zero regardless of what
    /// `dest` holds. An empty `data` is not an error. On failure `dest` is
    /// restored to its original length.
    pub fn decode_flat_coords<'a>(&self, dest: &mut Vec<f64>, data: &'a [u8]) -> Result<&'a [u8]> {
        self.check_flat_len(dest.len())?;
        let start = dest.len();
        match self.decode_flat_into(dest, data) {
            Ok(rest) => {
                log::trace!(
                    "decoded {} flat coordinates",
                    (dest.len() - start) / self.dim()
                );
                Ok(rest)
            }
            Err(e) => {
                dest.truncate(start);
                Err(e)
            }
        }
    }

    fn decode_flat_into<'a>(&self, dest: &mut Vec<f64>, mut data: &'a [u8]) -> Result<&'a [u8]> {
        let mut last = vec![0i64; self.dim()];
        while !data.is_empty() {
            for prev in last.iter_mut() {
                let (delta, rest) = varint::decode_int(data)?;
                *prev = prev.wrapping_add(delta);
                dest.push(self.dequantize(*prev));
                data = rest;
            }
        }
        Ok(data)
    }

    fn check_flat_len(&self, len: usize) -> Result<()> {
        if !len.is_multiple_of(self.dim()) {
            return Err(PolylineError::DimensionalMismatch {
                len,
                dim: self.dim(),
            });
        }
        Ok(())
    }
}
