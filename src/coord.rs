// Single-coordinate codec: `dim` consecutive signed varints, absolute values.

use crate::config::Codec;
use crate::error::Result;
use crate::varint;

impl Codec {
    /// Append the encoding of one coordinate to `buf`.
    ///
    /// Every component is written; the length of `coord` is not checked
    /// against the codec dimension.
    pub fn encode_coord(&self, buf: &mut Vec<u8>, coord: &[f64]) {
        buf.reserve(coord.len());
        for &x in coord {
            varint::encode_int(buf, self.quantize(x));
        }
    }

    /// Decode one coordinate from the front of `data`.
    ///
    /// Returns the coordinate and the unconsumed remainder of `data`.
    pub fn decode_coord<'a>(&self, mut data: &'a [u8]) -> Result<(Vec<f64>, &'a [u8])> {
        let mut coord = Vec::with_capacity(self.dim());
        for _ in 0..self.dim() {
            let (v, rest) = varint::decode_int(data)?;
            coord.push(self.dequantize(v));
            data = rest;
        }
        Ok((coord, data))
    }
}
