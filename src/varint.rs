// Polyline variable-length integer encoding.
//
// Base-32, little-endian: least-significant 5-bit group first.
// Every byte lands in the printable range [63, 127):
//   continuation bytes carry `group + 95` and lie in [95, 127),
//   the final byte carries `group + 63` and lies in [63, 95).
// Signed values are zigzag-mapped before encoding.

use crate::error::{PolylineError, Result};

/// Maximum encoded length for a 64-bit value (ceil(64/5) = 13).
pub const MAX_VARINT_LEN: usize = 13;

/// Offset of a terminal byte (`'?'` encodes a final group of zero).
const TERMINAL_BASE: u8 = 63;

/// Offset of a continuation byte (`'_'` encodes a continued group of zero).
const CONTINUATION_BASE: u8 = 95;

/// One past the highest legal byte.
const END: u8 = 127;

const GROUP_BITS: u32 = 5;
const GROUP_MASK: u64 = 0x1F;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Append the encoding of an unsigned integer to `buf`.
#[inline]
pub fn encode_uint(buf: &mut Vec<u8>, mut num: u64) {
    while num > GROUP_MASK {
        buf.push((num & GROUP_MASK) as u8 + CONTINUATION_BASE);
        num >>= GROUP_BITS;
    }
    buf.push(num as u8 + TERMINAL_BASE);
}

/// Append the zigzag encoding of a signed integer to `buf`.
#[inline]
pub fn encode_int(buf: &mut Vec<u8>, num: i64) {
    encode_uint(buf, zigzag(num));
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode one unsigned integer from the front of `data`.
///
/// Returns the value and the unconsumed remainder of `data`. The scan always
/// runs to the terminal byte before an overflow is reported, so truncated
/// input reads as `UnterminatedSequence` no matter how long it is.
pub fn decode_uint(data: &[u8]) -> Result<(u64, &[u8])> {
    let mut val: u64 = 0;
    let mut shift: u32 = 0;
    let mut overflow = false;
    for (i, &byte) in data.iter().enumerate() {
        match byte {
            TERMINAL_BASE..CONTINUATION_BASE => {
                overflow |= !accumulate(&mut val, u64::from(byte - TERMINAL_BASE), shift);
                if overflow {
                    return Err(PolylineError::Overflow);
                }
                return Ok((val, &data[i + 1..]));
            }
            CONTINUATION_BASE..END => {
                overflow |= !accumulate(&mut val, u64::from(byte - CONTINUATION_BASE), shift);
                shift = shift.saturating_add(GROUP_BITS);
            }
            _ => return Err(PolylineError::InvalidByte(byte)),
        }
    }
    Err(PolylineError::UnterminatedSequence)
}

/// Decode one zigzag-encoded signed integer from the front of `data`.
pub fn decode_int(data: &[u8]) -> Result<(i64, &[u8])> {
    let (u, rest) = decode_uint(data)?;
    Ok((unzigzag(u), rest))
}

/// OR `group << shift` into `val`; false if any set bit falls past bit 63.
#[inline]
fn accumulate(val: &mut u64, group: u64, shift: u32) -> bool {
    if group == 0 {
        return true;
    }
    if shift >= u64::BITS {
        return false;
    }
    let shifted = group << shift;
    if shifted >> shift != group {
        return false;
    }
    *val |= shifted;
    true
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map signed to unsigned: `0, -1, 1, -2, 2, ...` to `0, 1, 2, 3, 4, ...`.
#[inline]
pub fn zigzag(num: i64) -> u64 {
    ((num << 1) ^ (num >> 63)) as u64
}

/// Inverse of [`zigzag`].
#[inline]
pub fn unzigzag(num: u64) -> i64 {
    if num & 1 == 0 {
        (num >> 1) as i64
    } else {
        // -((num + 1) >> 1) without overflowing at u64::MAX.
        !((num >> 1) as i64)
    }
}

/// Round to the nearest integer, ties away from zero.
///
/// Results outside the `i64` range saturate and NaN maps to zero.
#[inline]
pub fn round(x: f64) -> i64 {
    if x < 0.0 {
        -(-x + 0.5).floor() as i64
    } else {
        (x + 0.5).floor() as i64
    }
}

/// Return the encoded byte-length of an unsigned value (1..=13).
#[inline]
pub fn encoded_len_uint(num: u64) -> usize {
    let bits = u64::BITS - num.leading_zeros();
    bits.max(1).div_ceil(GROUP_BITS) as usize
}

/// Return the encoded byte-length of a signed value (1..=13).
#[inline]
pub fn encoded_len_int(num: i64) -> usize {
    encoded_len_uint(zigzag(num))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
