// Codec profiles.
//
// A `Codec` is a plain value: dimension and scale. Custom settings are new
// values, never mutations of a shared one.

use crate::error::{PolylineError, Result};

/// Highest precision `Codec::with_precision` accepts. 10^15 keeps every
/// degree value below 2^63 after scaling.
pub const MAX_PRECISION: u32 = 15;

/// Codec configuration.
///
/// `dim` is the number of components per coordinate and `scale` the factor
/// applied before rounding each component to an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Codec {
    dim: usize,
    scale: f64,
}

// ---------------------------------------------------------------------------
// Profile definitions
// ---------------------------------------------------------------------------

/// Latitude/longitude at five decimal places (Google Maps).
pub const PRECISION_5: Codec = Codec {
    dim: 2,
    scale: 1e5,
};

/// Latitude/longitude at six decimal places ("polyline6", OSRM and Valhalla).
pub const PRECISION_6: Codec = Codec {
    dim: 2,
    scale: 1e6,
};

/// Latitude/longitude/elevation at five decimal places.
pub const XYZ_PRECISION_5: Codec = Codec {
    dim: 3,
    scale: 1e5,
};

/// The codec used by the crate-level convenience functions.
pub const DEFAULT_CODEC: Codec = PRECISION_5;

impl Default for Codec {
    fn default() -> Self {
        DEFAULT_CODEC
    }
}

impl Codec {
    /// Create a codec with `dim` components per coordinate and the given
    /// `scale`.
    ///
    /// Fails with `InvalidCodec` if `dim` is zero or `scale` is not a
    /// positive finite number.
    pub fn new(dim: usize, scale: f64) -> Result<Self> {
        if dim == 0 {
            log::debug!("rejecting codec with zero dimension");
            return Err(PolylineError::InvalidCodec("dimension must be positive"));
        }
        if !(scale.is_finite() && scale > 0.0) {
            log::debug!("rejecting codec with scale {scale}");
            return Err(PolylineError::InvalidCodec(
                "scale must be positive and finite",
            ));
        }
        Ok(Self { dim, scale })
    }

    /// Create a codec retaining `digits` decimal places (`scale = 10^digits`).
    ///
    /// - 5: Google Maps
    /// - 6: OSRM, Valhalla
    pub fn with_precision(dim: usize, digits: u32) -> Result<Self> {
        if digits > MAX_PRECISION {
            log::debug!("rejecting codec precision {digits}");
            return Err(PolylineError::InvalidCodec("precision must be at most 15"));
        }
        Self::new(dim, 10f64.powi(digits as i32))
    }

    /// Components per coordinate.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Scale factor applied before rounding.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scale and round one component to the integer carried on the wire.
    #[inline]
    pub(crate) fn quantize(&self, x: f64) -> i64 {
        crate::varint::round(self.scale * x)
    }

    /// Inverse of `quantize`, up to rounding.
    #[inline]
    pub(crate) fn dequantize(&self, v: i64) -> f64 {
        v as f64 / self.scale
    }
}
