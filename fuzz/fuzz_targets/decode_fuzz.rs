#![no_main]
use libfuzzer_sys::fuzz_target;
use polyline_codec::{Codec, DEFAULT_CODEC, XYZ_PRECISION_5, decode_uint};

fuzz_target!(|data: &[u8]| {
    // The decoders must never panic, only return errors.
    let _ = decode_uint(data);
    let _ = DEFAULT_CODEC.decode_coords(data);
    let _ = XYZ_PRECISION_5.decode_coord(data);

    let mut dest = Vec::new();
    if DEFAULT_CODEC.decode_flat_coords(&mut dest, data).is_err() {
        assert!(dest.is_empty());
    }

    // Let the first byte pick an odd dimension.
    if let Some((&first, rest)) = data.split_first() {
        let dim = usize::from(first % 7) + 1;
        if let Ok(codec) = Codec::new(dim, 1e6) {
            let _ = codec.decode_coords(rest);
        }
    }
});
