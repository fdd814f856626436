#![no_main]
use libfuzzer_sys::fuzz_target;
use polyline_codec::{DEFAULT_CODEC, decode_int, encode_int};

fuzz_target!(|data: &[u8]| {
    // Every integer round-trips exactly.
    let ints: Vec<i64> = data
        .chunks_exact(8)
        .map(|c| i64::from_le_bytes(c.try_into().unwrap()))
        .collect();
    let mut buf = Vec::new();
    for &i in &ints {
        encode_int(&mut buf, i);
    }
    let mut rest = &buf[..];
    for &i in &ints {
        let (decoded, tail) = decode_int(rest).unwrap();
        assert_eq!(decoded, i);
        rest = tail;
    }
    assert!(rest.is_empty());

    // Nested and flat sequence encoders agree on finite input.
    let flat: Vec<f64> = ints
        .iter()
        .map(|&i| (i % 18_000_000) as f64 / 1e5)
        .collect();
    let even = &flat[..flat.len() / 2 * 2];
    let nested: Vec<[f64; 2]> = even.chunks_exact(2).map(|c| [c[0], c[1]]).collect();
    let mut a = Vec::new();
    DEFAULT_CODEC.encode_coords(&mut a, &nested);
    let mut b = Vec::new();
    DEFAULT_CODEC.encode_flat_coords(&mut b, even).unwrap();
    assert_eq!(a, b);
});
