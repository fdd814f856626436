// Published and hand-checked encodings that must never change.

use polyline_codec::{Codec, DEFAULT_CODEC, PRECISION_6, XYZ_PRECISION_5};

#[derive(Debug)]
struct Vector {
    name: &'static str,
    codec: Codec,
    coords: &'static [&'static [f64]],
    encoded: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        name: "google_walkthrough",
        codec: DEFAULT_CODEC,
        coords: &[&[38.5, -120.2], &[40.7, -120.95], &[43.252, -126.453]],
        encoded: "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
    },
    Vector {
        name: "google_walkthrough_two_points",
        codec: DEFAULT_CODEC,
        coords: &[&[38.5, -120.2], &[40.7, -120.95]],
        encoded: "_p~iF~ps|U_ulLnnqC",
    },
    Vector {
        name: "polyline6",
        codec: PRECISION_6,
        coords: &[&[38.5, -120.2], &[40.7, -120.95], &[43.252, -126.453]],
        encoded: "_izlhA~rlgdF_{geC~ywl@_kwzCn`{nI",
    },
    Vector {
        name: "three_dimensions",
        codec: XYZ_PRECISION_5,
        coords: &[&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5]],
        encoded: "_ibE_seK_}hQ_t`B_t`B_t`B",
    },
    Vector {
        name: "origin_repeated",
        codec: DEFAULT_CODEC,
        coords: &[&[0.0, 0.0], &[0.0, 0.0], &[0.0, 0.0]],
        encoded: "??????",
    },
];

fn assert_close(got: &[Vec<f64>], want: &[&[f64]], tolerance: f64, name: &str) {
    assert_eq!(got.len(), want.len(), "{name}: coordinate count");
    for (g, w) in got.iter().zip(want) {
        assert_eq!(g.len(), w.len(), "{name}: dimension");
        for (a, b) in g.iter().zip(w.iter()) {
            assert!((a - b).abs() <= tolerance, "{name}: {a} vs {b}");
        }
    }
}

#[test]
fn encode_matches_vectors() {
    for v in VECTORS {
        let mut buf = Vec::new();
        v.codec.encode_coords(&mut buf, v.coords);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            v.encoded,
            "encoding mismatch for {}",
            v.name
        );
    }
}

#[test]
fn decode_matches_vectors() {
    for v in VECTORS {
        let (coords, rest) = v.codec.decode_coords(v.encoded.as_bytes()).unwrap();
        assert!(rest.is_empty(), "{}: leftover bytes", v.name);
        assert_close(&coords, v.coords, 0.5 / v.codec.scale(), v.name);
    }
}

#[test]
fn flat_codec_matches_vectors() {
    for v in VECTORS {
        let flat: Vec<f64> = v.coords.iter().flat_map(|c| c.iter().copied()).collect();
        let mut buf = Vec::new();
        v.codec.encode_flat_coords(&mut buf, &flat).unwrap();
        assert_eq!(buf, v.encoded.as_bytes(), "flat encoding mismatch for {}", v.name);

        let mut dest = Vec::new();
        v.codec.decode_flat_coords(&mut dest, &buf).unwrap();
        assert_eq!(dest.len(), flat.len(), "{}", v.name);
        for (a, b) in dest.iter().zip(&flat) {
            assert!((a - b).abs() <= 0.5 / v.codec.scale(), "{}: {a} vs {b}", v.name);
        }
    }
}
