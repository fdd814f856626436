use polyline_codec::{Codec, DEFAULT_CODEC};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let line = [[38.5, -120.2], [40.7, -120.95], [43.252, -126.453]];

    let encoded = DEFAULT_CODEC.encode_coords_to_string(&line);
    let decoded = DEFAULT_CODEC.decode_coords_str(&encoded)?;
    println!("{} points -> {encoded:?} -> {decoded:?}", line.len());

    // Same line at six decimal places, through a reusable flat buffer.
    let codec = Codec::with_precision(2, 6)?;
    let flat: Vec<f64> = line.iter().flatten().copied().collect();
    let mut buf = Vec::with_capacity(64);
    codec.encode_flat_coords(&mut buf, &flat)?;

    let mut restored = Vec::with_capacity(flat.len());
    codec.decode_flat_coords(&mut restored, &buf)?;
    println!(
        "precision 6: {} bytes -> {} components",
        buf.len(),
        restored.len()
    );

    Ok(())
}
