//! Démo minimale : reproduit le flux hôte complet sur 16 échantillons.
//!
//! ```bash
//! cargo run --example downconvert_demo
//! cargo +nightly run --example downconvert_demo --features simd
//! ```

use pmopcm8::{convert_16bit_to_8bit, ChunkArena};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let samples: Vec<u16> = [0x1122u16, 0x3344, 0x5566, 0x7788].repeat(4);

    let mut arena = ChunkArena::new();
    println!("input  region: {:p}", arena.input_address());
    println!("output region: {:p}", arena.output_address());

    let out = convert_16bit_to_8bit(&mut arena, &samples);
    println!("{out:02x?}");
}
