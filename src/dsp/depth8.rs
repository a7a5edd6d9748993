//! Noyaux d'extraction de l'octet fort : 16 bits little-endian → 8 bits.
//!
//! Les deux noyaux supposent un hôte little-endian (wasm32, x86_64,
//! aarch64) : l'octet fort d'un mot est à l'offset impair en mémoire.

#[cfg(feature = "simd")]
use std::simd::{simd_swizzle, Simd};

/// Taille d'un bloc vectoriel : 16 échantillons, 32 octets d'entrée.
pub const BLOCK_BYTES: usize = 32;

/// Noyau scalaire de référence.
///
/// Pour chaque échantillon `i` de `[0, src.len()/2)`, copie `src[2*i + 1]`
/// vers `dst[i]`, en ordre d'index strictement croissant. Un octet final
/// orphelin (longueur impaire) est ignoré : il n'a pas d'octet fort.
///
/// Retourne le nombre d'octets écrits, soit `src.len() / 2`.
pub fn high_bytes_scalar(src: &[u8], dst: &mut [u8]) -> usize {
    let samples = src.len() / 2;
    for (i, out) in dst[..samples].iter_mut().enumerate() {
        *out = src[2 * i + 1];
    }
    samples
}

/// Noyau vectoriel : 16 échantillons par itération.
///
/// Par bloc de 32 octets : deux vecteurs de huit lanes 16 bits, décalage
/// logique de 8 bits à droite pour isoler l'octet fort dans le bas de
/// chaque lane, puis paquetage des deux moitiés en un seul vecteur de
/// 16 octets stocké d'un coup.
///
/// Retourne `16 * (src.len() / 32)`. La queue de bloc (`src.len() % 32`,
/// jusqu'à 15 échantillons) n'est PAS convertie : les octets de sortie
/// correspondants restent inchangés. [`crate::conversions`] referme cet
/// écart avec une passe scalaire sur le reste.
#[cfg(feature = "simd")]
pub fn high_bytes_simd(src: &[u8], dst: &mut [u8]) -> usize {
    const LANES: usize = 8;
    let blocks = src.len() / BLOCK_BYTES;
    let shift = Simd::<u16, LANES>::splat(8);

    for b in 0..blocks {
        let base = b * BLOCK_BYTES;
        let w0: [u16; LANES] = bytemuck::pod_read_unaligned(&src[base..base + 16]);
        let w1: [u16; LANES] = bytemuck::pod_read_unaligned(&src[base + 16..base + 32]);

        let v0 = Simd::from_array(w0) >> shift;
        let v1 = Simd::from_array(w1) >> shift;

        // Chaque lane vaut au plus 255 : le cast tronquant équivaut à un
        // paquetage saturant non signé.
        let p0: Simd<u8, LANES> = v0.cast();
        let p1: Simd<u8, LANES> = v1.cast();
        let pack: Simd<u8, 16> =
            simd_swizzle!(p0, p1, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);

        pack.copy_to_slice(&mut dst[b * 16..b * 16 + 16]);
    }

    blocks * 16
}
