//! Pilote de flux côté hôte : conversion de tampons 16 bits de longueur
//! arbitraire à travers l'arène fixe.
//!
//! L'entrée est découpée en tranches de [`CHUNK_SIZE`] octets, chacune
//! copiée dans l'arène puis convertie. Contrairement au point d'entrée
//! brut [`crate::convert`], le pilote referme l'écart de queue du noyau
//! vectoriel avec une passe scalaire sur le reste : la sortie est toujours
//! complète et identique quel que soit le noyau compilé.

use crate::arena::{ChunkArena, CHUNK_SIZE};
use crate::dsp;

/// Convertit un tampon d'échantillons 16 bits en leurs octets forts.
///
/// La sortie contient exactement `samples.len()` octets :
/// `out[i] == (samples[i] >> 8) as u8` sur hôte little-endian.
pub fn convert_16bit_to_8bit(arena: &mut ChunkArena, samples: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len());
    convert_16bit_to_8bit_into(arena, samples, &mut out);
    out
}

/// Variante qui pousse la sortie en fin d'un `Vec` existant.
pub fn convert_16bit_to_8bit_into(arena: &mut ChunkArena, samples: &[u16], out: &mut Vec<u8>) {
    let bytes: &[u8] = bytemuck::cast_slice(samples);
    out.reserve(samples.len());

    for slice in bytes.chunks(CHUNK_SIZE) {
        arena.input_mut()[..slice.len()].copy_from_slice(slice);
        let (chunk, target) = arena.split();

        #[cfg(not(feature = "simd"))]
        let written = dsp::high_bytes_scalar(&chunk[..slice.len()], target);
        #[cfg(feature = "simd")]
        let written = {
            let done = dsp::high_bytes_simd(&chunk[..slice.len()], target);
            // Reste scalaire sur la queue de bloc
            done + dsp::high_bytes_scalar(&chunk[done * 2..slice.len()], &mut target[done..])
        };

        tracing::trace!(slice_len = slice.len(), written, "tranche convertie");
        out.extend_from_slice(&target[..written]);
    }
}
