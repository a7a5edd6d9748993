//! Point d'entrée de conversion exposé à l'hôte.

use crate::arena::{ChunkArena, CHUNK_SIZE};
use crate::dsp;
use crate::error::ConvertError;

/// Convertit les `length` premiers octets du tampon d'entrée en octets
/// forts dans le tampon de sortie, et retourne le nombre d'octets écrits.
///
/// Le noyau est choisi à la compilation : scalaire par défaut, vectoriel
/// avec la feature `simd` (exclusifs l'un de l'autre, aucun dispatch à
/// l'exécution). Les retours diffèrent :
///
/// - scalaire : `length / 2` ;
/// - vectoriel : `16 * (length / 32)` — la queue de bloc est abandonnée,
///   voir `dsp::depth8::high_bytes_simd`.
///
/// Synchrone, borné, sans allocation. L'emprunt `&mut` garantit qu'une
/// seule conversion est en vol à la fois.
///
/// # Erreurs
///
/// [`ConvertError::LengthExceedsCapacity`] si `length > CHUNK_SIZE`.
pub fn convert(arena: &mut ChunkArena, length: usize) -> Result<usize, ConvertError> {
    if length > CHUNK_SIZE {
        return Err(ConvertError::LengthExceedsCapacity {
            length,
            capacity: CHUNK_SIZE,
        });
    }

    let (chunk, target) = arena.split();

    #[cfg(not(feature = "simd"))]
    let written = dsp::high_bytes_scalar(&chunk[..length], target);
    #[cfg(feature = "simd")]
    let written = dsp::high_bytes_simd(&chunk[..length], target);

    tracing::trace!(length, written, "pcm16 → pcm8");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_above_capacity_is_rejected() {
        let mut arena = ChunkArena::new();
        let err = convert(&mut arena, CHUNK_SIZE + 1).unwrap_err();
        assert_eq!(
            err,
            ConvertError::LengthExceedsCapacity {
                length: CHUNK_SIZE + 1,
                capacity: CHUNK_SIZE
            }
        );
    }

    #[test]
    fn test_full_capacity_is_accepted() {
        let mut arena = ChunkArena::new();
        let written = convert(&mut arena, CHUNK_SIZE).unwrap();
        #[cfg(not(feature = "simd"))]
        assert_eq!(written, CHUNK_SIZE / 2);
        #[cfg(feature = "simd")]
        assert_eq!(written, 16 * (CHUNK_SIZE / 32));
    }

    #[test]
    fn test_zero_length() {
        let mut arena = ChunkArena::new();
        assert_eq!(convert(&mut arena, 0).unwrap(), 0);
    }

    #[test]
    fn test_idempotent_on_same_input() {
        let mut arena = ChunkArena::new();
        for (i, b) in arena.input_mut()[..64].iter_mut().enumerate() {
            *b = (i * 13 + 5) as u8;
        }

        let w1 = convert(&mut arena, 64).unwrap();
        let first: Vec<u8> = arena.output()[..w1].to_vec();

        let w2 = convert(&mut arena, 64).unwrap();

        assert_eq!(w1, w2);
        assert_eq!(&arena.output()[..w2], &first[..]);
    }

    #[cfg(not(feature = "simd"))]
    #[test]
    fn test_scalar_concrete_scenario() {
        let mut arena = ChunkArena::new();
        arena.input_mut()[..4].copy_from_slice(&[0x11, 0x22, 0x33, 0x44]);

        let written = convert(&mut arena, 4).unwrap();

        assert_eq!(written, 2);
        assert_eq!(&arena.output()[..2], &[0x22, 0x44]);
    }

    #[test]
    fn test_ff_pattern_full_block() {
        let mut arena = ChunkArena::new();
        arena.input_mut()[..32].copy_from_slice(&[0x00, 0xFF].repeat(16));

        // length = 32 : les deux noyaux retournent 16
        let written = convert(&mut arena, 32).unwrap();

        assert_eq!(written, 16);
        assert_eq!(&arena.output()[..16], &[0xFF; 16]);
    }

    #[cfg(feature = "simd")]
    #[test]
    fn test_simd_divergence_below_one_block() {
        let mut arena = ChunkArena::new();
        arena.input_mut()[..4].copy_from_slice(&[0x11, 0x22, 0x33, 0x44]);

        // 4 octets < 1 bloc : rien n'est converti
        assert_eq!(convert(&mut arena, 4).unwrap(), 0);
    }
}
