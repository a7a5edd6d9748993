//! Arène mémoire fixe partagée entre l'hôte et le convertisseur.
//!
//! Deux tampons statiquement dimensionnés et alignés sur 16 octets :
//! `chunk` (entrée, [`CHUNK_SIZE`] octets) et `target` (sortie,
//! [`TARGET_SIZE`] octets). L'hôte écrit des octets bruts dans `chunk`,
//! appelle [`crate::convert`], puis relit `target` borné par la longueur
//! retournée. Aucune allocation sur le chemin chaud : les deux tampons
//! vivent aussi longtemps que l'arène et sont réutilisés à chaque appel.

/// Capacité du tampon d'entrée en octets (constante de compilation).
pub const CHUNK_SIZE: usize = 16384;

/// Capacité du tampon de sortie en octets (une sortie par mot d'entrée).
pub const TARGET_SIZE: usize = CHUNK_SIZE / 2;

/// Les deux tampons d'échange, possédés par le processus.
///
/// `repr(C)` garantit une disposition plate et sans padding interne autre
/// que l'alignement de fin ; `align(16)` garantit que `chunk` comme
/// `target` commencent sur une frontière de 16 octets (`CHUNK_SIZE` est un
/// multiple de 16).
///
/// L'exclusivité `&mut` interdit toute conversion réentrante : une seule
/// conversion peut être en vol à la fois, sans verrou.
#[repr(C, align(16))]
pub struct ChunkArena {
    chunk: [u8; CHUNK_SIZE],
    target: [u8; TARGET_SIZE],
}

impl ChunkArena {
    /// Crée une arène remise à zéro. `const` pour pouvoir l'installer
    /// dans un `static` côté glue hôte.
    pub const fn new() -> Self {
        Self {
            chunk: [0; CHUNK_SIZE],
            target: [0; TARGET_SIZE],
        }
    }

    /// Adresse de début du tampon d'entrée.
    ///
    /// Stable tant que l'arène n'est pas déplacée, identique à chaque
    /// appel. Accesseur pur, sans effet de bord.
    #[inline(always)]
    pub fn input_address(&self) -> *const u8 {
        self.chunk.as_ptr()
    }

    /// Adresse de début du tampon de sortie. Mêmes garanties que
    /// [`input_address`](Self::input_address).
    #[inline(always)]
    pub fn output_address(&self) -> *const u8 {
        self.target.as_ptr()
    }

    /// Vue mutable sur le tampon d'entrée, pour la glue hôte sûre.
    #[inline(always)]
    pub fn input_mut(&mut self) -> &mut [u8] {
        &mut self.chunk
    }

    /// Vue en lecture sur le tampon de sortie. L'hôte ne doit lire que
    /// les `written` premiers octets retournés par la dernière conversion ;
    /// au-delà, le contenu peut être périmé.
    #[inline(always)]
    pub fn output(&self) -> &[u8] {
        &self.target
    }

    /// Emprunts disjoints entrée/sortie pour les noyaux de conversion.
    #[inline(always)]
    pub(crate) fn split(&mut self) -> (&[u8], &mut [u8]) {
        (&self.chunk, &mut self.target)
    }
}

impl Default for ChunkArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffers_are_16_byte_aligned() {
        let arena = ChunkArena::new();
        assert_eq!(arena.input_address() as usize % 16, 0);
        assert_eq!(arena.output_address() as usize % 16, 0);
    }

    #[test]
    fn test_addresses_are_stable() {
        let mut arena = ChunkArena::new();
        let input = arena.input_address();
        let output = arena.output_address();

        arena.input_mut()[0] = 0xFF;

        assert_eq!(arena.input_address(), input);
        assert_eq!(arena.output_address(), output);
    }

    #[test]
    fn test_capacities() {
        let mut arena = ChunkArena::new();
        assert_eq!(arena.input_mut().len(), CHUNK_SIZE);
        assert_eq!(arena.output().len(), CHUNK_SIZE / 2);
    }
}
