//! Module DSP pour la réduction de profondeur de bit optimisée (SIMD)
//!
//! # Sous-modules
//!
//! - [`depth8`] - Extraction de l'octet fort de chaque mot 16 bits (16 → 8 bits)
//!
//! # Optimisations
//!
//! Le noyau vectoriel traite 16 échantillons (32 octets) par itération avec
//! des registres 128 bits quand la feature "simd" est activée. Sans SIMD,
//! l'implémentation scalaire reste efficace grâce aux optimisations du
//! compilateur.

pub mod depth8;

pub use depth8::high_bytes_scalar;

#[cfg(feature = "simd")]
pub use depth8::high_bytes_simd;
