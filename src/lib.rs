#![cfg_attr(feature = "simd", feature(portable_simd))]
#![doc = r#"
PMOPcm8 - Conversion PCM 16 bits → 8 bits sur arènes mémoire fixes

Cette crate convertit des échantillons 16 bits little-endian interleavés en
échantillons 8 bits en ne gardant que l'octet fort de chaque mot. Elle est
pensée pour un environnement d'exécution à mémoire linéaire : l'hôte écrit
ses octets directement dans une région d'entrée fixe, appelle un unique
point d'entrée de conversion, puis relit le résultat dans une région de
sortie fixe — zéro allocation, zéro copie intermédiaire.

# Architecture

```text
hôte ──écrit──▶ ChunkArena.chunk ──convert()──▶ ChunkArena.target ──lit──▶ hôte
```

- [`ChunkArena`] : les deux tampons fixes alignés sur 16 octets, avec
  adresses stables interrogeables par l'hôte.
- [`convert`] : le point d'entrée, noyau scalaire par défaut ou noyau
  vectoriel 128 bits avec la feature `simd` (choix à la compilation,
  mutuellement exclusifs).
- [`conversions`] : pilote de flux pour des tampons plus longs que l'arène,
  avec rattrapage scalaire de la queue de bloc en build SIMD.

# Exemple

```
use pmopcm8::{convert_16bit_to_8bit, ChunkArena};

let mut arena = ChunkArena::new();
let out = convert_16bit_to_8bit(&mut arena, &[0x1122, 0x3344]);
assert_eq!(out, vec![0x11, 0x33]);
```

# Modèle de concurrence

Synchrone, non réentrant : les deux tampons sont un état mutable partagé
sans verrou, et l'emprunt exclusif `&mut ChunkArena` fait respecter par le
compilateur la règle « une seule conversion en vol à la fois ».
"#]

mod arena;
mod converter;
mod error;

pub mod conversions;
pub mod dsp;

pub use arena::{ChunkArena, CHUNK_SIZE, TARGET_SIZE};
pub use converter::convert;
pub use conversions::{convert_16bit_to_8bit, convert_16bit_to_8bit_into};
pub use error::ConvertError;
