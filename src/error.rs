/// Erreur de la frontière hôte : contrat d'appel violé.
///
/// Le noyau de conversion lui-même n'a aucun chemin d'erreur ; seule la
/// validation d'entrée de [`crate::convert`] peut échouer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("input length {length} exceeds chunk capacity {capacity}")]
    LengthExceedsCapacity { length: usize, capacity: usize },
}
