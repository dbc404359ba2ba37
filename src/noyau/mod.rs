//! Noyau calculatrice (saisie immédiate)
//!
//! Organisation interne :
//! - operateur.rs : + − × ÷ et combiner()
//! - affichage.rs : nombre OU erreur, texte final, arrondi 15 chiffres, bornage Pokédex
//! - machine.rs   : EtatCalc immuable + transitions (chiffre, opérateur, égal, effacer)

pub mod affichage;
pub mod machine;
pub mod operateur;

#[cfg(test)]
mod tests_machine;

// API publique minimale
pub use machine::{Effet, EtatCalc, Transition};
pub use operateur::Operateur;
