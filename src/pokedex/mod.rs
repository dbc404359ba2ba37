//! Pokédex : recherche asynchrone d’une fiche par numéro
//!
//! Organisation interne :
//! - fiche.rs     : Fiche (nom + sprite) + forme JSON PokéAPI
//! - erreur.rs    : erreurs catalogue / démarrage + messages affichés
//! - client.rs    : trait Catalogue + client reqwest (natif + wasm)
//! - recherche.rs : statut du panneau + jeton anti-réponse périmée

pub mod client;
pub mod erreur;
pub mod fiche;
pub mod recherche;


pub use client::ClientPokeApi;
pub use erreur::ErreurDemarrage;
pub use recherche::{Recherche, Statut};
