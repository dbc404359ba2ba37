// src/pokedex/erreur.rs

use thiserror::Error;

/// Message unique montré pour tout échec côté catalogue.
pub const MSG_INTROUVABLE: &str = "Pokémon introuvable !";

pub fn msg_hors_bornes(limite: u32) -> String {
    format!("Aucun Pokémon à ce numéro (1 à {limite}).")
}

/// Échecs d’une requête catalogue.
///
/// Le détail ne sert qu’aux logs : l’utilisateur voit toujours `MSG_INTROUVABLE`.
#[derive(Debug, Error)]
pub enum ErreurCatalogue {
    #[error("requête impossible: {0}")]
    Transport(String),

    #[error("statut HTTP {0}")]
    Statut(u16),

    #[error("réponse illisible: {0}")]
    Format(String),
}

impl From<reqwest::Error> for ErreurCatalogue {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ErreurCatalogue::Format(e.to_string())
        } else {
            ErreurCatalogue::Transport(e.to_string())
        }
    }
}

/// Échecs au lancement de l’application (avant la première frame).
#[derive(Debug, Error)]
pub enum ErreurDemarrage {
    #[error("client HTTP indisponible: {0}")]
    Http(#[from] reqwest::Error),

    #[error("runtime des requêtes indisponible: {0}")]
    Runtime(#[from] std::io::Error),
}
