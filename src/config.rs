//! src/config.rs
//!
//! Constantes de build (aucune surcharge à l’exécution).

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculatrice Pokédex";

/// Dernier numéro valide du Pokédex national.
pub const LIMITE_POKEDEX: u32 = 1025;

/// Endpoint PokéAPI : `{URL_CATALOGUE}/{id}`.
pub const URL_CATALOGUE: &str = "https://pokeapi.co/api/v2/pokemon";

/// Arrondi d’affichage (convention double précision).
pub const CHIFFRES_SIGNIFICATIFS: usize = 15;

/// Filtre de logs par défaut (natif) si RUST_LOG est absent.
pub const FILTRE_LOGS: &str = "calculatrice_pokedex=info";

pub const TAILLE_FENETRE: [f32; 2] = [380.0, 640.0];
pub const TAILLE_FENETRE_MIN: [f32; 2] = [320.0, 560.0];

/// Réglages passés au noyau et à la recherche.
///
/// Construits depuis les constantes ; les tests peuvent en fabriquer d’autres.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub limite: u32,
    pub url_catalogue: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            limite: LIMITE_POKEDEX,
            url_catalogue: URL_CATALOGUE.to_string(),
        }
    }
}
