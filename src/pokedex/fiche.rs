// src/pokedex/fiche.rs

use serde::Deserialize;

/// Ce qu’on garde d’une réponse PokéAPI : le nom et le sprite par défaut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fiche {
    pub id: u32,
    pub nom: String,
    pub image: String,
}

impl Fiche {
    /// Nom avec la première lettre en majuscule ("pikachu" -> "Pikachu").
    pub fn nom_affiche(&self) -> String {
        let mut lettres = self.nom.chars();
        match lettres.next() {
            Some(premiere) => premiere.to_uppercase().chain(lettres).collect(),
            None => String::new(),
        }
    }
}

/* ------------------------ Forme JSON (champs utiles seulement) ------------------------ */

#[derive(Deserialize)]
pub(crate) struct ReponsePokemon {
    name: String,
    sprites: Sprites,
}

#[derive(Deserialize)]
struct Sprites {
    // null côté API => échec de désérialisation => "introuvable"
    front_default: String,
}

impl ReponsePokemon {
    pub(crate) fn en_fiche(self, id: u32) -> Fiche {
        Fiche {
            id,
            nom: self.name,
            image: self.sprites.front_default,
        }
    }
}
