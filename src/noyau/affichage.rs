// src/noyau/affichage.rs
//
// Valeur affichée : un nombre OU une erreur (jamais les deux).
// Le texte utilisateur n’est produit qu’au rendu (texte()).

use crate::config::CHIFFRES_SIGNIFICATIFS;

/// Erreurs locales du calcul (récupérées, jamais fatales).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Résultat au-delà du dernier numéro du Pokédex (ou non fini).
    HorsPokedex { limite: u32 },
    DivisionParZero,
}

impl ErreurCalcul {
    pub fn message(self) -> String {
        match self {
            ErreurCalcul::HorsPokedex { limite } => {
                format!("Erreur : au-delà du Pokédex n°{limite} !")
            }
            ErreurCalcul::DivisionParZero => "Impossible de diviser par zéro !".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Affichage {
    /// Numéral décimal canonique, toujours relisible par `str::parse::<f64>`.
    Nombre(String),
    Erreur(ErreurCalcul),
}

impl Default for Affichage {
    fn default() -> Self {
        Affichage::Nombre("0".to_string())
    }
}

impl Affichage {
    pub fn depuis_valeur(v: f64) -> Self {
        Affichage::Nombre(format_nombre(v))
    }

    pub fn est_erreur(&self) -> bool {
        matches!(self, Affichage::Erreur(_))
    }

    /// Valeur numérique (None pour une erreur).
    pub fn valeur(&self) -> Option<f64> {
        match self {
            Affichage::Nombre(s) => s.parse().ok(),
            Affichage::Erreur(_) => None,
        }
    }

    /// Texte final pour l’écran.
    pub fn texte(&self) -> String {
        match self {
            Affichage::Nombre(s) => s.clone(),
            Affichage::Erreur(e) => e.message(),
        }
    }
}

/// Décimal le plus court qui relit la même valeur, sans exposant ; -0 devient 0.
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Arrondi à CHIFFRES_SIGNIFICATIFS chiffres significatifs.
pub fn arrondir_significatif(v: f64) -> f64 {
    if !v.is_finite() || v == 0.0 {
        return v;
    }
    let precision = CHIFFRES_SIGNIFICATIFS.saturating_sub(1);
    format!("{v:.precision$e}").parse().unwrap_or(v)
}

/// Politique de bornage : au-delà de `limite` (ou non fini) => erreur, sinon arrondi.
pub fn borner(v: f64, limite: u32) -> Result<f64, ErreurCalcul> {
    if !v.is_finite() || v > f64::from(limite) {
        return Err(ErreurCalcul::HorsPokedex { limite });
    }
    Ok(arrondir_significatif(v))
}
