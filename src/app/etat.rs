//! src/app/etat.rs
//!
//! État UI (sans vue, sans réseau direct).
//!
//! Rôle : relier la machine à états du noyau au panneau Pokédex.
//! Contrats :
//! - Le noyau calcule, l’UI applique l’effet rendu par la transition.
//! - Le panneau ne renvoie jamais rien vers la calculatrice.

use tracing::debug;

use crate::config::Reglages;
use crate::noyau::{Effet, EtatCalc, Operateur, Transition};
use crate::pokedex::{Recherche, Statut};

/// Une touche du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Operateur(Operateur),
    Egal,
    Effacer,
}

pub struct AppPokedex {
    calc: EtatCalc,
    recherche: Recherche,
}

impl AppPokedex {
    pub fn new(reglages: &Reglages, recherche: Recherche) -> Self {
        Self {
            calc: EtatCalc::new(reglages.limite),
            recherche,
        }
    }

    pub fn calc(&self) -> &EtatCalc {
        &self.calc
    }

    /// Photo du panneau pour la frame courante.
    pub fn statut(&self) -> Statut {
        self.recherche.statut()
    }

    pub fn appuyer(&mut self, touche: Touche) {
        let t = match touche {
            Touche::Chiffre(d) => self.calc.chiffre(d),
            Touche::Operateur(op) => self.calc.operateur_choisi(op),
            Touche::Egal => self.calc.egal(),
            Touche::Effacer => self.calc.effacer(),
        };
        self.appliquer(t);
    }

    fn appliquer(&mut self, t: Transition) {
        match t.effet {
            Effet::Aucun => {}
            Effet::Rechercher(id) => {
                debug!(id, "résultat => recherche");
                self.recherche.lancer(id);
            }
            Effet::Reinitialiser => self.recherche.reinitialiser(),
        }
        self.calc = t.etat;
    }
}
