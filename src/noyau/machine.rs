//! Machine à états de la calculatrice (saisie immédiate, pas de parsing).
//!
//! Contrats :
//! - `EtatCalc` est immuable vu de l’extérieur : champs privés, chaque action
//!   prend `&self` et rend une `Transition` (nouvel état + effet à appliquer).
//! - Le noyau ne connaît pas le réseau : il dit seulement à l’UI quoi faire du
//!   panneau Pokédex (`Effet`).

use super::affichage::{borner, Affichage, ErreurCalcul};
use super::operateur::{combiner, Operateur};
use crate::config::LIMITE_POKEDEX;

/// Ce que l’UI doit faire du panneau de recherche après une transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effet {
    Aucun,
    /// Lancer une recherche pour ce numéro (résultat déjà arrondi vers le bas).
    Rechercher(i64),
    /// Remettre le panneau au repos.
    Reinitialiser,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub etat: EtatCalc,
    pub effet: Effet,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    affichage: Affichage,
    operande: Option<f64>,
    operateur: Option<Operateur>,
    attente_second: bool,
    limite: u32,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self::new(LIMITE_POKEDEX)
    }
}

impl EtatCalc {
    /// État initial : ("0", aucun, aucun, false).
    pub fn new(limite: u32) -> Self {
        Self {
            affichage: Affichage::default(),
            operande: None,
            operateur: None,
            attente_second: false,
            limite,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &Affichage {
        &self.affichage
    }

    pub fn operande(&self) -> Option<f64> {
        self.operande
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn attente_second(&self) -> bool {
        self.attente_second
    }

    /// Opération en cours, ex. "5 ×" (vide s’il n’y en a pas).
    pub fn operation_en_cours(&self) -> String {
        match (self.operande, self.operateur) {
            (Some(a), Some(op)) => {
                format!("{} {}", Affichage::depuis_valeur(a).texte(), op.symbole())
            }
            _ => String::new(),
        }
    }

    /* ------------------------ Transitions ------------------------ */

    /// Touche chiffre (0..=9). Toute autre valeur est ignorée.
    pub fn chiffre(&self, d: u8) -> Transition {
        if d > 9 {
            return self.inchange();
        }
        let d = char::from(b'0' + d);

        // Une erreur à l’écran : le chiffre repart d’une calculatrice vierge.
        // Le panneau Pokédex n’est pas touché (déjà remis au repos quand l’erreur est apparue).
        if self.affichage.est_erreur() {
            let mut etat = Self::new(self.limite);
            etat.affichage = Affichage::Nombre(d.to_string());
            return Self::vers(etat, Effet::Aucun);
        }

        let mut etat = self.clone();
        if self.attente_second {
            etat.affichage = Affichage::Nombre(d.to_string());
            etat.attente_second = false;
        } else if let Affichage::Nombre(s) = &self.affichage {
            let texte = if s == "0" { d.to_string() } else { format!("{s}{d}") };
            etat.affichage = Affichage::Nombre(texte);
        }
        Self::vers(etat, Effet::Aucun)
    }

    /// Touche opérateur. Enchaîne le calcul si un opérateur attend déjà son second opérande.
    pub fn operateur_choisi(&self, op: Operateur) -> Transition {
        let Some(v) = self.affichage.valeur() else {
            // Un texte d’erreur n’est pas un opérande.
            return self.inchange();
        };

        let mut etat = self.clone();
        let mut effet = Effet::Aucun;

        match (self.operateur, self.operande) {
            (Some(en_attente), Some(a)) if !self.attente_second => {
                let issue = if en_attente == Operateur::Division && v == 0.0 {
                    Err(ErreurCalcul::DivisionParZero)
                } else {
                    borner(combiner(a, en_attente, v), self.limite)
                };
                match issue {
                    Ok(r) => {
                        etat.affichage = Affichage::depuis_valeur(r);
                        etat.operande = Some(r);
                    }
                    Err(e) => {
                        etat.affichage = Affichage::Erreur(e);
                        etat.operande = None;
                        effet = Effet::Reinitialiser;
                    }
                }
            }
            _ => etat.operande = Some(v),
        }

        etat.attente_second = true;
        etat.operateur = Some(op);
        Self::vers(etat, effet)
    }

    /// Touche "=".
    pub fn egal(&self) -> Transition {
        let (Some(op), Some(a)) = (self.operateur, self.operande) else {
            return self.inchange();
        };
        if self.attente_second {
            return self.inchange();
        }
        let Some(b) = self.affichage.valeur() else {
            return self.inchange();
        };

        let mut etat = Self::new(self.limite);

        if op == Operateur::Division && b == 0.0 {
            etat.affichage = Affichage::Erreur(ErreurCalcul::DivisionParZero);
            return Self::vers(etat, Effet::Reinitialiser);
        }

        match borner(combiner(a, op, b), self.limite) {
            Ok(r) => {
                etat.affichage = Affichage::depuis_valeur(r);
                // r est fini ici (borner refuse le reste) : la conversion sature au pire.
                Self::vers(etat, Effet::Rechercher(r.floor() as i64))
            }
            Err(e) => {
                etat.affichage = Affichage::Erreur(e);
                Self::vers(etat, Effet::Reinitialiser)
            }
        }
    }

    /// Touche "C" : retour à l’état initial (idempotent).
    pub fn effacer(&self) -> Transition {
        Self::vers(Self::new(self.limite), Effet::Reinitialiser)
    }

    /* ------------------------ Helpers ------------------------ */

    fn inchange(&self) -> Transition {
        Self::vers(self.clone(), Effet::Aucun)
    }

    fn vers(etat: EtatCalc, effet: Effet) -> Transition {
        Transition { etat, effet }
    }
}
