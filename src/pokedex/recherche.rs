//! Panneau Pokédex : une recherche asynchrone par résultat de calcul.
//!
//! Coordination (même schéma que les résultats `spawn_local` d’une UI egui) :
//! 1. `lancer` passe le statut à `Chargement` et confie la requête au catalogue
//! 2. le rappel de fin écrit le statut final dans l’état partagé
//! 3. le rappel réveille l’UI (`request_repaint`), qui relit `statut()` à la frame suivante
//!
//! Chaque `lancer` / `reinitialiser` prend un jeton croissant : une réponse dont le
//! jeton n’est plus le courant est ignorée. La dernière recherche ÉMISE gagne,
//! pas la dernière réponse ARRIVÉE, et un "C" ne peut pas être écrasé par une
//! réponse en retard.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use super::client::Catalogue;
use super::erreur::{msg_hors_bornes, ErreurCatalogue, MSG_INTROUVABLE};
use super::fiche::Fiche;

/// Un seul état visible à la fois.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Statut {
    #[default]
    Repos,
    Chargement {
        id: u32,
    },
    Erreur(String),
    Succes(Fiche),
}

#[derive(Debug, Default)]
struct EtatRecherche {
    statut: Statut,
    jeton: u64,
}

type Reveil = Arc<dyn Fn() + Send + Sync>;

pub struct Recherche {
    etat: Arc<Mutex<EtatRecherche>>,
    catalogue: Box<dyn Catalogue>,
    limite: u32,
    reveil: Option<Reveil>,
}

impl Recherche {
    pub fn new(catalogue: Box<dyn Catalogue>, limite: u32) -> Self {
        Self {
            etat: Arc::default(),
            catalogue,
            limite,
            reveil: None,
        }
    }

    /// Appelé après chaque réponse (typiquement `ctx.request_repaint()`).
    pub fn avec_reveil(mut self, reveil: impl Fn() + Send + Sync + 'static) -> Self {
        self.reveil = Some(Arc::new(reveil));
        self
    }

    pub fn statut(&self) -> Statut {
        verrou(&self.etat).statut.clone()
    }

    /// Lance la recherche du numéro `id` (hors [1, limite] : erreur immédiate, aucune requête).
    pub fn lancer(&self, id: i64) {
        let mut etat = verrou(&self.etat);
        etat.jeton += 1;
        let jeton = etat.jeton;

        let id = match u32::try_from(id) {
            Ok(id) if (1..=self.limite).contains(&id) => id,
            _ => {
                info!(id, limite = self.limite, "numéro hors Pokédex, pas de requête");
                etat.statut = Statut::Erreur(msg_hors_bornes(self.limite));
                return;
            }
        };

        info!(id, jeton, "recherche Pokédex");
        etat.statut = Statut::Chargement { id };
        // Le catalogue peut répondre tout de suite : on relâche le verrou avant.
        drop(etat);

        let partage = Arc::clone(&self.etat);
        let reveil = self.reveil.clone();
        self.catalogue.charger(
            id,
            Box::new(move |issue| {
                terminer(&partage, jeton, id, issue);
                if let Some(reveil) = reveil {
                    reveil();
                }
            }),
        );
    }

    /// Retour au repos ; les réponses encore en vol seront ignorées.
    pub fn reinitialiser(&self) {
        let mut etat = verrou(&self.etat);
        etat.jeton += 1;
        etat.statut = Statut::Repos;
    }
}

fn terminer(
    etat: &Mutex<EtatRecherche>,
    jeton: u64,
    id: u32,
    issue: Result<Fiche, ErreurCatalogue>,
) {
    let mut etat = verrou(etat);
    if etat.jeton != jeton {
        debug!(id, jeton, courant = etat.jeton, "réponse périmée ignorée");
        return;
    }

    etat.statut = match issue {
        Ok(fiche) => {
            debug!(id, nom = %fiche.nom, "fiche reçue");
            Statut::Succes(fiche)
        }
        Err(e) => {
            warn!(id, erreur = %e, "échec catalogue");
            Statut::Erreur(MSG_INTROUVABLE.to_string())
        }
    };
}

fn verrou(etat: &Mutex<EtatRecherche>) -> MutexGuard<'_, EtatRecherche> {
    etat.lock().unwrap_or_else(PoisonError::into_inner)
}
