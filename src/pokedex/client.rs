//! src/pokedex/client.rs
//!
//! Client catalogue : une requête GET par numéro, aucune relance, aucun cache.
//!
//! - wasm32 : la requête tourne via `wasm_bindgen_futures::spawn_local` (fetch du navigateur)
//! - natif  : la requête tourne sur un petit runtime tokio possédé par le client

use super::erreur::{ErreurCatalogue, ErreurDemarrage};
use super::fiche::{Fiche, ReponsePokemon};

/// Rappel de fin de requête (appelé une seule fois, succès ou échec).
pub type Achevement = Box<dyn FnOnce(Result<Fiche, ErreurCatalogue>) + Send + 'static>;

/// Source des fiches. Les tests branchent un faux catalogue scripté.
pub trait Catalogue {
    /// Lance la requête pour `id` sans bloquer ; `fin` reçoit l’issue.
    fn charger(&self, id: u32, fin: Achevement);
}

pub struct ClientPokeApi {
    http: reqwest::Client,
    url_base: String,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Runtime,
}

impl ClientPokeApi {
    pub fn new(url_base: &str) -> Result<Self, ErreurDemarrage> {
        let http = reqwest::Client::builder().build()?;

        #[cfg(not(target_arch = "wasm32"))]
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("pokedex-http")
            .enable_all()
            .build()?;

        Ok(Self {
            http,
            url_base: url_base.trim_end_matches('/').to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            runtime,
        })
    }

    fn url(&self, id: u32) -> String {
        format!("{}/{id}", self.url_base)
    }
}

impl Catalogue for ClientPokeApi {
    fn charger(&self, id: u32, fin: Achevement) {
        let requete = recuperer(self.http.clone(), self.url(id), id);
        let tache = async move { fin(requete.await) };

        #[cfg(not(target_arch = "wasm32"))]
        self.runtime.spawn(tache);

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(tache);
    }
}

async fn recuperer(
    http: reqwest::Client,
    url: String,
    id: u32,
) -> Result<Fiche, ErreurCatalogue> {
    tracing::debug!(%url, "GET catalogue");

    let reponse = http.get(&url).send().await?;
    let statut = reponse.status();
    if !statut.is_success() {
        return Err(ErreurCatalogue::Statut(statut.as_u16()));
    }

    let corps: ReponsePokemon = reponse.json().await?;
    Ok(corps.en_fiche(id))
}
