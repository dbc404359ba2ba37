// src/app.rs
//
// Calculatrice Pokédex — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppPokedex (pour main.rs: use crate::app::AppPokedex;)
// - Brancher le vrai catalogue + le réveil egui
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppPokedex;`
pub use etat::AppPokedex;

use eframe::egui;

use crate::config::Reglages;
use crate::pokedex::{ClientPokeApi, ErreurDemarrage, Recherche};

impl AppPokedex {
    /// Construit l’app avec le client PokéAPI ; chaque réponse redemande une frame.
    pub fn demarrer(ctx: &egui::Context, reglages: &Reglages) -> Result<Self, ErreurDemarrage> {
        let client = ClientPokeApi::new(&reglages.url_catalogue)?;

        let ctx = ctx.clone();
        let recherche = Recherche::new(Box::new(client), reglages.limite)
            .avec_reveil(move || ctx.request_repaint());

        tracing::info!(limite = reglages.limite, url = %reglages.url_catalogue, "app prête");
        Ok(Self::new(reglages, recherche))
    }
}

impl eframe::App for AppPokedex {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
