// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : opération en cours (petit) + valeur (grand), aligné à droite
// - Pavé 4×4 : chiffres, ÷ × − +, C, =
// - Panneau Pokédex : repos / chargement / erreur / fiche (nom + sprite)
//
// Pas de raccourcis clavier : tout passe par les boutons.

use eframe::egui;

use super::etat::{AppPokedex, Touche};
use crate::config::TITRE_APP;
use crate::noyau::Operateur;
use crate::pokedex::Statut;

const TAILLE_TOUCHE: [f32; 2] = [64.0, 48.0];
const TAILLE_SPRITE: f32 = 192.0;

impl AppPokedex {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(TITRE_APP);
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pokedex(ui);
            });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(self.calc().operation_en_cours()).weak());

                    let affichage = self.calc().affichage();
                    let mut texte = egui::RichText::new(affichage.texte()).monospace();
                    texte = if affichage.est_erreur() {
                        texte.size(18.0).color(ui.visuals().error_fg_color)
                    } else {
                        texte.size(32.0)
                    };
                    ui.label(texte);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use Operateur::*;

        egui::Grid::new("pave_pokedex")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche_chiffre(ui, 7);
                self.touche_chiffre(ui, 8);
                self.touche_chiffre(ui, 9);
                self.touche_operateur(ui, Division);
                ui.end_row();

                self.touche_chiffre(ui, 4);
                self.touche_chiffre(ui, 5);
                self.touche_chiffre(ui, 6);
                self.touche_operateur(ui, Multiplication);
                ui.end_row();

                self.touche_chiffre(ui, 1);
                self.touche_chiffre(ui, 2);
                self.touche_chiffre(ui, 3);
                self.touche_operateur(ui, Soustraction);
                ui.end_row();

                self.touche(ui, "C", false, Touche::Effacer);
                self.touche_chiffre(ui, 0);
                self.touche(ui, "=", false, Touche::Egal);
                self.touche_operateur(ui, Addition);
                ui.end_row();
            });
    }

    fn touche_chiffre(&mut self, ui: &mut egui::Ui, d: u8) {
        self.touche(ui, &d.to_string(), false, Touche::Chiffre(d));
    }

    fn touche_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        // Surligné tant qu’il attend son second opérande.
        let actif = self.calc().attente_second() && self.calc().operateur() == Some(op);
        self.touche(ui, op.symbole(), actif, Touche::Operateur(op));
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, actif: bool, touche: Touche) {
        let bouton = egui::Button::new(egui::RichText::new(label).size(20.0)).selected(actif);
        if ui.add_sized(TAILLE_TOUCHE, bouton).clicked() {
            self.appuyer(touche);
        }
    }

    fn ui_pokedex(&self, ui: &mut egui::Ui) {
        ui.label("Pokédex :");

        match self.statut() {
            Statut::Repos => {
                ui.weak("Le résultat d’un calcul désigne un Pokémon.");
            }
            Statut::Chargement { id } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(format!("Recherche du n°{id}…"));
                });
            }
            Statut::Erreur(msg) => {
                ui.colored_label(ui.visuals().error_fg_color, msg);
            }
            Statut::Succes(fiche) => {
                ui.vertical_centered(|ui| {
                    ui.heading(format!("n°{} {}", fiche.id, fiche.nom_affiche()));
                    ui.add(
                        egui::Image::from_uri(fiche.image.clone())
                            .texture_options(egui::TextureOptions::NEAREST)
                            .fit_to_exact_size(egui::vec2(TAILLE_SPRITE, TAILLE_SPRITE)),
                    );
                });
            }
        }
    }
}
