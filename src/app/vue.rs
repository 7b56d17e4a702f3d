// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// - Écran : grand, aligné à droite, monospace
// - Ligne utilitaire : AC, π, e
// - Pavé scientifique 4×4 puis pavé standard 4×4
// - Chaque bouton produit une Touche ; le noyau fait tout le reste

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::format::format_valeur;
use crate::noyau::{Constante, EtatMachine, ModeAngle, Operateur, TrigFn};

const TAILLE_BOUTON: [f32; 2] = [86.0, 38.0];
const TAILLE_ECRAN: f32 = 28.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        self.ui_ecran(ui);
        ui.add_space(6.0);

        self.ui_utilitaires(ui);
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(4.0);

        self.ui_scientifique(ui);
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(4.0);

        self.ui_pave_standard(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // rappel discret : mode d’angle + opérateur en attente
                ui.horizontal(|ui| {
                    ui.small(self.calc.mode_angle().libelle());
                    if let Some(op) = self.calc.operateur_en_attente() {
                        let gauche = format_valeur(self.calc.valeur_stockee());
                        ui.small(format!("{gauche} {}", op.symbole()));
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = egui::RichText::new(self.calc.affichage())
                        .monospace()
                        .strong()
                        .size(TAILLE_ECRAN);
                    if self.calc.etat_machine() == EtatMachine::Erreur {
                        ui.colored_label(ui.visuals().error_fg_color, texte);
                    } else {
                        ui.label(texte);
                    }
                });
            });
    }

    fn ui_utilitaires(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(ui, "AC", Touche::EffacerTout);
            self.bouton(ui, "π", Touche::Constante(Constante::Pi));
            self.bouton(ui, "e", Touche::Constante(Constante::E));
        });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                self.bouton(ui, "sin", Touche::Trig(TrigFn::Sin));
                self.bouton(ui, "cos", Touche::Trig(TrigFn::Cos));
                self.bouton(ui, "tan", Touche::Trig(TrigFn::Tan));
                self.bouton(ui, "√", Touche::Racine);
                ui.end_row();

                self.bouton(ui, "x²", Touche::Carre);
                self.bouton(ui, "xʸ", Touche::Op(Operateur::Puissance));
                self.bouton(ui, "1/x", Touche::Inverse);
                self.bouton(ui, "%", Touche::Pourcent);
                ui.end_row();

                self.bouton(ui, "log", Touche::Log);
                self.bouton(ui, "ln", Touche::Ln);
                self.bouton(ui, "exp", Touche::Exp);
                self.bouton(ui, "+/-", Touche::Signe);
                ui.end_row();

                // bascule : l’étiquette suit le mode (DEG / RAD)
                let mode = self.calc.mode_angle();
                let resp = ui.add_sized(
                    TAILLE_BOUTON,
                    egui::Button::new(mode.libelle()).selected(mode == ModeAngle::Radians),
                );
                if resp.clicked() {
                    self.appuyer(Touche::ModeAngle);
                }
                self.bouton(ui, "Graphique", Touche::Graphique);
                self.bouton(ui, "CE", Touche::EffacerEntree);
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_pave_standard(&mut self, ui: &mut egui::Ui) {
        const TOUCHES: [&str; 16] = [
            "7", "8", "9", "/", //
            "4", "5", "6", "*", //
            "1", "2", "3", "-", //
            "0", ".", "=", "+",
        ];

        egui::Grid::new("pave_standard")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (i, label) in TOUCHES.iter().enumerate() {
                    let touche = label.chars().next().and_then(AppCalc::touche_clavier);
                    if let Some(t) = touche {
                        self.bouton(ui, label, t);
                    }
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(
            TAILLE_BOUTON,
            egui::Button::new(egui::RichText::new(label).strong().size(16.0)),
        );
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
