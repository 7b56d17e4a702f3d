// src/app.rs
//
// Calculatrice scientifique: module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + graphe.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, aucun champ texte ne prend le focus) :
// - chiffres, '.', + - * / ^, '=' et '%' : comme les boutons
// - Enter = "=" ; Escape = CE ; Delete = AC

pub mod etat;
pub mod graphe;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

impl AppCalc {
    fn lire_clavier(&mut self, ctx: &egui::Context) {
        let touches: Vec<Touche> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => {
                        let mut chars = t.chars();
                        match (chars.next(), chars.next()) {
                            (Some(c), None) => AppCalc::touche_clavier(c),
                            _ => None,
                        }
                    }
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => Some(Touche::Egal),
                        egui::Key::Escape => Some(Touche::EffacerEntree),
                        egui::Key::Delete => Some(Touche::EffacerTout),
                        _ => None,
                    },
                    _ => None,
                })
                .collect()
        });

        for t in touches {
            self.appuyer(t);
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.lire_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        self.ui_graphe(ctx);
    }
}
