// src/app/graphe.rs
//
// Fenêtre “Graphiques” : choix de la fonction + canevas.
// Le canevas prend toute la place disponible ; la courbe est régénérée à chaque frame
// (redimensionnement et changement de fonction couverts sans cache).

use eframe::egui;
use egui::{Color32, Pos2, Rect, Sense, Stroke};

use super::etat::AppCalc;
use crate::noyau::traceur::PointPixel;
use crate::noyau::{Fenetre, FonctionCourbe, Grille};

pub const TITRE_GRAPHE: &str = "Graphiques";

const COULEUR_GRILLE: Color32 = Color32::from_rgb(220, 220, 220);
const COULEUR_AXES: Color32 = Color32::GRAY;
const COULEUR_COURBE: Color32 = Color32::from_rgb(0, 100, 255);

impl AppCalc {
    pub fn ui_graphe(&mut self, ctx: &egui::Context) {
        if !self.graphe_ouvert {
            return;
        }

        if self.graphe_au_premier_plan {
            ctx.move_to_top(egui::LayerId::new(
                egui::Order::Middle,
                egui::Id::new(TITRE_GRAPHE),
            ));
            self.graphe_au_premier_plan = false;
        }

        let traceur = &mut self.traceur;
        egui::Window::new(TITRE_GRAPHE)
            .open(&mut self.graphe_ouvert)
            .default_size([600.0, 450.0])
            .min_size([200.0, 150.0])
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Fonction :");
                    let mut choix = traceur.fonction();
                    egui::ComboBox::from_id_salt("fonction_courbe")
                        .selected_text(choix.libelle())
                        .show_ui(ui, |ui| {
                            for f in FonctionCourbe::TOUTES {
                                ui.selectable_value(&mut choix, f, f.libelle());
                            }
                        });
                    traceur.selectionner(choix);
                });

                ui.add_space(6.0);

                let (resp, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
                let rect = resp.rect;
                painter.rect_filled(rect, 0.0, Color32::WHITE);

                let fenetre = Fenetre::standard(rect.width() as u32, rect.height() as u32);
                dessiner_grille(&painter, rect, &Grille::calculer(&fenetre));

                let trait_courbe = Stroke::new(2.0, COULEUR_COURBE);
                for s in traceur.rendre(&fenetre) {
                    painter.line_segment([vers_ecran(rect, s.de), vers_ecran(rect, s.a)], trait_courbe);
                }
            });
    }
}

fn dessiner_grille(painter: &egui::Painter, rect: Rect, g: &Grille) {
    let fin = Stroke::new(1.0, COULEUR_GRILLE);
    for &c in &g.colonnes {
        let x = rect.left() + c as f32;
        painter.vline(x, rect.y_range(), fin);
    }
    for &l in &g.lignes {
        let y = rect.top() + l as f32;
        painter.hline(rect.x_range(), y, fin);
    }

    let axe = Stroke::new(2.0, COULEUR_AXES);
    if let Some(c) = g.axe_vertical {
        painter.vline(rect.left() + c as f32, rect.y_range(), axe);
    }
    if let Some(l) = g.axe_horizontal {
        painter.hline(rect.x_range(), rect.top() + l as f32, axe);
    }
}

fn vers_ecran(rect: Rect, p: PointPixel) -> Pos2 {
    rect.min + egui::vec2(p.colonne as f32, p.ligne as f32)
}
