// src/noyau/traceur.rs
//
// Traceur : échantillonne la fonction choisie à chaque colonne de pixel
// et renvoie des segments (espace pixel, lignes croissantes vers le bas).
//
// - NaN, ±∞ ou y hors [y_min, y_max] => pas de point pour cette colonne, la courbe est coupée
//   (tan(x) donne des arcs disjoints au lieu de traverser l’asymptote)
// - grille + axes utilisent la MÊME projection que les points
// - aucune erreur possible ; tout est régénéré à chaque appel

use num_traits::Float;
use tracing::trace;

use super::catalogue::FonctionCourbe;

/// Domaine de données fixe (x et y).
pub const DOMAINE_MIN: f64 = -10.0;
pub const DOMAINE_MAX: f64 = 10.0;

/// Grille 10×10 => 9 lignes intérieures par direction.
pub const DIVISIONS_GRILLE: u32 = 10;

/// Projection affine : `v` de [src_min, src_max] vers [dst_min, dst_max].
/// dst peut être inversé (ex. y -> ligne : [hauteur, 0]).
pub fn projeter<T: Float>(v: T, src_min: T, src_max: T, dst_min: T, dst_max: T) -> T {
    let proportion = (v - src_min) / (src_max - src_min);
    dst_min + proportion * (dst_max - dst_min)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fenetre {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub largeur: u32,
    pub hauteur: u32,
}

impl Fenetre {
    /// Domaine [-10, 10]², taille en pixels donnée par l’UI.
    pub fn standard(largeur: u32, hauteur: u32) -> Self {
        Self {
            x_min: DOMAINE_MIN,
            x_max: DOMAINE_MAX,
            y_min: DOMAINE_MIN,
            y_max: DOMAINE_MAX,
            largeur,
            hauteur,
        }
    }

    /// x de la colonne p : x_min + (p/largeur)·(x_max - x_min).
    pub fn x_de_colonne(&self, p: u32) -> f64 {
        self.x_min + (f64::from(p) / f64::from(self.largeur)) * (self.x_max - self.x_min)
    }

    /// Ligne de pixel de y (y_min -> bas, y_max -> haut), tronquée.
    /// None si y n’est pas affichable.
    pub fn ligne_de_y(&self, y: f64) -> Option<u32> {
        if !y.is_finite() || y < self.y_min || y > self.y_max {
            return None;
        }
        let ligne = projeter(y, self.y_min, self.y_max, f64::from(self.hauteur), 0.0);
        Some(ligne as u32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointPixel {
    pub colonne: u32,
    pub ligne: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub de: PointPixel,
    pub a: PointPixel,
}

/// Suite maximale de colonnes valides (une polyligne).
pub type Parcours = Vec<PointPixel>;

#[derive(Clone, Debug, Default)]
pub struct Traceur {
    fonction: FonctionCourbe,
}

impl Traceur {
    pub fn fonction(&self) -> FonctionCourbe {
        self.fonction
    }

    pub fn selectionner(&mut self, fonction: FonctionCourbe) {
        if self.fonction != fonction {
            trace!(fonction = fonction.libelle(), "fonction sélectionnée");
        }
        self.fonction = fonction;
    }

    /// Parcours (runs) de la courbe, de gauche à droite.
    /// Un parcours d’un seul point ne produit aucun segment mais reste listé.
    pub fn parcours(&self, fenetre: &Fenetre) -> Vec<Parcours> {
        let mut out: Vec<Parcours> = Vec::new();
        let mut courant: Parcours = Vec::new();

        for colonne in 0..fenetre.largeur {
            let y = self.fonction.evaluer(fenetre.x_de_colonne(colonne));

            match fenetre.ligne_de_y(y) {
                Some(ligne) => courant.push(PointPixel { colonne, ligne }),
                None => {
                    if !courant.is_empty() {
                        out.push(std::mem::take(&mut courant));
                    }
                }
            }
        }

        if !courant.is_empty() {
            out.push(courant);
        }

        trace!(
            fonction = self.fonction.libelle(),
            largeur = fenetre.largeur,
            hauteur = fenetre.hauteur,
            parcours = out.len(),
            "courbe régénérée"
        );
        out
    }

    /// Segments à dessiner : chaque point valide relié au précédent s’il était valide.
    pub fn rendre(&self, fenetre: &Fenetre) -> Vec<Segment> {
        self.parcours(fenetre)
            .iter()
            .flat_map(|p| p.windows(2).map(|w| Segment { de: w[0], a: w[1] }))
            .collect()
    }
}

/// Grille de fond + axes (cosmétique, mais sur la projection des données).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grille {
    pub colonnes: Vec<u32>,
    pub lignes: Vec<u32>,
    /// Colonne de x = 0 (axe vertical), si visible.
    pub axe_vertical: Option<u32>,
    /// Ligne de y = 0 (axe horizontal), si visible.
    pub axe_horizontal: Option<u32>,
}

impl Grille {
    pub fn calculer(fenetre: &Fenetre) -> Self {
        let colonnes = (1..DIVISIONS_GRILLE)
            .map(|i| fenetre.largeur * i / DIVISIONS_GRILLE)
            .collect();
        let lignes = (1..DIVISIONS_GRILLE)
            .map(|i| fenetre.hauteur * i / DIVISIONS_GRILLE)
            .collect();

        let axe_vertical = (fenetre.x_min <= 0.0 && 0.0 <= fenetre.x_max).then(|| {
            projeter(0.0, fenetre.x_min, fenetre.x_max, 0.0, f64::from(fenetre.largeur)) as u32
        });
        let axe_horizontal = fenetre.ligne_de_y(0.0);

        Self {
            colonnes,
            lignes,
            axe_vertical,
            axe_horizontal,
        }
    }
}
