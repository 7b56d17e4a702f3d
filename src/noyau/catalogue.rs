// src/noyau/catalogue.rs
//
// Catalogue fixe des fonctions traçables (une seule courbe à la fois).

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FonctionCourbe {
    #[default]
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Exp,
    Carre,
    Cube,
}

impl FonctionCourbe {
    /// Ordre du menu déroulant.
    pub const TOUTES: [FonctionCourbe; 8] = [
        FonctionCourbe::Sin,
        FonctionCourbe::Cos,
        FonctionCourbe::Tan,
        FonctionCourbe::Log10,
        FonctionCourbe::Ln,
        FonctionCourbe::Exp,
        FonctionCourbe::Carre,
        FonctionCourbe::Cube,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            FonctionCourbe::Sin => "sin(x)",
            FonctionCourbe::Cos => "cos(x)",
            FonctionCourbe::Tan => "tan(x)",
            FonctionCourbe::Log10 => "log(x)",
            FonctionCourbe::Ln => "ln(x)",
            FonctionCourbe::Exp => "e^x",
            FonctionCourbe::Carre => "x²",
            FonctionCourbe::Cube => "x³",
        }
    }

    /// f(x), x en radians pour la trig.
    /// log/ln renvoient NaN pour x <= 0 : le traceur coupe la courbe tout seul.
    pub fn evaluer(self, x: f64) -> f64 {
        match self {
            FonctionCourbe::Sin => x.sin(),
            FonctionCourbe::Cos => x.cos(),
            FonctionCourbe::Tan => x.tan(),
            FonctionCourbe::Log10 => {
                if x <= 0.0 {
                    f64::NAN
                } else {
                    x.log10()
                }
            }
            FonctionCourbe::Ln => {
                if x <= 0.0 {
                    f64::NAN
                } else {
                    x.ln()
                }
            }
            FonctionCourbe::Exp => x.exp(),
            FonctionCourbe::Carre => x * x,
            FonctionCourbe::Cube => x * x * x,
        }
    }
}
