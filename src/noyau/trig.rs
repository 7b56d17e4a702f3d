// src/noyau/trig.rs
//
// Trig de la calculatrice (sin/cos/tan) + mode d’angle DEG/RAD.
// Le traceur n’utilise PAS ce mode : ses courbes sont toujours en radians.

use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    pub fn appliquer(self, radians: f64) -> f64 {
        match self {
            TrigFn::Sin => radians.sin(),
            TrigFn::Cos => radians.cos(),
            TrigFn::Tan => radians.tan(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    /// Étiquette du bouton bascule.
    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }

    /// Angle saisi -> radians (radians = degrés·π/180 en mode DEG).
    pub fn vers_radians(self, angle: f64) -> f64 {
        match self {
            ModeAngle::Degres => angle * PI / 180.0,
            ModeAngle::Radians => angle,
        }
    }
}
