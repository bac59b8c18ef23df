use serde::{Deserialize, Serialize};

use crate::algebra::{Complex, Quaternion};

/// Distances et métriques `ℝ×ℝ → ℝ` pour les visualisations en niveaux de
/// gris. Les domaines partiels (acosh hors de [1, ∞), log de zéro...)
/// propagent NaN/±inf comme le reste du pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricFunction {
    /// Distance euclidienne à l'origine.
    Cartesian,
    /// Distance de Manhattan.
    Taxicab,
    /// 0 si x == y, 1 sinon.
    Discrete,
    /// `|y - x|`
    AbsDiff,
    /// `ln |y / x|`
    LogRatio,
    /// Norme du couple (r, θ) en coordonnées polaires.
    Polar,
    /// `acosh(100·|x·y|)`
    Hyperboloid,
    /// Distance hyperbolique du disque de Poincaré à l'origine.
    PoincareDisk,
    /// Distance du demi-plan supérieur de Poincaré.
    PoincareUpperHalfPlane,
    /// Projection de Beltrami-Klein de la distance du disque.
    BeltramiKleinDisk,
    /// Projection en boule de Poincaré.
    PoincareBall,
    /// `|1/z|` complexe.
    ComplexInv,
    /// `|tan z|` complexe.
    ComplexTan,
    /// Angle de `exp(q)` pour un quaternion construit sur (x, y).
    QuaternionExp,
    /// Norme de `log(q)`.
    QuaternionLog,
    /// Angle de `1/q`.
    QuaternionInv,
}

impl MetricFunction {
    pub fn all() -> &'static [MetricFunction] {
        &[
            MetricFunction::Cartesian,
            MetricFunction::Taxicab,
            MetricFunction::Discrete,
            MetricFunction::AbsDiff,
            MetricFunction::LogRatio,
            MetricFunction::Polar,
            MetricFunction::Hyperboloid,
            MetricFunction::PoincareDisk,
            MetricFunction::PoincareUpperHalfPlane,
            MetricFunction::BeltramiKleinDisk,
            MetricFunction::PoincareBall,
            MetricFunction::ComplexInv,
            MetricFunction::ComplexTan,
            MetricFunction::QuaternionExp,
            MetricFunction::QuaternionLog,
            MetricFunction::QuaternionInv,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            MetricFunction::Cartesian => "Cartésienne",
            MetricFunction::Taxicab => "Taxicab",
            MetricFunction::Discrete => "Discrète",
            MetricFunction::AbsDiff => "|y - x|",
            MetricFunction::LogRatio => "ln |y/x|",
            MetricFunction::Polar => "Polaire",
            MetricFunction::Hyperboloid => "Hyperboloïde",
            MetricFunction::PoincareDisk => "Disque de Poincaré",
            MetricFunction::PoincareUpperHalfPlane => "Demi-plan de Poincaré",
            MetricFunction::BeltramiKleinDisk => "Disque de Beltrami-Klein",
            MetricFunction::PoincareBall => "Boule de Poincaré",
            MetricFunction::ComplexInv => "|1/z|",
            MetricFunction::ComplexTan => "|tan z|",
            MetricFunction::QuaternionExp => "angle(exp q)",
            MetricFunction::QuaternionLog => "‖log q‖",
            MetricFunction::QuaternionInv => "angle(1/q)",
        }
    }

    pub fn cli_name(self) -> &'static str {
        match self {
            MetricFunction::Cartesian => "cartesian",
            MetricFunction::Taxicab => "taxicab",
            MetricFunction::Discrete => "discrete",
            MetricFunction::AbsDiff => "abs-diff",
            MetricFunction::LogRatio => "log-ratio",
            MetricFunction::Polar => "polar",
            MetricFunction::Hyperboloid => "hyperboloid",
            MetricFunction::PoincareDisk => "poincare-disk",
            MetricFunction::PoincareUpperHalfPlane => "poincare-half-plane",
            MetricFunction::BeltramiKleinDisk => "beltrami-klein",
            MetricFunction::PoincareBall => "poincare-ball",
            MetricFunction::ComplexInv => "complex-inv",
            MetricFunction::ComplexTan => "complex-tan",
            MetricFunction::QuaternionExp => "quaternion-exp",
            MetricFunction::QuaternionLog => "quaternion-log",
            MetricFunction::QuaternionInv => "quaternion-inv",
        }
    }

    pub fn from_cli_name(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.cli_name() == value.trim().to_lowercase())
    }

    pub fn eval(self, x: f64, y: f64) -> f64 {
        match self {
            MetricFunction::Cartesian => (x * x + y * y).sqrt(),
            MetricFunction::Taxicab => x.abs() + y.abs(),
            MetricFunction::Discrete => {
                if x == y {
                    0.0
                } else {
                    1.0
                }
            }
            MetricFunction::AbsDiff => (y - x).abs(),
            MetricFunction::LogRatio => (y / x).abs().ln(),
            MetricFunction::Polar => {
                let r = x * x + y * y;
                let theta = y.atan2(x);
                (r * r + theta * theta).sqrt()
            }
            MetricFunction::Hyperboloid => ((x * y).abs() * 1e2).acosh(),
            MetricFunction::PoincareDisk => poincare_disk(x, y),
            MetricFunction::PoincareUpperHalfPlane => {
                (1.0 + (x * x + y * y) / (2.0 * y)).acosh()
            }
            MetricFunction::BeltramiKleinDisk => beltrami_klein(x, y),
            MetricFunction::PoincareBall => {
                let s = beltrami_klein(x, y);
                s / (1.0 + (1.0 - s * s).sqrt())
            }
            MetricFunction::ComplexInv => Complex::new(x, y).inv().abs(),
            MetricFunction::ComplexTan => Complex::new(x, y).tan().abs(),
            MetricFunction::QuaternionExp => {
                Quaternion::new(x * x, x + y, y, y * x).exp().angle()
            }
            MetricFunction::QuaternionLog => Quaternion::new(0.0, x, y, y).log().norm(),
            MetricFunction::QuaternionInv => Quaternion::new(0.0, y, x, x).inv().angle(),
        }
    }
}

fn poincare_disk(x: f64, y: f64) -> f64 {
    let n = x * x + y * y;
    let delta = 2.0 * n / (1.0 - n);
    (1.0 + delta).acosh()
}

fn beltrami_klein(x: f64, y: f64) -> f64 {
    let u = poincare_disk(x, y);
    2.0 * u / (1.0 + u * u)
}
