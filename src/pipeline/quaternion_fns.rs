use serde::{Deserialize, Serialize};

use crate::algebra::Quaternion;

use super::complex_fns::{FRACTAL_ITERATIONS, SERIES_TERMS};

/// Entrées de pipeline `Quaternion → Quaternion`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuaternionFunction {
    Identity,
    Conj,
    Exp,
    Log,
    Inv,
    /// `q²`
    Square,
    /// `q^q`
    PowSelf,
    /// `z_{k+1} = z_k² + c/4`, 128 itérations fixes, graine `c/4`.
    Mandelbrot,
    /// Mandelbrot précomposé par exp.
    ExpMandelbrot,
    /// Mandelbrot précomposé par log.
    LogMandelbrot,
    /// Série zêta tronquée, exposant `-s/10`, n = 1..32.
    Zeta,
    /// Zêta précomposée par exp.
    ExpZeta,
    /// Zêta précomposée par log.
    LogZeta,
}

impl QuaternionFunction {
    pub fn all() -> &'static [QuaternionFunction] {
        &[
            QuaternionFunction::Identity,
            QuaternionFunction::Conj,
            QuaternionFunction::Exp,
            QuaternionFunction::Log,
            QuaternionFunction::Inv,
            QuaternionFunction::Square,
            QuaternionFunction::PowSelf,
            QuaternionFunction::Mandelbrot,
            QuaternionFunction::ExpMandelbrot,
            QuaternionFunction::LogMandelbrot,
            QuaternionFunction::Zeta,
            QuaternionFunction::ExpZeta,
            QuaternionFunction::LogZeta,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            QuaternionFunction::Identity => "Identité",
            QuaternionFunction::Conj => "conjugué",
            QuaternionFunction::Exp => "exp",
            QuaternionFunction::Log => "log",
            QuaternionFunction::Inv => "1/q",
            QuaternionFunction::Square => "q²",
            QuaternionFunction::PowSelf => "q^q",
            QuaternionFunction::Mandelbrot => "Mandelbrot borné",
            QuaternionFunction::ExpMandelbrot => "Mandelbrot ∘ exp",
            QuaternionFunction::LogMandelbrot => "Mandelbrot ∘ log",
            QuaternionFunction::Zeta => "zêta tronquée",
            QuaternionFunction::ExpZeta => "zêta ∘ exp",
            QuaternionFunction::LogZeta => "zêta ∘ log",
        }
    }

    pub fn cli_name(self) -> &'static str {
        match self {
            QuaternionFunction::Identity => "identity",
            QuaternionFunction::Conj => "conj",
            QuaternionFunction::Exp => "exp",
            QuaternionFunction::Log => "log",
            QuaternionFunction::Inv => "inv",
            QuaternionFunction::Square => "square",
            QuaternionFunction::PowSelf => "pow-self",
            QuaternionFunction::Mandelbrot => "mandelbrot",
            QuaternionFunction::ExpMandelbrot => "exp-mandelbrot",
            QuaternionFunction::LogMandelbrot => "log-mandelbrot",
            QuaternionFunction::Zeta => "zeta",
            QuaternionFunction::ExpZeta => "exp-zeta",
            QuaternionFunction::LogZeta => "log-zeta",
        }
    }

    pub fn from_cli_name(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.cli_name() == value.trim().to_lowercase())
    }

    pub fn eval(self, q: Quaternion) -> Quaternion {
        match self {
            QuaternionFunction::Identity => q,
            QuaternionFunction::Conj => q.conj(),
            QuaternionFunction::Exp => q.exp(),
            QuaternionFunction::Log => q.log(),
            QuaternionFunction::Inv => q.inv(),
            QuaternionFunction::Square => q * q,
            QuaternionFunction::PowSelf => q.pow(q),
            QuaternionFunction::Mandelbrot => mandelbrot(q),
            QuaternionFunction::ExpMandelbrot => mandelbrot(q.exp()),
            QuaternionFunction::LogMandelbrot => mandelbrot(q.log()),
            QuaternionFunction::Zeta => zeta(q),
            QuaternionFunction::ExpZeta => zeta(q.exp()),
            QuaternionFunction::LogZeta => zeta(q.log()),
        }
    }
}

/// Mandelbrot quaternionique à itération bornée. La graine et le terme
/// additif sont `c/4` pour garder une partie de l'entrée dans la zone
/// bornée ; pas de test d'échappement.
fn mandelbrot(c: Quaternion) -> Quaternion {
    let seed = c.mul_real(0.25);
    let mut z = seed;
    for _ in 0..FRACTAL_ITERATIONS {
        z = z * z + seed;
    }
    z
}

/// Série zêta tronquée : `Σ_{n=1}^{32} (n·i)^{-s/10}`.
///
/// `n` est logé dans la composante x, pas dans le scalaire : un terme
/// purement scalaire passerait par le log sans garde (vecteur nul) et la
/// série entière serait NaN. La réduction de l'exposant par 0,1 ralentit
/// la divergence.
fn zeta(s: Quaternion) -> Quaternion {
    let s_neg = (-s).mul_real(0.1);
    let mut sum = Quaternion::ZERO;
    for n in 1..=SERIES_TERMS {
        let num = Quaternion::new(n as f64, 0.0, 0.0, 0.0);
        sum = sum + num.pow(s_neg);
    }
    sum
}
