use serde::{Deserialize, Serialize};

use crate::algebra::Complex;

/// Nombre d'itérations des générateurs fractals à itération bornée.
///
/// La boucle va toujours au bout : pas de rayon d'échappement, les entrées
/// divergentes finissent en NaN/±inf et c'est le comportement voulu
/// (ce n'est pas un rendu escape-time).
pub const FRACTAL_ITERATIONS: u32 = 128;

/// Nombre de termes des séries tronquées (zeta, Clausen). Troncature fixe,
/// aucune détection de convergence.
pub const SERIES_TERMS: u32 = 32;

/// Entrées de pipeline `Complex → Complex`.
///
/// Chaque entrée est une fonction pure : même entrée, même sortie, aucun
/// état partagé entre pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexFunction {
    Identity,
    Sin,
    Cos,
    /// Tangente, forme canonique (identité de l'angle double).
    Tan,
    /// Tangente par quotient sin/cos ; conservée pour comparaison.
    Tan2,
    Inv,
    Exp,
    Log,
    Sqrt,
    Sinh,
    Cosh,
    Tanh,
    /// `z · log z`
    MulLog,
    /// `2z / (1 + z²)`
    Klein,
    /// `(e^{iz} + e^{-iz}) / 2`
    Euler,
    /// `(1 + z) / (1 - z)`
    Conformal,
    /// `log((1 + z) / (1 - z))`
    HyperbolicLog,
    /// `z_{k+1} = z_k² + c`, 128 itérations fixes.
    Mandelbrot,
    /// `z_{k+1} = sin(z_k) + c`, 128 itérations fixes.
    SinFractal,
    /// Série zêta tronquée : `Σ n^{-s}`, n = 1..32.
    Zeta,
    /// Fonction de Clausen tronquée : `Σ sin(z + n) / n^n`, n = 1..32.
    Clausen,
}

impl ComplexFunction {
    pub fn all() -> &'static [ComplexFunction] {
        &[
            ComplexFunction::Identity,
            ComplexFunction::Sin,
            ComplexFunction::Cos,
            ComplexFunction::Tan,
            ComplexFunction::Tan2,
            ComplexFunction::Inv,
            ComplexFunction::Exp,
            ComplexFunction::Log,
            ComplexFunction::Sqrt,
            ComplexFunction::Sinh,
            ComplexFunction::Cosh,
            ComplexFunction::Tanh,
            ComplexFunction::MulLog,
            ComplexFunction::Klein,
            ComplexFunction::Euler,
            ComplexFunction::Conformal,
            ComplexFunction::HyperbolicLog,
            ComplexFunction::Mandelbrot,
            ComplexFunction::SinFractal,
            ComplexFunction::Zeta,
            ComplexFunction::Clausen,
        ]
    }

    /// Nom d'affichage.
    pub fn name(self) -> &'static str {
        match self {
            ComplexFunction::Identity => "Identité",
            ComplexFunction::Sin => "sin",
            ComplexFunction::Cos => "cos",
            ComplexFunction::Tan => "tan",
            ComplexFunction::Tan2 => "tan (sin/cos)",
            ComplexFunction::Inv => "1/z",
            ComplexFunction::Exp => "exp",
            ComplexFunction::Log => "log",
            ComplexFunction::Sqrt => "sqrt",
            ComplexFunction::Sinh => "sinh",
            ComplexFunction::Cosh => "cosh",
            ComplexFunction::Tanh => "tanh",
            ComplexFunction::MulLog => "z·log z",
            ComplexFunction::Klein => "Klein",
            ComplexFunction::Euler => "Euler",
            ComplexFunction::Conformal => "(1+z)/(1-z)",
            ComplexFunction::HyperbolicLog => "log (1+z)/(1-z)",
            ComplexFunction::Mandelbrot => "Mandelbrot borné",
            ComplexFunction::SinFractal => "sin(z)+c borné",
            ComplexFunction::Zeta => "zêta tronquée",
            ComplexFunction::Clausen => "Clausen tronquée",
        }
    }

    /// Identifiant stable pour la ligne de commande et les fichiers de jobs.
    pub fn cli_name(self) -> &'static str {
        match self {
            ComplexFunction::Identity => "identity",
            ComplexFunction::Sin => "sin",
            ComplexFunction::Cos => "cos",
            ComplexFunction::Tan => "tan",
            ComplexFunction::Tan2 => "tan2",
            ComplexFunction::Inv => "inv",
            ComplexFunction::Exp => "exp",
            ComplexFunction::Log => "log",
            ComplexFunction::Sqrt => "sqrt",
            ComplexFunction::Sinh => "sinh",
            ComplexFunction::Cosh => "cosh",
            ComplexFunction::Tanh => "tanh",
            ComplexFunction::MulLog => "mul-log",
            ComplexFunction::Klein => "klein",
            ComplexFunction::Euler => "euler",
            ComplexFunction::Conformal => "conformal",
            ComplexFunction::HyperbolicLog => "hyperbolic-log",
            ComplexFunction::Mandelbrot => "mandelbrot",
            ComplexFunction::SinFractal => "sin-fractal",
            ComplexFunction::Zeta => "zeta",
            ComplexFunction::Clausen => "clausen",
        }
    }

    pub fn from_cli_name(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.cli_name() == value.trim().to_lowercase())
    }

    /// Évalue l'entrée en un point.
    pub fn eval(self, z: Complex) -> Complex {
        match self {
            ComplexFunction::Identity => z,
            ComplexFunction::Sin => z.sin(),
            ComplexFunction::Cos => z.cos(),
            ComplexFunction::Tan => z.tan(),
            ComplexFunction::Tan2 => z.tan2(),
            ComplexFunction::Inv => z.inv(),
            ComplexFunction::Exp => z.exp(),
            ComplexFunction::Log => z.log(),
            ComplexFunction::Sqrt => z.sqrt(),
            ComplexFunction::Sinh => z.sinh(),
            ComplexFunction::Cosh => z.cosh(),
            ComplexFunction::Tanh => z.tanh(),
            ComplexFunction::MulLog => z * z.log(),
            ComplexFunction::Klein => z.mul_real(2.0) / (Complex::ONE + z * z),
            ComplexFunction::Euler => euler(z),
            ComplexFunction::Conformal => (Complex::ONE + z) / (Complex::ONE - z),
            ComplexFunction::HyperbolicLog => ((Complex::ONE + z) / (Complex::ONE - z)).log(),
            ComplexFunction::Mandelbrot => mandelbrot(z),
            ComplexFunction::SinFractal => sin_fractal(z),
            ComplexFunction::Zeta => zeta(z),
            ComplexFunction::Clausen => clausen(z),
        }
    }
}

/// Cosinus par la formule d'Euler : `(e^{iz} + e^{-iz}) / 2`.
fn euler(z: Complex) -> Complex {
    let a = (z * Complex::I).exp();
    let b = (z * Complex::new(0.0, -1.0)).exp();
    (a + b).mul_real(0.5)
}

/// Générateur fractal à itération bornée : `z₀ = c`, `z_{k+1} = z_k² + c`.
/// La boucle court toujours les 128 itérations ; `c = 0` est un point fixe.
fn mandelbrot(c: Complex) -> Complex {
    let mut z = c;
    for _ in 0..FRACTAL_ITERATIONS {
        z = z * z + c;
    }
    z
}

/// Variante : `z_{k+1} = sin(z_k) + c`.
fn sin_fractal(c: Complex) -> Complex {
    let mut z = c;
    for _ in 0..FRACTAL_ITERATIONS {
        z = z.sin() + c;
    }
    z
}

/// Série zêta tronquée : `Σ_{n=1}^{32} n^{-s}` via `pow` (log/exp), dont
/// elle hérite le comportement de branche.
fn zeta(s: Complex) -> Complex {
    let s_neg = -s;
    let mut sum = Complex::ZERO;
    for n in 1..=SERIES_TERMS {
        let num = Complex::new(n as f64, 0.0);
        sum = sum + num.pow(s_neg);
    }
    sum
}

/// Fonction de Clausen tronquée : `Σ_{n=1}^{32} sin(z + n) / n^n`.
fn clausen(z: Complex) -> Complex {
    let mut sum = Complex::ZERO;
    for n in 1..=SERIES_TERMS {
        let num = Complex::new(n as f64, 0.0);
        sum = sum + (z + num).sin() / num.pow(num);
    }
    sum
}

/// Entrées secondaires `Complex → réel` pour la composante valeur (V) du
/// rendu HSV.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFunction {
    /// Constante 1.
    One,
    /// `1 / |z|` — éclaircit près des zéros, brûle près des pôles.
    InvAbs,
    /// `10 · |z|`
    Abs10,
}

impl ValueFunction {
    pub fn all() -> &'static [ValueFunction] {
        &[ValueFunction::One, ValueFunction::InvAbs, ValueFunction::Abs10]
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueFunction::One => "constante 1",
            ValueFunction::InvAbs => "1/|z|",
            ValueFunction::Abs10 => "10·|z|",
        }
    }

    pub fn cli_name(self) -> &'static str {
        match self {
            ValueFunction::One => "one",
            ValueFunction::InvAbs => "inv-abs",
            ValueFunction::Abs10 => "abs10",
        }
    }

    pub fn from_cli_name(value: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.cli_name() == value.trim().to_lowercase())
    }

    /// Aucun clamp : le résultat peut sortir de [0, 1] ou être NaN, le
    /// stockage 8 bits tranche en bout de chaîne.
    pub fn eval(self, z: Complex) -> f64 {
        match self {
            ValueFunction::One => 1.0,
            ValueFunction::InvAbs => 1.0 / z.abs(),
            ValueFunction::Abs10 => z.abs() * 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_name_roundtrip() {
        for f in ComplexFunction::all() {
            assert_eq!(ComplexFunction::from_cli_name(f.cli_name()), Some(*f));
        }
        for f in ValueFunction::all() {
            assert_eq!(ValueFunction::from_cli_name(f.cli_name()), Some(*f));
        }
        assert_eq!(ComplexFunction::from_cli_name("inconnu"), None);
    }

    #[test]
    fn test_mandelbrot_origin_is_fixed_point() {
        // z² + 0 = 0 quel que soit le nombre d'itérations.
        let z = ComplexFunction::Mandelbrot.eval(Complex::ZERO);
        assert_eq!(z, Complex::ZERO);
    }

    #[test]
    fn test_mandelbrot_divergent_input_propagates() {
        // c = 2 diverge ; sans test d'échappement la boucle va au bout et le
        // résultat déborde en inf/NaN au lieu d'être tronqué.
        let z = ComplexFunction::Mandelbrot.eval(Complex::new(2.0, 0.0));
        assert!(!z.x.is_finite() || z.is_undefined());
    }

    #[test]
    fn test_mandelbrot_interior_point_stays_bounded() {
        let z = ComplexFunction::Mandelbrot.eval(Complex::new(-0.1, 0.1));
        assert!(z.abs() < 2.0);
    }

    #[test]
    fn test_zeta_known_value() {
        // ζ(2) = π²/6 ≈ 1.6449 ; la troncature à 32 termes laisse une queue
        // d'environ 1/32 ≈ 0.03.
        let z = ComplexFunction::Zeta.eval(Complex::new(2.0, 0.0));
        assert!((z.x - std::f64::consts::PI * std::f64::consts::PI / 6.0).abs() < 0.05);
        assert!(z.y.abs() < 1e-12);
    }

    #[test]
    fn test_zeta_term_count_matters() {
        // s = 0 : chaque terme vaut n^0 = 1, la somme vaut exactement 32.
        // Épingle la troncature fixe.
        let z = ComplexFunction::Zeta.eval(Complex::ZERO);
        assert_eq!(z.x, SERIES_TERMS as f64);
        assert_eq!(z.y, 0.0);
    }

    #[test]
    fn test_clausen_is_finite_on_regular_point() {
        let z = ComplexFunction::Clausen.eval(Complex::new(0.5, 0.2));
        assert!(z.x.is_finite() && z.y.is_finite());
        // Dominée par le premier terme sin(z + 1) ; le second est déjà
        // divisé par 2² = 4, le troisième par 27.
        let first = (Complex::new(0.5, 0.2) + Complex::ONE).sin();
        assert!((z.x - first.x).abs() < 0.4);
    }

    #[test]
    fn test_entries_are_deterministic() {
        let z = Complex::new(0.7, -0.4);
        for f in ComplexFunction::all() {
            let a = f.eval(z);
            let b = f.eval(z);
            // Reproductible au bit près (NaN compris).
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }

    #[test]
    fn test_value_functions_do_not_clamp() {
        assert_eq!(ValueFunction::One.eval(Complex::ZERO), 1.0);
        // 1/|0| = inf, 10·|grand| > 1 : aucune borne.
        assert_eq!(ValueFunction::InvAbs.eval(Complex::ZERO), f64::INFINITY);
        assert_eq!(ValueFunction::Abs10.eval(Complex::new(3.0, 4.0)), 50.0);
        // NaN traverse sans être rattrapé.
        assert!(ValueFunction::Abs10.eval(Complex::new(f64::NAN, 0.0)).is_nan());
    }
}
