use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Quaternion `w + xi + yj + zk`.
///
/// L'ordre des champs (x, y, z, w) suit la convention DirectX : la partie
/// scalaire `w` est en dernier. Comme pour `Complex`, les résultats
/// indéfinis se propagent en NaN/±inf sans erreur.
///
/// Attention aux deux conventions de norme qui cohabitent : `exp` et `log`
/// travaillent sur la norme du seul vecteur (x, y, z), `inv` sur la norme
/// complète à 4 composantes. C'est l'algèbre voulue, pas un oubli.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const ZERO: Quaternion = Quaternion { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const IDENTITY: Quaternion = Quaternion { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Quaternion { x, y, z, w }
    }

    /// Angle de la rotation représentée : `2·acos(w)`.
    ///
    /// N'a de sens que pour un quaternion unitaire ; normaliser d'abord,
    /// sinon `acos` hors de [-1, 1] renvoie NaN.
    #[inline]
    pub fn angle(self) -> f64 {
        self.w.acos() * 2.0
    }

    /// Conjugué : vecteur négativé, scalaire conservé.
    #[inline]
    pub fn conj(self) -> Self {
        Quaternion::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Exponentielle : partie scalaire `e^w·cos ‖v‖`, partie vectorielle
    /// `e^w·sin ‖v‖ / ‖v‖ · v`.
    ///
    /// Quand le vecteur est nul le résultat est exactement `(0, 0, 0, e^w)`,
    /// sans passer par la division 0/0.
    pub fn exp(self) -> Self {
        let e = self.w.exp();
        let norm = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();

        if norm == 0.0 {
            return Quaternion::new(0.0, 0.0, 0.0, e);
        }

        let coef = e * norm.sin() / norm;
        Quaternion::new(
            self.x * coef,
            self.y * coef,
            self.z * coef,
            e * norm.cos(),
        )
    }

    /// Logarithme : vecteur mis à l'échelle par `acos(w/‖q‖)/‖v‖`, scalaire
    /// `ln ‖q‖`.
    ///
    /// Aucun cas particulier pour le vecteur nul : la division par
    /// `‖v‖ == 0` propage NaN, ce que les tests épinglent.
    pub fn log(self) -> Self {
        let vn = self.x * self.x + self.y * self.y + self.z * self.z;
        let q_norm = (vn + self.w * self.w).sqrt();
        let v_norm = vn.sqrt();
        let coef = (self.w / q_norm).acos() / v_norm;

        Quaternion::new(
            self.x * coef,
            self.y * coef,
            self.z * coef,
            q_norm.ln(),
        )
    }

    /// Inverse : conjugué divisé par la norme complète au carré
    /// (4 composantes, contrairement à `exp`/`log`).
    pub fn inv(self) -> Self {
        let norm = self.norm();
        let denom = 1.0 / (norm * norm);
        Quaternion::new(
            -self.x * denom,
            -self.y * denom,
            -self.z * denom,
            self.w * denom,
        )
    }

    /// Norme complète `sqrt(x² + y² + z² + w²)`.
    #[inline]
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Quaternion unitaire. Si l'échelle n'est pas finie (norme nulle),
    /// retourne le quaternion nul plutôt que de propager NaN.
    pub fn unit(self) -> Self {
        let denom = 1.0 / self.norm();
        if denom.is_finite() {
            return Quaternion::new(
                self.x * denom,
                self.y * denom,
                self.z * denom,
                self.w * denom,
            );
        }
        Quaternion::ZERO
    }

    /// Mise à l'échelle par un réel.
    #[inline]
    pub fn mul_real(self, r: f64) -> Self {
        Quaternion::new(self.x * r, self.y * r, self.z * r, self.w * r)
    }

    /// Puissance quaternionique : `q^n = exp(log(q)·n)`.
    pub fn pow(self, n: Quaternion) -> Self {
        (self.log() * n).exp()
    }

    /// Puissance réelle : `q^r = exp(log(q)·r)`.
    pub fn powr(self, r: f64) -> Self {
        self.log().mul_real(r).exp()
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn add(self, q: Quaternion) -> Quaternion {
        Quaternion::new(self.x + q.x, self.y + q.y, self.z + q.z, self.w + q.w)
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn sub(self, q: Quaternion) -> Quaternion {
        Quaternion::new(self.x - q.x, self.y - q.y, self.z - q.z, self.w - q.w)
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    /// Produit de Hamilton (non commutatif), `w` scalaire :
    /// `ij = k`, `ji = -k`.
    fn mul(self, q: Quaternion) -> Quaternion {
        let (x1, y1, z1, w1) = (self.x, self.y, self.z, self.w);
        let (x2, y2, z2, w2) = (q.x, q.y, q.z, q.w);
        Quaternion::new(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn mul(self, r: f64) -> Quaternion {
        self.mul_real(r)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn neg(self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

/// Rotation de `v` d'un angle `theta` par le sandwich `q·p·q̄`, avec `p` le
/// quaternion pur construit sur `v`. `v` doit être unitaire pour que `q`
/// soit une rotation valide.
pub fn rotate(v: [f64; 3], theta: f64) -> Quaternion {
    let half = theta * 0.5;
    let sin = half.sin();
    let cos = half.cos();
    let p = Quaternion::new(v[0], v[1], v[2], 0.0);
    let q = Quaternion::new(v[0] * sin, v[1] * sin, v[2] * sin, cos);
    q * p * q.conj()
}

/// Interpolation sphérique entre quaternions unitaires :
/// `slerp(p, q, t) = (q·p⁻¹)^t · p`.
pub fn slerp(p: Quaternion, q: Quaternion, t: f64) -> Quaternion {
    (q * p.inv()).powr(t) * p
}

/// Interpolation linéaire composante par composante ; `t` pondère `p`.
pub fn lerp(p: Quaternion, q: Quaternion, t: f64) -> Quaternion {
    Quaternion::new(
        p.x * t + (1.0 - t) * q.x,
        p.y * t + (1.0 - t) * q.y,
        p.z * t + (1.0 - t) * q.z,
        p.w * t + (1.0 - t) * q.w,
    )
}

/// Interpolation linéaire normalisée.
pub fn nlerp(p: Quaternion, q: Quaternion, t: f64) -> Quaternion {
    lerp(p, q, t).unit()
}
