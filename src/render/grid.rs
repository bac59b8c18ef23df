use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algebra::{Complex, Quaternion};
use crate::color::hsv_to_rgb;
use crate::pipeline::{ComplexFunction, MetricFunction, QuaternionFunction, ValueFunction};

/// Échelle par défaut du plan complexe.
pub const DEFAULT_COMPLEX_SCALE: f64 = 4.0;
/// Échelle par défaut pour la projection quaternionique.
pub const DEFAULT_QUATERNION_SCALE: f64 = 8.0;

/// Paramètres d'une passe de rendu.
///
/// `scale` est l'étendue du plan algébrique projeté sur la grille ;
/// le mode métrique utilise sa propre projection fixe [-1, 1) et l'ignore.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RenderParams {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

/// Tampon RGBA possédé, ligne par ligne, origine en haut à gauche.
///
/// Créé une fois par surface puis réécrit en place à chaque passe : le
/// rendu le prend en emprunt exclusif, le remplit en entier, et la surface
/// (export PNG ici) le présente en un seul « flush ».
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        PixelBuffer {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Octets RGBA bruts, `width · height · 4`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Écriture d'un canal : arrondi au plus proche puis cast saturant
/// (NaN → 0, négatif → 0, > 255 → 255). C'est ici, et seulement ici, que
/// les valeurs hors plage du pipeline sont tranchées.
#[inline]
fn store(v: f64) -> u8 {
    v.round() as u8
}

fn check_buffer(params: &RenderParams, buffer: &PixelBuffer) {
    assert_eq!(buffer.width, params.width, "largeur du tampon invalide");
    assert_eq!(buffer.height, params.height, "hauteur du tampon invalide");
}

/// Passe de rendu en coloration de domaine complexe.
///
/// Chaque pixel (x, y) est envoyé sur `z = scale·(0.5 - x/w, 0.5 - y/h)`,
/// la fonction primaire donne `zz`, puis teinte `(arg zz + π)/π`,
/// saturation 1 et valeur `value(zz)` passent en HSV.
///
/// Les lignes sont indépendantes et rendues en parallèle avec rayon,
/// chacune écrivant sa propre tranche du tampon.
pub fn render_complex(
    params: &RenderParams,
    function: ComplexFunction,
    value: ValueFunction,
    buffer: &mut PixelBuffer,
) {
    check_buffer(params, buffer);
    if params.width == 0 || params.height == 0 {
        return;
    }

    let width = params.width as usize;
    let scale = params.scale;
    let w = params.width as f64;
    let h = params.height as f64;

    buffer
        .data
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let yy = scale * (0.5 - y as f64 / h);
            for x in 0..width {
                let xx = scale * (0.5 - x as f64 / w);
                let zz = function.eval(Complex::new(xx, yy));

                let hue = (zz.arg() + std::f64::consts::PI) / std::f64::consts::PI;
                let v = value.eval(zz);
                let (r, g, b, a) = hsv_to_rgb(hue, 1.0, v, 255);

                let i = x * 4;
                row[i] = store(r);
                row[i + 1] = store(g);
                row[i + 2] = store(b);
                row[i + 3] = a;
            }
        });
}

/// Passe de rendu quaternionique.
///
/// Les deux axes écran fournissent quatre composantes :
/// `q = (xx, yy, xx/yy, xx·yy)` — `yy = 0` rend la troisième composante
/// infinie ou NaN, ce qui se propage sans être rattrapé. Le résultat est
/// normalisé (`unit`, repli sur zéro), la luminosité vaut `255·w·10` et
/// chaque canal `|composante·luminosité| mod 255`, alpha fixé à 255.
pub fn render_quaternion(
    params: &RenderParams,
    function: QuaternionFunction,
    buffer: &mut PixelBuffer,
) {
    check_buffer(params, buffer);
    if params.width == 0 || params.height == 0 {
        return;
    }

    let width = params.width as usize;
    let scale = params.scale;
    let w = params.width as f64;
    let h = params.height as f64;

    buffer
        .data
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let yy = scale * (0.5 - y as f64 / h);
            for x in 0..width {
                let xx = scale * (0.5 - x as f64 / w);
                let q = Quaternion::new(xx, yy, xx / yy, xx * yy);

                let qq = function.eval(q).unit();
                let brightness = 255.0 * qq.w * 1e1;

                let i = x * 4;
                row[i] = store((qq.x * brightness).abs() % 255.0);
                row[i + 1] = store((qq.y * brightness).abs() % 255.0);
                row[i + 2] = store((qq.z * brightness).abs() % 255.0);
                row[i + 3] = 255;
            }
        });
}

/// Passe de rendu d'une métrique scalaire, en niveaux de gris.
///
/// Projection fixe sur [-1, 1) par axe. La luminosité vaut
/// `(phase + distance·10³) mod 256` ; `phase` est un paramètre explicite
/// (0 par défaut) pour garder une passe déterministe, à animer côté
/// appelant.
pub fn render_metric(
    params: &RenderParams,
    function: MetricFunction,
    phase: f64,
    buffer: &mut PixelBuffer,
) {
    check_buffer(params, buffer);
    if params.width == 0 || params.height == 0 {
        return;
    }

    let width = params.width as usize;
    let w = params.width as f64;
    let h = params.height as f64;

    buffer
        .data
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let yv = (y as f64 - h * 0.5) * 2.0 / h;
            for x in 0..width {
                let xv = (x as f64 - w * 0.5) * 2.0 / w;
                let distance = function.eval(xv, yv);
                let brightness = (phase + distance * 1e3) % 256.0;

                let i = x * 4;
                let level = store(brightness);
                row[i] = level;
                row[i + 1] = level;
                row[i + 2] = level;
                row[i + 3] = 255;
            }
        });
}
