/// Conversion HSV → RGB, formule standard à 6 secteurs.
///
/// `h` et `s` sont attendus dans [0, 1] mais `h` peut déborder (le secteur
/// est pris modulo 6, une teinte de 2 revient au rouge). `v` n'est jamais
/// borné : une valeur hors de [0, 1] ou NaN produit des canaux hors plage
/// ou NaN, et c'est le stockage 8 bits en bout de chaîne qui tranche
/// (voir `render::grid`). Les canaux sont arrondis au plus proche,
/// l'alpha passe tel quel.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64, a: u8) -> (f64, f64, f64, u8) {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    // Teinte NaN : aucun secteur ne correspond, les canaux restent NaN.
    let (r, g, b) = if sector.is_finite() {
        match (sector % 6.0) as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            5 => (v, p, q),
            _ => (f64::NAN, f64::NAN, f64::NAN),
        }
    } else {
        (f64::NAN, f64::NAN, f64::NAN)
    };

    ((r * 255.0).round(), (g * 255.0).round(), (b * 255.0).round(), a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0, 255), (255.0, 0.0, 0.0, 255));
        let (r, g, b, a) = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0, 255);
        assert_eq!((r, g, b, a), (0.0, 255.0, 0.0, 255));
        let (r, g, b, _) = hsv_to_rgb(2.0 / 3.0, 1.0, 1.0, 255);
        assert_eq!((r, g, b), (0.0, 0.0, 255.0));
    }

    #[test]
    fn test_hue_wraps_past_one() {
        // La teinte issue de (arg + π)/π monte jusqu'à 2 : secteur modulo 6.
        assert_eq!(hsv_to_rgb(2.0, 1.0, 1.0, 255), (255.0, 0.0, 0.0, 255));
        assert_eq!(hsv_to_rgb(4.0 / 3.0, 1.0, 1.0, 255), (0.0, 255.0, 0.0, 255));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let (r, g, b, _) = hsv_to_rgb(0.7, 0.0, 0.5, 0);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(r, 128.0); // round(0.5 · 255)
    }

    #[test]
    fn test_value_is_not_clamped() {
        // v > 1 sort de la plage 8 bits sans être retenu ici.
        let (r, _, _, _) = hsv_to_rgb(0.0, 1.0, 2.0, 255);
        assert_eq!(r, 510.0);
        // v négatif aussi.
        let (r, _, _, _) = hsv_to_rgb(0.0, 1.0, -1.0, 255);
        assert_eq!(r, -255.0);
    }

    #[test]
    fn test_nan_value_propagates() {
        let (r, g, b, a) = hsv_to_rgb(0.25, 1.0, f64::NAN, 255);
        assert!(r.is_nan() && g.is_nan() && b.is_nan());
        assert_eq!(a, 255);
    }

    #[test]
    fn test_nan_hue_propagates() {
        let (r, g, b, _) = hsv_to_rgb(f64::NAN, 1.0, 1.0, 255);
        assert!(r.is_nan() && g.is_nan() && b.is_nan());
    }
}
