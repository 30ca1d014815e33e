use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Profit colouring
// ---------------------------------------------------------------------------

const GAIN_HUE: f32 = 120.0;
const LOSS_HUE: f32 = 0.0;

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Text colour for profit cells: green when the trade gains, red otherwise.
pub fn profit_color(profitable: bool) -> Color32 {
    if profitable {
        hsl_to_color32(GAIN_HUE, 0.70, 0.45)
    } else {
        hsl_to_color32(LOSS_HUE, 0.75, 0.55)
    }
}

/// Marker colour for a rating score: red below average (1.0), fading
/// through yellow to green as the score reaches 2× average.
pub fn score_color(score: f64) -> Color32 {
    let t = (score / 2.0).clamp(0.0, 1.0) as f32;
    hsl_to_color32(LOSS_HUE + t * (GAIN_HUE - LOSS_HUE), 0.75, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greenish(c: Color32) -> bool {
        c.g() > c.r() && c.g() > c.b()
    }

    fn reddish(c: Color32) -> bool {
        c.r() > c.g() && c.r() > c.b()
    }

    #[test]
    fn test_profit_colors() {
        assert!(greenish(profit_color(true)));
        assert!(reddish(profit_color(false)));
    }

    #[test]
    fn test_score_color_endpoints() {
        assert!(reddish(score_color(0.0)));
        assert!(greenish(score_color(5.0)));
    }
}
