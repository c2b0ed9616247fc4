/// Face-level metrics in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Ascent above the baseline (positive).
    pub ascent: f32,
    /// Descent below the baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Design units per em.
    pub units_per_em: u16,
}

impl FontMetrics {
    /// Line height (ascent + descent + line gap).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }

    /// Scale metrics to a pixel size, where `font_size` is px per em.
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        let scale = if self.units_per_em != 0 {
            font_size / self.units_per_em as f32
        } else {
            1.0
        };
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
            font_size,
        }
    }

    /// Scale metrics for a size in points at a given DPI
    /// (`px = pt * dpi / 72.0`).
    pub fn scale_from_points(&self, font_size_pt: f32, dpi: f32) -> ScaledFontMetrics {
        let px = font_size_pt * dpi / 72.0;
        self.scale_to_pixels(px)
    }
}

/// Scaled face metrics in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub font_size: f32,
}

impl ScaledFontMetrics {
    /// Line height in pixels.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNITS: FontMetrics = FontMetrics {
        ascent: 1600.0,
        descent: 400.0,
        line_gap: 48.0,
        units_per_em: 2048,
    };

    #[test]
    fn pixel_scaling_is_proportional() {
        let scaled = UNITS.scale_to_pixels(16.0);
        assert_eq!(scaled.font_size, 16.0);
        assert!((scaled.ascent - 12.5).abs() < 1e-4);
        assert!((scaled.descent - 3.125).abs() < 1e-4);
    }

    #[test]
    fn point_scaling_converts_through_dpi() {
        let at_72 = UNITS.scale_from_points(12.0, 72.0);
        let direct = UNITS.scale_to_pixels(12.0);
        assert_eq!(at_72, direct);

        let at_144 = UNITS.scale_from_points(12.0, 144.0);
        assert_eq!(at_144.font_size, 24.0);
    }

    #[test]
    fn zero_units_per_em_does_not_divide() {
        let degenerate = FontMetrics {
            units_per_em: 0,
            ..UNITS
        };
        let scaled = degenerate.scale_to_pixels(16.0);
        assert_eq!(scaled.ascent, UNITS.ascent);
    }
}
