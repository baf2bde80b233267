//! Text measurement capability.
//!
//! Measuring rendered line widths needs font metrics, which live in the
//! drawing backend. The hit tester and caret logic depend only on this
//! trait; the render crate implements it on its surfaces.

/// Measures the rendered width of a single line of text.
pub trait TextMeasure {
    /// Width in page pixels of `line` at `font_size`. `line` contains no
    /// newline characters.
    fn line_width(&self, line: &str, font_size: f64) -> f64;
}

/// Fixed-advance metrics: every character is `advance * font_size` wide.
///
/// Deterministic stand-in for tests and headless use.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    pub advance: f64,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for FixedMetrics {
    fn line_width(&self, line: &str, font_size: f64) -> f64 {
        line.chars().count() as f64 * self.advance * font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_metrics_scale_with_font_size() {
        let metrics = FixedMetrics::default();
        assert_eq!(metrics.line_width("abcd", 10.0), 24.0);
        assert_eq!(metrics.line_width("", 10.0), 0.0);
        assert_eq!(metrics.line_width("ab", 20.0), 24.0);
    }
}
