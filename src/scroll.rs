//! Scroll-linked chrome: header state, progress bar and parallax.

/// Fraction of the document scrolled, in `[0, 1]`.
pub fn scroll_fraction(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn progress_transform(fraction: f64) -> String {
    format!("scaleX({fraction})")
}

/// Parallax speed from a `data-parallax` attribute.
pub fn parallax_speed(raw: Option<&str>, fallback: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", -(scroll_y * speed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_handles_short_pages() {
        assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(600.0, 2000.0, 800.0), 0.5);
        assert_eq!(scroll_fraction(5000.0, 2000.0, 800.0), 1.0);
    }

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(parallax_speed(Some("0.3"), 0.5), 0.3);
        assert_eq!(parallax_speed(Some(""), 0.5), 0.5);
        assert_eq!(parallax_speed(None, 0.5), 0.5);
        assert_eq!(parallax_transform(100.0, 0.5), "translateY(-50px)");
    }
}
