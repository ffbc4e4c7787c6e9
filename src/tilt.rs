/// Card tilt for a pointer at `(x, y)` relative to a `width x height` card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (cx, cy) = (width / 2.0, height / 2.0);
        Tilt {
            rotate_x: (y - cy) / 10.0,
            rotate_y: (cx - x) / 10.0,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-6px) scale(1.02)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Staggered hover delay for the `index`th card.
pub fn hover_delay(index: usize) -> String {
    format!("{}ms", index * 50)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        let t = Tilt::at(150.0, 100.0, 300.0, 200.0);
        assert_eq!(t, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn corners_tilt_towards_pointer() {
        let t = Tilt::at(0.0, 0.0, 300.0, 200.0);
        assert_eq!(t.rotate_x, -10.0);
        assert_eq!(t.rotate_y, 15.0);
        assert_eq!(
            t.transform(),
            "perspective(1000px) rotateX(-10deg) rotateY(15deg) translateY(-6px) scale(1.02)"
        );
    }

    #[test]
    fn delays_step_by_fifty() {
        assert_eq!(hover_delay(0), "0ms");
        assert_eq!(hover_delay(3), "150ms");
    }
}
