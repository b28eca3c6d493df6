//! Animatable visual state of a single element.

/// Values that can be linearly interpolated.
pub trait Interpolate: Clone {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

/// Transform and opacity of an element relative to its laid out position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    /// Degrees.
    pub rotation: f64,
    /// Degrees around the vertical axis.
    pub rotate_y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub opacity: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        scale_y: 1.0,
        opacity: 1.0,
    };

    pub fn hidden() -> Self {
        Pose { opacity: 0.0, ..Pose::REST }
    }

    pub fn offset(x: f64, y: f64) -> Self {
        Pose { x, y, ..Pose::hidden() }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// CSS `transform` value. Identity components are left out.
    pub fn transform_css(&self) -> String {
        let mut parts = vec![format!("translate3d({:.2}px, {:.2}px, 0)", self.x, self.y)];
        if self.rotation != 0.0 {
            parts.push(format!("rotate({:.2}deg)", self.rotation));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({:.2}deg)", self.rotate_y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({:.4})", self.scale));
        }
        if self.scale_x != 1.0 || self.scale_y != 1.0 {
            parts.push(format!("scale({:.4}, {:.4})", self.scale_x, self.scale_y));
        }
        parts.join(" ")
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

impl Interpolate for Pose {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Pose {
            x: self.x.lerp(&other.x, t),
            y: self.y.lerp(&other.y, t),
            rotation: self.rotation.lerp(&other.rotation, t),
            rotate_y: self.rotate_y.lerp(&other.rotate_y, t),
            scale: self.scale.lerp(&other.scale, t),
            scale_x: self.scale_x.lerp(&other.scale_x, t),
            scale_y: self.scale_y.lerp(&other.scale_y, t),
            opacity: self.opacity.lerp(&other.opacity, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_between_hidden_and_rest() {
        let from = Pose::offset(-80.0, 0.0);
        let half = from.lerp(&Pose::REST, 0.5);
        assert_eq!(half.x, -40.0);
        assert_eq!(half.opacity, 0.5);
        assert_eq!(from.lerp(&Pose::REST, 1.0), Pose::REST);
    }

    #[test]
    fn rest_transform_is_plain_translate() {
        assert_eq!(Pose::REST.transform_css(), "translate3d(0.00px, 0.00px, 0)");
        let spun = Pose { rotate_y: -90.0, ..Pose::REST };
        assert!(spun.transform_css().contains("rotateY(-90.00deg)"));
    }
}
