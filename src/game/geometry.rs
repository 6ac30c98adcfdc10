//! Axis-aligned bounding boxes in world coordinates.

/// A rectangle given by its top-left and bottom-right corners (y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Aabb {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    pub fn from_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// True if the boxes share any point, edges included.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    /// True if the box leaves the vertical band `[0, height]`.
    pub fn exits_vertical(&self, height: f64) -> bool {
        self.y0 < 0.0 || self.y1 > height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_corners() {
        let b = Aabb::new(10.0, 20.0, 0.0, 5.0);
        assert_eq!(b, Aabb::new(0.0, 5.0, 10.0, 20.0));
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 15.0);
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::from_origin(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_origin(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Aabb::from_origin(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_origin(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_separated_boxes_do_not_intersect() {
        let a = Aabb::from_origin(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::from_origin(10.5, 0.0, 10.0, 10.0);
        let below = Aabb::from_origin(0.0, 10.5, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_exits_vertical() {
        assert!(Aabb::from_origin(0.0, -0.5, 10.0, 10.0).exits_vertical(600.0));
        assert!(Aabb::from_origin(0.0, 590.5, 10.0, 10.0).exits_vertical(600.0));
        assert!(!Aabb::from_origin(0.0, 0.0, 10.0, 10.0).exits_vertical(600.0));
        assert!(!Aabb::from_origin(0.0, 590.0, 10.0, 10.0).exits_vertical(600.0));
    }
}
