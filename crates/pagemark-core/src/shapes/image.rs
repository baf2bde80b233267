//! Embedded raster images.

use super::{Corners, ShapeId};
use crate::raster::Raster;
use kurbo::Point;
use std::sync::Arc;

/// Default inserted size, in page pixels.
pub const DEFAULT_INSERT_SIZE: f64 = 100.0;

/// A decoded raster scaled into its corner box.
#[derive(Debug, Clone)]
pub struct ImageShape {
    pub id: ShapeId,
    pub corners: Corners,
    pub raster: Arc<Raster>,
    pub angle: f64,
    pub selected: bool,
}

impl ImageShape {
    /// Insert at the default 100x100 size centered on `point`.
    pub fn centered(id: ShapeId, point: Point, raster: Arc<Raster>) -> Self {
        Self {
            id,
            corners: Corners::centered(point, DEFAULT_INSERT_SIZE, DEFAULT_INSERT_SIZE),
            raster,
            angle: 0.0,
            selected: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::Color;

    #[test]
    fn test_centered_insert() {
        let raster = Arc::new(Raster::solid(4, 4, Color::BLACK).unwrap());
        let image = ImageShape::centered(9, Point::new(200.0, 300.0), raster);
        assert_eq!(image.corners.center(), Point::new(200.0, 300.0));
        assert_eq!(image.corners.width(), DEFAULT_INSERT_SIZE);
        assert!(image.selected);
    }
}
