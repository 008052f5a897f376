//! House glyph geometry
//!
//! The glyph is defined once on a 24x24 logical grid and mapped into pixel
//! space with a [`Placement`]. Nothing here touches pixels, so the
//! coordinate math can be checked without decoding any image.

/// Extent of the logical grid the house outline is drawn on
pub const GRID_SIZE: f32 = 24.0;

/// Margin reserved on each side of an icon, as a fraction of its size
pub const ICON_PADDING_RATIO: f32 = 0.25;

/// A position in logical or pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// House outline (base, walls, door notch, roof peak) on the 24-unit grid.
/// The last vertex connects back to the first.
pub const HOUSE: [Point; 11] = [
    Point::new(10.0, 20.0),
    Point::new(10.0, 14.0),
    Point::new(14.0, 14.0),
    Point::new(14.0, 20.0),
    Point::new(19.0, 20.0),
    Point::new(19.0, 12.0),
    Point::new(22.0, 12.0),
    Point::new(12.0, 3.0),
    Point::new(2.0, 12.0),
    Point::new(5.0, 12.0),
    Point::new(5.0, 20.0),
];

/// Uniform scale followed by a translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Placement {
    /// Placement for a square icon of `size` pixels: the glyph grid fills
    /// the canvas minus 25% padding on each side.
    pub fn padded(size: u32) -> Self {
        let size = size as f32;
        let padding = size * ICON_PADDING_RATIO;
        let scale = (size - 2.0 * padding) / GRID_SIZE;

        Self {
            scale,
            offset_x: padding,
            offset_y: padding,
        }
    }

    /// Placement that scales the grid to `icon_size` pixels and centers it
    /// in a `width` x `height` canvas.
    pub fn centered(width: u32, height: u32, icon_size: u32) -> Self {
        let icon_size = icon_size as f32;

        Self {
            scale: icon_size / GRID_SIZE,
            offset_x: (width as f32 - icon_size) / 2.0,
            offset_y: (height as f32 - icon_size) / 2.0,
        }
    }

    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale + self.offset_x,
            point.y * self.scale + self.offset_y,
        )
    }

    /// Map every point, keeping order and count
    pub fn place(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.apply(p)).collect()
    }

    /// Pixel box covered by the full logical grid
    pub fn grid_bounds(&self) -> Bounds {
        let extent = GRID_SIZE * self.scale;
        Bounds {
            min_x: self.offset_x,
            min_y: self.offset_y,
            max_x: self.offset_x + extent,
            max_y: self.offset_y + extent,
        }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Smallest box containing all `points`, or `None` when empty
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };

        Some(points.iter().fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_point_eq(actual: Point, x: f32, y: f32) {
        assert!(
            (actual.x - x).abs() < EPSILON && (actual.y - y).abs() < EPSILON,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    /// Proper crossing test for two segments (touching endpoints excluded)
    fn segments_cross(a: Point, b: Point, c: Point, d: Point) -> bool {
        let orient =
            |p: Point, q: Point, r: Point| (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x);
        let d1 = orient(c, d, a);
        let d2 = orient(c, d, b);
        let d3 = orient(a, b, c);
        let d4 = orient(a, b, d);
        d1 * d2 < 0.0 && d3 * d4 < 0.0
    }

    #[test]
    fn padded_placement_for_mdpi() {
        let placement = Placement::padded(48);
        assert_eq!(placement.scale, 1.0);
        assert_eq!(placement.offset_x, 12.0);
        assert_eq!(placement.offset_y, 12.0);

        // Roof peak
        assert_point_eq(placement.apply(Point::new(12.0, 3.0)), 24.0, 15.0);
    }

    #[test]
    fn padded_scale_is_a_quarter_of_size_over_grid() {
        for size in [48, 72, 96, 144, 192, 512] {
            let placement = Placement::padded(size);
            let expected = size as f32 * 0.5 / GRID_SIZE;
            assert!((placement.scale - expected).abs() < EPSILON);
            assert!(placement.scale > 0.0);
        }
    }

    #[test]
    fn padded_house_stays_in_central_half() {
        for size in [48, 72, 96, 144, 192, 512] {
            let placed = Placement::padded(size).place(&HOUSE);
            let bounds = Bounds::of(&placed).unwrap();
            let lo = size as f32 * 0.25;
            let hi = size as f32 * 0.75;

            assert!(bounds.min_x >= lo && bounds.max_x <= hi, "size {size}: {bounds:?}");
            assert!(bounds.min_y >= lo && bounds.max_y <= hi, "size {size}: {bounds:?}");
        }
    }

    #[test]
    fn centered_placement_for_feature_graphic() {
        let placement = Placement::centered(1024, 500, 300);
        assert_eq!(placement.scale, 12.5);
        assert_eq!(placement.offset_x, 362.0);
        assert_eq!(placement.offset_y, 100.0);

        assert_point_eq(placement.apply(Point::new(2.0, 12.0)), 387.0, 250.0);

        let center = placement.grid_bounds().center();
        assert_point_eq(center, 512.0, 250.0);
    }

    #[test]
    fn place_keeps_vertex_order() {
        let placement = Placement::padded(96);
        let placed = placement.place(&HOUSE);

        assert_eq!(placed.len(), HOUSE.len());
        for (original, mapped) in HOUSE.iter().zip(&placed) {
            assert_eq!(*mapped, placement.apply(*original));
        }
    }

    #[test]
    fn placed_house_is_simple() {
        let placements = [
            Placement::padded(48),
            Placement::padded(512),
            Placement::centered(1024, 500, 300),
        ];

        for placement in placements {
            let placed = placement.place(&HOUSE);
            let n = placed.len();
            for i in 0..n {
                for j in (i + 1)..n {
                    // Skip edges sharing a vertex
                    if j == i + 1 || (i == 0 && j == n - 1) {
                        continue;
                    }
                    let crossed = segments_cross(
                        placed[i],
                        placed[(i + 1) % n],
                        placed[j],
                        placed[(j + 1) % n],
                    );
                    assert!(!crossed, "edges {i} and {j} intersect for {placement:?}");
                }
            }
        }
    }

    #[test]
    fn bounds_of_empty_slice_is_none() {
        assert!(Bounds::of(&[]).is_none());
    }
}
