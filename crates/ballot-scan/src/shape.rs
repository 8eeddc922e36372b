use nalgebra::Point2;

/// A closed contour produced by the external shape detector.
///
/// Vertices are ordered along the contour in integer pixel coordinates.
/// A shape is immutable once detected; area and centroid are derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    vertices: Vec<Point2<i32>>,
}

impl Shape {
    pub fn new(vertices: Vec<Point2<i32>>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2<i32>] {
        &self.vertices
    }

    /// Enclosed area in px², via the shoelace formula over the vertex loop.
    pub fn area(&self) -> f64 {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        let mut twice: i64 = 0;
        for (i, a) in self.vertices.iter().enumerate() {
            let b = &self.vertices[(i + 1) % self.vertices.len()];
            twice += i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y);
        }
        twice.abs() as f64 * 0.5
    }

    /// Vertex-averaged centroid, truncated to integer pixels.
    ///
    /// This is the arithmetic mean of the vertices, not an area-weighted
    /// polygon centroid. It is tolerant of vertex density along the contour
    /// and matches the positions recorded for existing calibrated ballots.
    pub fn centroid(&self) -> Point2<i32> {
        if self.vertices.is_empty() {
            return Point2::new(0, 0);
        }
        let n = self.vertices.len() as i64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0i64, 0i64), |(sx, sy), v| (sx + i64::from(v.x), sy + i64::from(v.y)));
        Point2::new((sx / n) as i32, (sy / n) as i32)
    }
}
