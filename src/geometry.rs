use std::f64::consts::PI;

/// Number of points on a station marker star
pub const DEFAULT_STAR_POINTS: usize = 5;

/// Computes the vertices of a star polygon.
///
/// Returns `2 * point_count` vertices alternating between the outer and inner
/// radius. The first vertex sits straight above the center (angle -90°) and
/// the following ones advance by `180° / point_count`, which runs clockwise on
/// a y-down canvas.
///
/// # Arguments
/// * `center` - Center of the star
/// * `outer_radius` - Distance of the tips from the center
/// * `inner_radius` - Distance of the notches from the center
/// * `point_count` - Number of tips
///
/// # Examples
/// ```
/// use rail_board::geometry::star_vertices;
///
/// let vertices = star_vertices((0.0, 0.0), 10.0, 5.0, 5);
/// assert_eq!(vertices.len(), 10);
/// assert!((vertices[0].1 + 10.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn star_vertices(
    center: (f64, f64),
    outer_radius: f64,
    inner_radius: f64,
    point_count: usize,
) -> Vec<(f64, f64)> {
    let vertex_count = point_count * 2;
    let mut vertices = Vec::with_capacity(vertex_count);

    for i in 0..vertex_count {
        #[allow(clippy::cast_precision_loss)]
        let angle = -PI / 2.0 + (i as f64 * PI) / point_count as f64;
        let dist = if i % 2 == 0 { outer_radius } else { inner_radius };
        vertices.push((center.0 + angle.cos() * dist, center.1 + angle.sin() * dist));
    }

    vertices
}

/// Star vertices with the marker defaults: inner radius is half the outer
/// radius and the star has five points.
#[must_use]
pub fn star_vertices_default(center: (f64, f64), outer_radius: f64) -> Vec<(f64, f64)> {
    star_vertices(center, outer_radius, outer_radius / 2.0, DEFAULT_STAR_POINTS)
}

/// Shortens the segment between two points by `clearance` at both ends.
///
/// The direction is the angle from `a` to `b`, so the returned segment stays
/// on the same line. Connection lines use this to stop short of the station
/// markers instead of running into their centers.
///
/// Coincident points have no direction; they are returned unchanged.
///
/// # Arguments
/// * `a` - Start point
/// * `b` - End point
/// * `clearance` - Distance to cut off at each end
#[must_use]
pub fn offset_segment(a: (f64, f64), b: (f64, f64), clearance: f64) -> ((f64, f64), (f64, f64)) {
    if a == b {
        return (a, b);
    }

    let angle = (b.1 - a.1).atan2(b.0 - a.0);
    let (dx, dy) = (angle.cos() * clearance, angle.sin() * clearance);

    ((a.0 + dx, a.1 + dy), (b.0 - dx, b.1 - dy))
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_star_vertex_count() {
        for points in [3, 5, 8] {
            let vertices = star_vertices((10.0, 20.0), 15.0, 7.5, points);
            assert_eq!(vertices.len(), points * 2);
        }
    }

    #[test]
    fn test_star_first_vertex_points_up() {
        let center = (100.0, 50.0);
        let vertices = star_vertices_default(center, 15.0);

        assert!((vertices[0].0 - 100.0).abs() < EPS);
        assert!((vertices[0].1 - 35.0).abs() < EPS);
        assert!((distance(center, vertices[0]) - 15.0).abs() < EPS);
    }

    #[test]
    fn test_star_alternates_radii() {
        let center = (0.0, 0.0);
        let vertices = star_vertices(center, 10.0, 4.0, 5);

        for (i, vertex) in vertices.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
            assert!((distance(center, *vertex) - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_star_runs_clockwise() {
        // Second vertex is to the right of the top on a y-down canvas
        let vertices = star_vertices_default((0.0, 0.0), 10.0);
        assert!(vertices[1].0 > 0.0);
        assert!(vertices[1].1 < 0.0);
    }

    #[test]
    fn test_offset_segment_shortens_both_ends() {
        let a = (0.0, 0.0);
        let b = (30.0, 40.0);
        let (start, end) = offset_segment(a, b, 15.0);

        assert!((distance(start, end) - (50.0 - 30.0)).abs() < EPS);
        assert!((distance(a, start) - 15.0).abs() < EPS);
        assert!((distance(b, end) - 15.0).abs() < EPS);
    }

    #[test]
    fn test_offset_segment_stays_colinear() {
        let a = (446.5, 80.5);
        let b = (713.5, 47.0);
        let (start, end) = offset_segment(a, b, 15.0);

        let cross = |p: (f64, f64)| (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0);
        assert!(cross(start).abs() < 1e-6);
        assert!(cross(end).abs() < 1e-6);
    }

    #[test]
    fn test_offset_segment_coincident_points() {
        let p = (5.0, 5.0);
        assert_eq!(offset_segment(p, p, 15.0), (p, p));
    }
}
