//! Geometric eraser: splits strokes where an eraser path touches them.

use super::stroke::{Point, Stroke};

/// Counter-clockwise orientation test for the triangle `a`, `b`, `c`.
fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Strict crossing test for segments `p1-p2` and `q1-q2`.
///
/// Collinear and endpoint-touching configurations do not count as crossings;
/// the proximity test in [`segment_erased`] covers those.
pub fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    ccw(p1, q1, q2) != ccw(p2, q1, q2) && ccw(p1, p2, q1) != ccw(p1, p2, q2)
}

/// Whether the stroke segment `p1-p2` is hit by any segment of `eraser`.
fn segment_erased(p1: Point, p2: Point, eraser: &[Point], radius: f64) -> bool {
    eraser.windows(2).any(|pair| {
        let (q1, q2) = (pair[0], pair[1]);
        let near = p1.distance(q1) < radius
            || p2.distance(q2) < radius
            || p1.distance(q2) < radius
            || p2.distance(q1) < radius;
        near || segments_intersect(p1, p2, q1, q2)
    })
}

/// Splits a polyline into the runs that survive the eraser path.
///
/// Each consecutive pair of `points` is a segment; a segment is erased when
/// either of its endpoints lies within `radius` of an endpoint of an eraser
/// segment, or when the two segments cross. Runs of surviving segments are
/// returned in order, and only when they hold at least two points.
///
/// A polyline with fewer than two points yields nothing. An eraser with fewer
/// than two points erases nothing.
pub fn split_polyline(points: &[Point], eraser: &[Point], radius: f64) -> Vec<Vec<Point>> {
    if points.len() < 2 {
        return Vec::new();
    }
    if eraser.len() < 2 {
        return vec![points.to_vec()];
    }

    let mut runs = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        if segment_erased(p1, p2, eraser, radius) {
            if current.len() > 1 {
                runs.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        } else {
            if current.is_empty() {
                current.push(p1);
            }
            current.push(p2);
        }
    }

    if current.len() > 1 {
        runs.push(current);
    }
    runs
}

/// Applies [`split_polyline`] to a stroke, keeping its color and width.
pub fn split_stroke(stroke: &Stroke, eraser: &[Point], radius: f64) -> Vec<Stroke> {
    split_polyline(stroke.points(), eraser, radius)
        .into_iter()
        .filter_map(|run| stroke.with_points(run))
        .collect()
}

/// Splits every stroke against the eraser path, preserving draw order.
pub fn erase_strokes<'a>(
    strokes: impl IntoIterator<Item = &'a Stroke>,
    eraser: &[Point],
    radius: f64,
) -> Vec<Stroke> {
    strokes
        .into_iter()
        .flat_map(|stroke| split_stroke(stroke, eraser, radius))
        .collect()
}
