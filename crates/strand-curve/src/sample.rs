//! Dense curve sampling from ordered control points.
//!
//! All samplers share one pipeline: a pre-sized buffer is filled with
//! `segments` points per control-point interval via a strategy-specific
//! evaluator, the exact final control point is written into the last
//! interval slot, and closed curves get their seam welded by [`close_loop`].

use strand_math::Point3;

use crate::spline1d::{
    CardinalSpline1d, EndDerivatives, KochanekShape, KochanekSpline1d, Spline1d,
};

/// Number of points a sampler produces.
///
/// Closed curves carry two extra slots: the seam point is duplicated so the
/// tangent entering and leaving the wrap is identical.
pub fn curve_point_count(number_of_points: usize, segments: usize, closed: bool) -> usize {
    if closed {
        number_of_points * segments + 2
    } else {
        (number_of_points - 1) * segments + 1
    }
}

/// Weld the seam of a fully sampled closed-curve buffer.
///
/// The first and last slots are both replaced with the midpoint of the
/// buffer's original first two points, so a subsequent tube sweep meets
/// itself without a kink.
pub fn close_loop(buffer: &mut [Point3]) {
    let midpoint = 0.5 * buffer[0] + 0.5 * buffer[1];
    buffer[0] = midpoint;
    let last = buffer.len() - 1;
    buffer[last] = midpoint;
}

/// Shared sampling skeleton: fill the buffer interval by interval, then land
/// exactly on the final control point.
fn sample_with(
    points: &[Point3],
    segments: usize,
    closed: bool,
    eval: impl Fn(usize, f64) -> Point3,
) -> Vec<Point3> {
    let n = points.len();
    debug_assert!(n >= 2);
    debug_assert!(segments >= 1);

    let interval_count = if closed { n } else { n - 1 };
    let mut buffer = vec![Point3::ZERO; curve_point_count(n, segments, closed)];
    for i in 0..interval_count {
        for k in 0..segments {
            buffer[i * segments + k] = eval(i, k as f64 / segments as f64);
        }
    }
    // the interpolation formula would only approach the endpoint; write it exactly
    buffer[interval_count * segments] = points[interval_count % n];

    if closed {
        close_loop(&mut buffer);
    }
    buffer
}

/// Sample straight segments between consecutive control points.
pub fn sample_piecewise_linear(points: &[Point3], segments: usize, closed: bool) -> Vec<Point3> {
    let n = points.len();
    sample_with(points, segments, closed, |i, t| {
        let current = points[i];
        let next = points[(i + 1) % n];
        (1.0 - t) * current + t * next
    })
}

/// Sample a C2 cardinal spline through the control points.
///
/// Open curves use the classical clamped end condition (zero end slope per
/// axis); closed curves fit the periodic system.
pub fn sample_cardinal(points: &[Point3], segments: usize, closed: bool) -> Vec<Point3> {
    let ends = EndDerivatives::Pinned { start: 0.0, end: 0.0 };
    let [x, y, z] = axis_values(points);
    let sx = CardinalSpline1d::fit(&x, closed, ends);
    let sy = CardinalSpline1d::fit(&y, closed, ends);
    let sz = CardinalSpline1d::fit(&z, closed, ends);
    sample_with(points, segments, closed, |i, t| {
        let u = i as f64 + t;
        Point3::new(sx.evaluate(u), sy.evaluate(u), sz.evaluate(u))
    })
}

/// Sample a Kochanek-Bartels spline through the control points.
///
/// With `ends_copy_nearest_derivatives` the end slopes are pinned to the
/// first and last segment's finite difference per axis; otherwise each axis
/// spline derives its end slopes from the nearest two knots.
pub fn sample_kochanek(
    points: &[Point3],
    segments: usize,
    closed: bool,
    shape: KochanekShape,
    ends_copy_nearest_derivatives: bool,
) -> Vec<Point3> {
    let n = points.len();
    let [x, y, z] = axis_values(points);
    let fit_axis = |values: &[f64]| {
        let ends = if ends_copy_nearest_derivatives {
            EndDerivatives::Pinned {
                start: values[1] - values[0],
                end: values[n - 1] - values[n - 2],
            }
        } else {
            EndDerivatives::Automatic
        };
        KochanekSpline1d::fit(values, closed, shape, ends)
    };
    let sx = fit_axis(&x);
    let sy = fit_axis(&y);
    let sz = fit_axis(&z);
    sample_with(points, segments, closed, |i, t| {
        let u = i as f64 + t;
        Point3::new(sx.evaluate(u), sy.evaluate(u), sz.evaluate(u))
    })
}

fn axis_values(points: &[Point3]) -> [Vec<f64>; 3] {
    [
        points.iter().map(|p| p.x).collect(),
        points.iter().map(|p| p.y).collect(),
        points.iter().map(|p| p.z).collect(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count_invariants() {
        assert_eq!(curve_point_count(4, 5, false), 16);
        assert_eq!(curve_point_count(4, 5, true), 22);
        assert_eq!(curve_point_count(2, 1, false), 2);
    }

    #[test]
    fn test_linear_two_points() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)];
        let sampled = sample_piecewise_linear(&points, 5, false);
        assert_eq!(sampled.len(), 6);
        for (i, p) in sampled.iter().enumerate() {
            assert_eq!(*p, Point3::new(2.0 * i as f64, 0.0, 0.0));
        }
    }

    #[test]
    fn test_linear_final_point_exact() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(0.1, 0.2, 0.3), Point3::new(-0.7, 0.4, 1.1)];
        let sampled = sample_piecewise_linear(&points, 7, false);
        assert_eq!(*sampled.last().unwrap(), points[2]);
    }

    #[test]
    fn test_loop_closure_seam() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let segments = 4;
        let sampled = sample_piecewise_linear(&points, segments, true);
        assert_eq!(sampled.len(), 18);

        // Both seam slots hold the midpoint of the original first two samples.
        let expected = 0.5 * Point3::new(0.0, 0.0, 0.0) + 0.5 * Point3::new(0.25, 0.0, 0.0);
        assert_eq!(sampled[0], expected);
        assert_eq!(sampled[17], expected);
        assert_eq!(sampled[0], sampled[17]);
    }

    #[test]
    fn test_cardinal_interpolates_control_points() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(3.0, 1.0, -1.0),
            Point3::new(4.0, 4.0, 2.0),
        ];
        let segments = 5;
        let sampled = sample_cardinal(&points, segments, false);
        assert_eq!(sampled.len(), 16);
        for (i, p) in points.iter().enumerate() {
            let s = sampled[i * segments];
            assert!((s - *p).length() < 1e-9, "control point {i} missed: {s:?}");
        }
    }

    #[test]
    fn test_kochanek_interpolates_control_points() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(3.0, 1.0, -1.0),
            Point3::new(4.0, 4.0, 2.0),
        ];
        let segments = 3;
        let sampled = sample_kochanek(&points, segments, false, KochanekShape::default(), true);
        assert_eq!(sampled.len(), 10);
        for (i, p) in points.iter().enumerate() {
            let s = sampled[i * segments];
            assert!((s - *p).length() < 1e-9, "control point {i} missed: {s:?}");
        }
    }

    #[test]
    fn test_closed_cardinal_buffer_size() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ];
        let sampled = sample_cardinal(&points, 4, true);
        assert_eq!(sampled.len(), curve_point_count(3, 4, true));
        assert_eq!(sampled[0], *sampled.last().unwrap());
    }
}
