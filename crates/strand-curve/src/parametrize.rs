//! Curve-parameter assignment for the polynomial fitter.
//!
//! Each control point gets a scalar in `[0, 1]`; the fitter regresses the
//! coordinates against these parameters. Two strategies are provided: plain
//! index spacing, and geodesic distance along a minimum spanning tree for
//! point sets whose insertion order is unreliable.

use strand_core::{Result, StrandError};
use strand_math::Point3;

/// Assign `i / (N-1)` to each point, in insertion order.
pub fn parameters_from_indices(points: &[Point3]) -> Result<Vec<f64>> {
    let n = points.len();
    if n < 2 {
        return Err(StrandError::DegenerateInput(format!(
            "need at least 2 points to assign curve parameters, got {n}"
        )));
    }
    Ok((0..n).map(|i| i as f64 / (n - 1) as f64).collect())
}

/// Assign parameters by geodesic distance along a minimum spanning tree.
///
/// The two most mutually distant points become the trunk endpoints: Prim's
/// algorithm grows a spanning tree from one of them, the parent chain of the
/// other is the trunk, and each trunk vertex gets its cumulative trunk
/// distance normalized by the total trunk length. Every off-trunk vertex
/// inherits the parameter of the trunk vertex its branch hangs from.
///
/// Fails when the trunk has zero length (all points coincident), since the
/// parameters cannot be normalized.
pub fn parameters_from_minimum_spanning_tree(points: &[Point3]) -> Result<Vec<f64>> {
    let n = points.len();
    if n < 2 {
        return Err(StrandError::DegenerateInput(format!(
            "need at least 2 points to assign curve parameters, got {n}"
        )));
    }

    // Complete Euclidean graph as a flat N x N matrix, and the most
    // mutually distant pair while we are at it.
    let mut distances = vec![0.0; n * n];
    let mut trunk_start = 0;
    let mut trunk_end = 0;
    let mut max_distance = 0.0;
    for v in 0..n {
        for u in 0..n {
            let d = points[v].distance(points[u]);
            distances[v * n + u] = d;
            if d > max_distance {
                max_distance = d;
                trunk_start = v;
                trunk_end = u;
            }
        }
    }

    // Prim's algorithm rooted at trunk_start. The root parents itself so a
    // parent walk terminates there.
    let mut parent: Vec<usize> = vec![trunk_start; n];
    let mut key = vec![f64::MAX; n];
    let mut in_tree = vec![false; n];
    key[trunk_start] = 0.0;
    for _ in 0..n - 1 {
        let mut next = trunk_start;
        let mut min_key = f64::MAX;
        for v in 0..n {
            if !in_tree[v] && key[v] < min_key {
                min_key = key[v];
                next = v;
            }
        }
        in_tree[next] = true;
        for v in 0..n {
            let weight = distances[next * n + v];
            if !in_tree[v] && weight < key[v] {
                parent[v] = next;
                key[v] = weight;
            }
        }
    }

    // Trunk: parent chain from the far endpoint, oriented start -> end.
    let mut trunk = vec![trunk_end];
    let mut current = trunk_end;
    while parent[current] != current {
        current = parent[current];
        trunk.push(current);
    }
    trunk.reverse();

    let mut total_length = 0.0;
    for pair in trunk.windows(2) {
        total_length += distances[pair[0] * n + pair[1]];
    }
    if total_length == 0.0 {
        return Err(StrandError::DegenerateInput(
            "minimum spanning tree trunk has zero length (duplicate points?)".to_string(),
        ));
    }

    // Cumulative normalized distance per trunk position; the accumulation
    // repeats the summation above, so the last parameter is exactly 1.0.
    let mut trunk_parameters = Vec::with_capacity(trunk.len());
    let mut distance_so_far = 0.0;
    for pair in trunk.windows(2) {
        trunk_parameters.push(distance_so_far / total_length);
        distance_so_far += distances[pair[0] * n + pair[1]];
    }
    trunk_parameters.push(distance_so_far / total_length);

    let mut trunk_position: Vec<Option<usize>> = vec![None; n];
    for (position, &vertex) in trunk.iter().enumerate() {
        trunk_position[vertex] = Some(position);
    }

    // Walk each branch up to the trunk; the root is always on the trunk, so
    // the walk terminates.
    let mut parameters = vec![0.0; n];
    for (i, parameter) in parameters.iter_mut().enumerate() {
        let mut current = i;
        let position = loop {
            if let Some(position) = trunk_position[current] {
                break position;
            }
            current = parent[current];
        };
        *parameter = trunk_parameters[position];
    }
    Ok(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_exact_spacing() {
        let points = vec![Point3::ZERO; 5];
        let params = parameters_from_indices(&points).unwrap();
        assert_eq!(params, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_indices_rejects_single_point() {
        assert!(parameters_from_indices(&[Point3::ZERO]).is_err());
    }

    #[test]
    fn test_mst_collinear_points() {
        // Points on a line, deliberately out of insertion order.
        let points = [
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(7.0, 0.0, 0.0),
        ];
        let params = parameters_from_minimum_spanning_tree(&points).unwrap();
        // Trunk runs between x = 0 and x = 10; parameters are arc-length
        // fractions along it, in one orientation or the other.
        let expected = [0.4, 0.0, 1.0, 0.7];
        let flipped = [0.6, 1.0, 0.0, 0.3];
        let matches = |target: &[f64; 4]| {
            params
                .iter()
                .zip(target)
                .all(|(p, e)| (p - e).abs() < 1e-12)
        };
        assert!(
            matches(&expected) || matches(&flipped),
            "unexpected parameters {params:?}"
        );
    }

    #[test]
    fn test_mst_endpoints_exact() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.5, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.5, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        ];
        let params = parameters_from_minimum_spanning_tree(&points).unwrap();
        let min = params.iter().cloned().fold(f64::MAX, f64::min);
        let max = params.iter().cloned().fold(f64::MIN, f64::max);
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
    }

    #[test]
    fn test_mst_branch_inherits_trunk_parameter() {
        // Three points far apart on a line plus one hanging off the middle;
        // the branch point inherits the middle vertex's parameter.
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(5.0, 1.0, 0.0),
        ];
        let params = parameters_from_minimum_spanning_tree(&points).unwrap();
        assert!((params[3] - params[1]).abs() < 1e-12);
        assert!((params[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mst_monotonic_along_trunk() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 0.5, 1.0),
            Point3::new(3.5, 0.0, 0.5),
            Point3::new(5.0, 1.0, 0.0),
        ];
        let params = parameters_from_minimum_spanning_tree(&points).unwrap();
        for p in &params {
            assert!((0.0..=1.0).contains(p));
        }
    }

    #[test]
    fn test_mst_rejects_coincident_points() {
        let points = vec![Point3::new(1.0, 2.0, 3.0); 4];
        let err = parameters_from_minimum_spanning_tree(&points).unwrap_err();
        assert!(matches!(err, StrandError::DegenerateInput(_)));
    }
}
