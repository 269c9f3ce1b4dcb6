//! Tridiagonal linear solvers used by the cardinal spline fit.

/// Solve a tridiagonal system with the Thomas algorithm.
///
/// `sub[i]`, `diag[i]`, `sup[i]` are the bands of row `i` (`sub[0]` and
/// `sup[n-1]` are ignored). The system must be nonsingular.
pub fn solve_tridiagonal(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    debug_assert!(sub.len() == n && sup.len() == n && rhs.len() == n);
    debug_assert!(n >= 1);

    let mut c = vec![0.0; n];
    let mut x = vec![0.0; n];
    c[0] = sup[0] / diag[0];
    x[0] = rhs[0] / diag[0];
    for i in 1..n {
        let denom = diag[i] - sub[i] * c[i - 1];
        c[i] = sup[i] / denom;
        x[i] = (rhs[i] - sub[i] * x[i - 1]) / denom;
    }
    for i in (0..n - 1).rev() {
        let next = x[i + 1];
        x[i] -= c[i] * next;
    }
    x
}

/// Solve a cyclic tridiagonal system via the Sherman-Morrison correction.
///
/// `alpha` is the lower-left corner entry (row `n-1`, column 0) and `beta`
/// the upper-right one (row 0, column `n-1`). Requires `n >= 3`.
pub fn solve_cyclic_tridiagonal(
    sub: &[f64],
    diag: &[f64],
    sup: &[f64],
    rhs: &[f64],
    alpha: f64,
    beta: f64,
) -> Vec<f64> {
    let n = diag.len();
    debug_assert!(n >= 3);

    let gamma = -diag[0];
    let mut diag_mod = diag.to_vec();
    diag_mod[0] = diag[0] - gamma;
    diag_mod[n - 1] = diag[n - 1] - alpha * beta / gamma;

    let x = solve_tridiagonal(sub, &diag_mod, sup, rhs);

    let mut u = vec![0.0; n];
    u[0] = gamma;
    u[n - 1] = alpha;
    let z = solve_tridiagonal(sub, &diag_mod, sup, &u);

    let fact = (x[0] + beta * x[n - 1] / gamma) / (1.0 + z[0] + beta * z[n - 1] / gamma);
    x.iter().zip(&z).map(|(xi, zi)| xi - fact * zi).collect()
}
