//! The curve-model pipeline: degenerate-input handling, strategy dispatch,
//! and mesh construction.

use strand_core::Result;
use strand_curve::{
    parameters_from_indices, parameters_from_minimum_spanning_tree, sample_cardinal,
    sample_kochanek, sample_piecewise_linear, PolynomialCurve,
};
use strand_math::Point3;
use strand_mesh::{sphere_mesh, tube_from_polyline, CurveModel, Polyline};

use crate::config::{CurveType, ParameterSource, TubeOptions};

/// Generate a curve model from ordered control points.
///
/// Degenerate inputs short-circuit before any curve machinery runs: zero
/// points produce `Ok(None)`, a single point produces a sphere at that point
/// (radius and tessellation taken from `tube`), and two points always use
/// the piecewise-linear sampler since splines and fits are degenerate there.
///
/// Failures (mismatched parameter counts, coincident points under the MST
/// parametrization) return an error and produce no model.
pub fn generate_curve_model(
    control_points: &[Point3],
    curve: &CurveType,
    tube: &TubeOptions,
) -> Result<Option<CurveModel>> {
    match control_points.len() {
        0 => return Ok(None),
        1 => {
            let sphere = sphere_mesh(
                control_points[0],
                tube.radius,
                tube.number_of_sides,
                tube.number_of_sides,
            );
            return Ok(Some(CurveModel::Sphere(sphere)));
        }
        2 => {
            let sampled =
                sample_piecewise_linear(control_points, tube.segments_between_points, tube.closed);
            return Ok(Some(model_from_curve_points(sampled, tube)));
        }
        _ => {}
    }

    let curve_points = match curve {
        CurveType::PiecewiseLinear => {
            sample_piecewise_linear(control_points, tube.segments_between_points, tube.closed)
        }
        CurveType::CardinalSpline => {
            sample_cardinal(control_points, tube.segments_between_points, tube.closed)
        }
        CurveType::KochanekSpline(options) => sample_kochanek(
            control_points,
            tube.segments_between_points,
            tube.closed,
            options.shape,
            options.ends_copy_nearest_derivatives,
        ),
        CurveType::Polynomial(options) => {
            let parameters = match &options.parameters {
                ParameterSource::UniformIndices => parameters_from_indices(control_points)?,
                ParameterSource::MinimumSpanningTree => {
                    parameters_from_minimum_spanning_tree(control_points)?
                }
                ParameterSource::Supplied(parameters) => parameters.clone(),
            };
            let fitted = PolynomialCurve::fit(control_points, &parameters, options.order)?;
            // The fit has no closed-curve variant; resampling is always open
            // and uniform in the curve parameter.
            fitted.resample((control_points.len() - 1) * tube.segments_between_points + 1)
        }
    };

    Ok(Some(model_from_curve_points(curve_points, tube)))
}

fn model_from_curve_points(points: Vec<Point3>, tube: &TubeOptions) -> CurveModel {
    if tube.radius > 0.0 {
        CurveModel::Tube(tube_from_polyline(&points, tube.radius, tube.number_of_sides))
    } else {
        CurveModel::Polyline(Polyline::new(points))
    }
}
