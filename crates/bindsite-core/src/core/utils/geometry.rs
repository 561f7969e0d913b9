use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Total mass of the selection is zero; the center of mass is undefined.")]
    ZeroTotalMass,
}

/// Computes the mass-weighted average position of a set of point masses.
///
/// Accepts `(position, mass)` pairs in any order; grouping and ordering of the
/// input have no effect on the result. Plain floating-point accumulation is
/// used, which is adequate for the tens to low hundreds of points a binding
/// site produces.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroTotalMass`] when the input is empty or every
/// mass is zero, instead of letting the division produce NaN.
pub fn center_of_mass(
    weighted_points: impl IntoIterator<Item = (Point3<f64>, f64)>,
) -> Result<Point3<f64>, GeometryError> {
    let mut total_mass = 0.0;
    let mut weighted_sum = Vector3::zeros();

    for (position, mass) in weighted_points {
        total_mass += mass;
        weighted_sum += position.coords * mass;
    }

    if total_mass == 0.0 {
        return Err(GeometryError::ZeroTotalMass);
    }

    Ok(Point3::from(weighted_sum / total_mass))
}
