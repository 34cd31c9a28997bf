//! Diffusion coefficient derivation and the explicit-scheme stability bound.

use thermocube_core::FieldError;

/// Largest `alpha` for which the explicit 3D 7-point stencil is stable.
///
/// Above this bound the centre weight `1 - 6 * alpha` turns negative and
/// the scheme oscillates and diverges. The field does not enforce it.
pub const MAX_STABLE_ALPHA: f64 = 1.0 / 6.0;

/// Derive the per-step diffusion coefficient
/// `alpha = k * dt / (rho * c * l²)`.
///
/// - `conductivity`: thermal conductivity `k` in W/(m·K)
/// - `density`: material density `rho` in kg/m³
/// - `specific_heat`: specific heat `c` in J/(kg·K)
/// - `dt`: time step in seconds
/// - `cell_length`: physical edge length `l` of one cell in metres
///
/// # Errors
///
/// `InvalidConfiguration` if any input is NaN or infinite, if `density`,
/// `specific_heat`, or `cell_length` is not strictly positive, or if the
/// result itself is not finite.
pub fn compute_alpha(
    conductivity: f64,
    density: f64,
    specific_heat: f64,
    dt: f64,
    cell_length: f64,
) -> Result<f64, FieldError> {
    let inputs = [
        ("conductivity", conductivity),
        ("density", density),
        ("specific_heat", specific_heat),
        ("dt", dt),
        ("cell_length", cell_length),
    ];
    for (name, value) in inputs {
        if !value.is_finite() {
            return Err(FieldError::invalid(format!(
                "{name} must be finite, got {value}"
            )));
        }
    }
    for (name, value) in [
        ("density", density),
        ("specific_heat", specific_heat),
        ("cell_length", cell_length),
    ] {
        if value <= 0.0 {
            return Err(FieldError::invalid(format!(
                "{name} must be > 0, got {value}"
            )));
        }
    }

    let alpha = conductivity * dt / (density * specific_heat * cell_length * cell_length);
    if !alpha.is_finite() {
        return Err(FieldError::invalid(format!(
            "alpha is not finite for cell_length {cell_length}"
        )));
    }
    Ok(alpha)
}

/// Whether `alpha` keeps the explicit scheme stable (`0 <= alpha <= 1/6`).
pub fn is_stable(alpha: f64) -> bool {
    (0.0..=MAX_STABLE_ALPHA).contains(&alpha)
}
