//! Lateral-field mobility degradation
//!
//! Carriers approach velocity saturation as the lateral field grows, which
//! shows up as an effective mobility
//!
//! ```text
//! mu(E) = mu0 / (1 + E / Ec),   Ec = 1e6 V/m
//! ```
//!
//! mu(0) = mu0 and mu falls monotonically toward zero. E = -Ec is a pole;
//! callers sweep non-negative fields.

/// Critical lateral field [V/m]
pub const CRITICAL_FIELD: f64 = 1e6;

/// Effective mobility at lateral field `efield` [V/m].
///
/// Unit of the result follows `mu0`.
pub fn mobility_degradation(efield: f64, mu0: f64) -> f64 {
    mu0 / (1.0 + efield / CRITICAL_FIELD)
}

/// Evaluate [`mobility_degradation`] at every field in `efields`.
pub fn mobility_curve<I>(efields: I, mu0: f64) -> impl Iterator<Item = (f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    efields
        .into_iter()
        .map(move |e| (e, mobility_degradation(e, mu0)))
}
