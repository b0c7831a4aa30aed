//! Double-gate MOSFET threshold voltage
//!
//! Empirical fit capturing two trends of thin-body devices:
//! quantum confinement raises Vth as the silicon body thins, and a thicker
//! oxide weakens gate control.
//!
//! ```text
//! Vth = 0.2 + 0.5 * exp(-tsi / 5nm) + 0.01 * tox[nm]
//! ```

/// Base threshold voltage [V]
const VTH_BASE: f64 = 0.2;
/// Amplitude of the confinement term [V]
const CONFINEMENT_AMPLITUDE: f64 = 0.5;
/// Decay length of the confinement term [m]
const CONFINEMENT_LENGTH: f64 = 5e-9;
/// Threshold increase per nanometer of oxide [V/nm]
const OXIDE_SLOPE: f64 = 0.01;

/// Threshold voltage [V] of a double-gate device.
///
/// # Arguments
/// * `thickness` - Silicon body thickness [m]
/// * `tox` - Gate oxide thickness [m]
pub fn dg_threshold(thickness: f64, tox: f64) -> f64 {
    VTH_BASE
        + CONFINEMENT_AMPLITUDE * (-thickness / CONFINEMENT_LENGTH).exp()
        + (tox * 1e9) * OXIDE_SLOPE
}
