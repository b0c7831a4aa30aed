//! Total-ionizing-dose threshold shift
//!
//! Trapped oxide charge shifts Vth linearly with accumulated dose.

/// Threshold shift per unit dose [V/krad]
pub const SHIFT_PER_KRAD: f64 = 0.001;

/// Threshold voltage shift [V] after `dose_krad` of total ionizing dose.
pub fn radiation_shift(dose_krad: f64) -> f64 {
    SHIFT_PER_KRAD * dose_krad
}
