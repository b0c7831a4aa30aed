//! MOSFET device parameters

use crate::error::DeviceError;

/// Silicon dioxide permittivity [F/m]
pub const EPSILON_OX: f64 = 3.45e-11;

/// Bias and process parameters for one evaluation.
///
/// All fields are SI: volts, meters and m^2/(V*s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceParameters {
    /// Gate voltage [V]
    pub vg: f64,
    /// Gate oxide thickness [m]
    pub tox: f64,
    /// Channel mobility [m^2/V/s]
    pub mobility: f64,
    /// Threshold voltage [V]
    pub vth: f64,
}

impl DeviceParameters {
    /// Oxide capacitance per unit area [F/m^2]
    pub fn cox(&self) -> Result<f64, DeviceError> {
        if self.tox > 0.0 {
            Ok(EPSILON_OX / self.tox)
        } else {
            Err(DeviceError::NonPositiveOxide { tox: self.tox })
        }
    }

    /// Transconductance parameter k = mobility * Cox [A/V^2]
    pub fn k(&self) -> Result<f64, DeviceError> {
        Ok(self.mobility * self.cox()?)
    }

    /// Gate overdrive Vg - Vth [V]
    pub fn overdrive(&self) -> f64 {
        self.vg - self.vth
    }
}
