//! Bounded inputs of each mode
//!
//! Parameter structs hold values in dashboard units (nm, cm^2/Vs, krad) and
//! convert to SI before any formula sees them. Every struct defaults to its
//! slider defaults and serializes with field names equal to the slider keys.

use serde::{Deserialize, Serialize};

use iq_devices::DeviceParameters;

use crate::error::CoreError;

/// Meters per nanometer
pub const NM: f64 = 1e-9;
/// m^2/Vs per cm^2/Vs
pub const CM2_PER_VS: f64 = 1e-4;

const FLOAT_STEP: f64 = 0.01;
const INT_STEP: f64 = 1.0;

/// One bounded dashboard input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderSpec {
    /// Field name in the parameter struct
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    pub integer: bool,
}

impl SliderSpec {
    const fn float(
        key: &'static str,
        label: &'static str,
        unit: &'static str,
        min: f64,
        max: f64,
        default: f64,
    ) -> Self {
        Self {
            key,
            label,
            unit,
            min,
            max,
            default,
            step: FLOAT_STEP,
            integer: false,
        }
    }

    const fn int(key: &'static str, label: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self {
            key,
            label,
            unit: "",
            min,
            max,
            default,
            step: INT_STEP,
            integer: true,
        }
    }

    /// Reject values the slider could not produce.
    pub fn check(&self, value: f64) -> Result<f64, CoreError> {
        if !value.is_finite() {
            return Err(CoreError::NotFinite { name: self.key });
        }
        if value < self.min || value > self.max {
            return Err(CoreError::OutOfRange {
                name: self.key,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

/// Shared behaviour of the per-mode parameter structs.
pub trait ModeParams {
    /// Sliders in the same order as [`ModeParams::values`].
    const SLIDERS: &'static [SliderSpec];

    /// Current values in dashboard units.
    fn values(&self) -> Vec<f64>;

    fn validate(&self) -> Result<(), CoreError> {
        for (spec, value) in Self::SLIDERS.iter().zip(self.values()) {
            spec.check(value)?;
        }
        Ok(())
    }
}

// ============ MOSFET I-V ============

pub const MOSFET_VG: SliderSpec =
    SliderSpec::float("vg", "Gate Voltage Vg (V)", "V", 0.0, 2.0, 1.0);
pub const MOSFET_TOX: SliderSpec =
    SliderSpec::float("tox_nm", "Oxide Thickness tox (nm)", "nm", 0.5, 5.0, 1.5);
pub const MOSFET_MOBILITY: SliderSpec =
    SliderSpec::float("mobility_cm2", "Mobility (cm²/Vs)", "cm²/Vs", 50.0, 500.0, 200.0);
pub const MOSFET_VTH: SliderSpec =
    SliderSpec::float("vth", "Threshold Voltage (V)", "V", 0.1, 1.0, 0.4);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosfetIvParams {
    /// Gate voltage [V]
    pub vg: f64,
    /// Oxide thickness [nm]
    pub tox_nm: f64,
    /// Channel mobility [cm^2/Vs]
    pub mobility_cm2: f64,
    /// Threshold voltage [V]
    pub vth: f64,
}

impl Default for MosfetIvParams {
    fn default() -> Self {
        Self {
            vg: MOSFET_VG.default,
            tox_nm: MOSFET_TOX.default,
            mobility_cm2: MOSFET_MOBILITY.default,
            vth: MOSFET_VTH.default,
        }
    }
}

impl ModeParams for MosfetIvParams {
    const SLIDERS: &'static [SliderSpec] = &[MOSFET_VG, MOSFET_TOX, MOSFET_MOBILITY, MOSFET_VTH];

    fn values(&self) -> Vec<f64> {
        vec![self.vg, self.tox_nm, self.mobility_cm2, self.vth]
    }
}

impl MosfetIvParams {
    pub fn to_device(&self) -> DeviceParameters {
        DeviceParameters {
            vg: self.vg,
            tox: self.tox_nm * NM,
            mobility: self.mobility_cm2 * CM2_PER_VS,
            vth: self.vth,
        }
    }
}

// ============ Double Gate ============

pub const DG_THICKNESS: SliderSpec =
    SliderSpec::float("thickness_nm", "Silicon Body Thickness (nm)", "nm", 2.0, 20.0, 10.0);
pub const DG_TOX: SliderSpec =
    SliderSpec::float("tox_nm", "Oxide Thickness tox (nm)", "nm", 0.5, 5.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoubleGateParams {
    /// Silicon body thickness [nm]
    pub thickness_nm: f64,
    /// Oxide thickness [nm]
    pub tox_nm: f64,
}

impl Default for DoubleGateParams {
    fn default() -> Self {
        Self {
            thickness_nm: DG_THICKNESS.default,
            tox_nm: DG_TOX.default,
        }
    }
}

impl ModeParams for DoubleGateParams {
    const SLIDERS: &'static [SliderSpec] = &[DG_THICKNESS, DG_TOX];

    fn values(&self) -> Vec<f64> {
        vec![self.thickness_nm, self.tox_nm]
    }
}

impl DoubleGateParams {
    /// (thickness, tox) in meters
    pub fn to_si(&self) -> (f64, f64) {
        (self.thickness_nm * NM, self.tox_nm * NM)
    }
}

// ============ CNT ============

pub const CNT_N: SliderSpec = SliderSpec::int("n", "n index", 1.0, 30.0, 10.0);
pub const CNT_M: SliderSpec = SliderSpec::int("m", "m index", 1.0, 30.0, 10.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CntParams {
    pub n: u32,
    pub m: u32,
}

impl Default for CntParams {
    fn default() -> Self {
        Self {
            n: CNT_N.default as u32,
            m: CNT_M.default as u32,
        }
    }
}

impl ModeParams for CntParams {
    const SLIDERS: &'static [SliderSpec] = &[CNT_N, CNT_M];

    fn values(&self) -> Vec<f64> {
        vec![f64::from(self.n), f64::from(self.m)]
    }
}

// ============ Mobility ============

pub const MOBILITY_MU0: SliderSpec =
    SliderSpec::float("mu0_cm2", "Low-field mobility (cm²/Vs)", "cm²/Vs", 10.0, 500.0, 300.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobilityParams {
    /// Low-field mobility [cm^2/Vs]
    pub mu0_cm2: f64,
}

impl Default for MobilityParams {
    fn default() -> Self {
        Self {
            mu0_cm2: MOBILITY_MU0.default,
        }
    }
}

impl ModeParams for MobilityParams {
    const SLIDERS: &'static [SliderSpec] = &[MOBILITY_MU0];

    fn values(&self) -> Vec<f64> {
        vec![self.mu0_cm2]
    }
}

impl MobilityParams {
    /// Low-field mobility [m^2/Vs]
    pub fn mu0_si(&self) -> f64 {
        self.mu0_cm2 * CM2_PER_VS
    }
}

// ============ Radiation ============

pub const RADIATION_DOSE: SliderSpec =
    SliderSpec::float("dose_krad", "Total Ionizing Dose (krad)", "krad", 0.0, 500.0, 50.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiationParams {
    /// Total ionizing dose [krad]
    pub dose_krad: f64,
}

impl Default for RadiationParams {
    fn default() -> Self {
        Self {
            dose_krad: RADIATION_DOSE.default,
        }
    }
}

impl ModeParams for RadiationParams {
    const SLIDERS: &'static [SliderSpec] = &[RADIATION_DOSE];

    fn values(&self) -> Vec<f64> {
        vec![self.dose_krad]
    }
}
