//! Mode selection
//!
//! One enum variant per formula. [`ModeRequest`] carries the parameter struct
//! of its mode, so dispatch never branches on strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::params::{
    CntParams, DoubleGateParams, MobilityParams, ModeParams, MosfetIvParams, RadiationParams,
    SliderSpec,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    MosfetIv,
    DoubleGate,
    CntBandgap,
    Mobility,
    Radiation,
}

impl Mode {
    /// Dashboard order
    pub const ALL: [Mode; 5] = [
        Mode::MosfetIv,
        Mode::DoubleGate,
        Mode::CntBandgap,
        Mode::Mobility,
        Mode::Radiation,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Mode::MosfetIv => "mosfet-iv",
            Mode::DoubleGate => "double-gate",
            Mode::CntBandgap => "cnt-bandgap",
            Mode::Mobility => "mobility",
            Mode::Radiation => "radiation",
        }
    }

    /// Name shown in the mode selector
    pub fn name(self) -> &'static str {
        match self {
            Mode::MosfetIv => "MOSFET I-V",
            Mode::DoubleGate => "Double Gate MOS Threshold",
            Mode::CntBandgap => "CNT Bandgap Explorer",
            Mode::Mobility => "Mobility Degradation",
            Mode::Radiation => "Radiation TID Threshold Shift",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Mode::MosfetIv => "MOSFET I–V Simulator (Single Gate / Rule-Based)",
            Mode::DoubleGate => "Double Gate MOSFET Threshold Voltage Predictor",
            Mode::CntBandgap => "Carbon Nanotube Bandgap & Diameter Explorer",
            Mode::Mobility => "Mobility vs Electric Field (Velocity Saturation Effect)",
            Mode::Radiation => "Radiation-Induced Threshold Voltage Shift",
        }
    }

    pub fn sliders(self) -> &'static [SliderSpec] {
        match self {
            Mode::MosfetIv => MosfetIvParams::SLIDERS,
            Mode::DoubleGate => DoubleGateParams::SLIDERS,
            Mode::CntBandgap => CntParams::SLIDERS,
            Mode::Mobility => MobilityParams::SLIDERS,
            Mode::Radiation => RadiationParams::SLIDERS,
        }
    }

    pub fn info(self) -> ModeInfo {
        ModeInfo {
            slug: self.slug(),
            name: self.name(),
            header: self.header(),
            sliders: self.sliders().to_vec(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    /// Accepts a slug or a display name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, CoreError> {
        let s = s.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.slug().eq_ignore_ascii_case(s) || mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownMode(s.to_string()))
    }
}

/// Catalogue entry for one mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeInfo {
    pub slug: &'static str,
    pub name: &'static str,
    pub header: &'static str,
    pub sliders: Vec<SliderSpec>,
}

/// A mode together with the parameter values to evaluate it at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ModeRequest {
    MosfetIv(MosfetIvParams),
    DoubleGate(DoubleGateParams),
    CntBandgap(CntParams),
    Mobility(MobilityParams),
    Radiation(RadiationParams),
}

impl ModeRequest {
    /// Request for `mode` at its slider defaults
    pub fn defaults(mode: Mode) -> Self {
        match mode {
            Mode::MosfetIv => ModeRequest::MosfetIv(MosfetIvParams::default()),
            Mode::DoubleGate => ModeRequest::DoubleGate(DoubleGateParams::default()),
            Mode::CntBandgap => ModeRequest::CntBandgap(CntParams::default()),
            Mode::Mobility => ModeRequest::Mobility(MobilityParams::default()),
            Mode::Radiation => ModeRequest::Radiation(RadiationParams::default()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            ModeRequest::MosfetIv(_) => Mode::MosfetIv,
            ModeRequest::DoubleGate(_) => Mode::DoubleGate,
            ModeRequest::CntBandgap(_) => Mode::CntBandgap,
            ModeRequest::Mobility(_) => Mode::Mobility,
            ModeRequest::Radiation(_) => Mode::Radiation,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            ModeRequest::MosfetIv(p) => p.validate(),
            ModeRequest::DoubleGate(p) => p.validate(),
            ModeRequest::CntBandgap(p) => p.validate(),
            ModeRequest::Mobility(p) => p.validate(),
            ModeRequest::Radiation(p) => p.validate(),
        }
    }
}
