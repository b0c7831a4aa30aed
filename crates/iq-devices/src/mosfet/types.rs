//! MOSFET type definitions
//!
//! Operating region and the output of a DC evaluation.

use std::fmt;

/// Operating region of the MOSFET
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MosRegion {
    /// Cutoff: Vg < Vth
    #[default]
    Cutoff,
    /// Linear/Triode: Vg >= Vth, Vd < Vg - Vth
    Linear,
    /// Saturation: Vg >= Vth, Vd >= Vg - Vth
    Saturation,
}

impl fmt::Display for MosRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MosRegion::Cutoff => "cutoff",
            MosRegion::Linear => "linear",
            MosRegion::Saturation => "saturation",
        };
        f.write_str(name)
    }
}

/// Output from a DC evaluation at one drain voltage
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MosfetOutput {
    /// Drain current [A]
    pub id: f64,
    /// Transconductance dId/dVg [S]
    pub gm: f64,
    /// Output conductance dId/dVd [S]
    pub gds: f64,
    /// Operating region
    pub region: MosRegion,
}
