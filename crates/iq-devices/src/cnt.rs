//! Carbon nanotube geometry from chirality
//!
//! ```text
//! d  = a_cc * sqrt(n^2 + m^2 + n*m)      [nm]
//! Eg = 0.82 / d                          [eV]
//! ```
//!
//! A tube is metallic when (n - m) is a multiple of three.

use crate::error::DeviceError;

/// Diameter prefactor [nm]
pub const DIAMETER_PREFACTOR: f64 = 0.0783;
/// Bandgap-diameter product [eV*nm]
pub const BANDGAP_DIAMETER_PRODUCT: f64 = 0.82;

/// Electronic character of a nanotube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CntKind {
    Metallic,
    Semiconducting,
}

impl CntKind {
    pub fn is_metallic(self) -> bool {
        self == CntKind::Metallic
    }
}

/// Diameter, bandgap and character of an (n, m) nanotube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CntProperties {
    /// Tube diameter [nm]
    pub diameter_nm: f64,
    /// Bandgap [eV]
    pub bandgap_ev: f64,
    pub kind: CntKind,
}

/// Classify an (n, m) tube.
///
/// The remainder is taken Euclidean so that n < m classifies the same way as
/// the mirrored (m, n) tube.
pub fn classify_chirality(n: u32, m: u32) -> CntKind {
    let diff = i64::from(n) - i64::from(m);
    if diff.rem_euclid(3) == 0 {
        CntKind::Metallic
    } else {
        CntKind::Semiconducting
    }
}

/// Diameter [nm] of an (n, m) tube.
pub fn cnt_diameter(n: u32, m: u32) -> f64 {
    let (n, m) = (f64::from(n), f64::from(m));
    DIAMETER_PREFACTOR * (n * n + m * m + n * m).sqrt()
}

/// Diameter, bandgap and classification of an (n, m) tube.
///
/// Fails for (0, 0), the only index pair with zero diameter.
pub fn cnt_bandgap(n: u32, m: u32) -> Result<CntProperties, DeviceError> {
    let diameter_nm = cnt_diameter(n, m);
    if diameter_nm <= 0.0 {
        return Err(DeviceError::DegenerateChirality { n, m });
    }
    Ok(CntProperties {
        diameter_nm,
        bandgap_ev: BANDGAP_DIAMETER_PRODUCT / diameter_nm,
        kind: classify_chirality(n, m),
    })
}
