//! Closed-form nanoscale device models.
//!
//! Every function in this crate is pure: SI quantities in, SI quantities out,
//! no hidden state. The only failure paths are the two geometric
//! preconditions that would otherwise divide by zero, reported as
//! [`DeviceError`].
//!
//! | Module | Model |
//! |--------|-------|
//! | `mosfet` | Square-law single-gate MOSFET drain current |
//! | `double_gate` | Empirical double-gate threshold voltage |
//! | `cnt` | Carbon nanotube diameter, bandgap and metallicity |
//! | `mobility` | Lateral-field mobility degradation |
//! | `radiation` | Total-ionizing-dose threshold shift |

pub mod cnt;
pub mod double_gate;
pub mod error;
pub mod mobility;
pub mod mosfet;
pub mod radiation;

pub use cnt::{classify_chirality, cnt_bandgap, CntKind, CntProperties};
pub use double_gate::dg_threshold;
pub use error::DeviceError;
pub use mobility::mobility_degradation;
pub use mosfet::{evaluate_mosfet_dc, mosfet_iv, DeviceParameters, MosRegion, MosfetOutput};
pub use radiation::radiation_shift;
