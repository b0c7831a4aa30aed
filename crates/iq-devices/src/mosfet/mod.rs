//! Single-gate MOSFET drain current (square-law, rule based)
//!
//! ## Module Structure
//!
//! - `params`: Device parameters (DeviceParameters) and the oxide permittivity
//! - `types`: Operating region and evaluation output
//! - `evaluate`: Region selection and drain current
//!
//! ## Usage
//!
//! ```
//! use iq_devices::mosfet::{evaluate_mosfet_dc, DeviceParameters, MosRegion};
//!
//! let params = DeviceParameters {
//!     vg: 1.0,
//!     tox: 1.5e-9,
//!     mobility: 200e-4,
//!     vth: 0.4,
//! };
//! let out = evaluate_mosfet_dc(&params, 1.2).unwrap();
//! assert_eq!(out.region, MosRegion::Saturation);
//! ```

pub mod evaluate;
pub mod params;
pub mod types;

pub use evaluate::{evaluate_mosfet_dc, mosfet_iv};
pub use params::{DeviceParameters, EPSILON_OX};
pub use types::{MosRegion, MosfetOutput};
