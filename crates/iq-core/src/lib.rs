//! Mode catalogue and evaluation engine for the IQ-MOS explorer.
//!
//! `iq-devices` holds the physics; this crate owns everything between a
//! dashboard and those formulas: the bounded inputs of each mode, unit
//! conversion to SI, sweep sampling, and the report a front end renders.

pub mod engine;
pub mod error;
pub mod mode;
pub mod params;
pub mod report;
pub mod sweep;

pub use engine::{evaluate, evaluate_defaults};
pub use error::CoreError;
pub use iq_devices::DeviceError;
pub use mode::{Mode, ModeInfo, ModeRequest};
pub use report::{Message, PlotSpec, Readout, Report, Severity};
pub use sweep::Linspace;

/// Application title shown above every mode
pub const APP_TITLE: &str = "IQ-MOS: Interactive Quantum-Aware Multigate MOSFET Simulator";
/// Subtitle shown under the title
pub const APP_CAPTION: &str = "No datasets. No ML. 100% physics-based nanoscale device simulator.";
