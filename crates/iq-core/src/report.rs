//! What a front end renders for one evaluation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Decimal places used for every scalar readout
pub const READOUT_DECIMALS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub mode: Mode,
    pub header: String,
    pub readouts: Vec<Readout>,
    pub message: Option<Message>,
    pub plot: Option<PlotSpec>,
}

impl Report {
    pub(crate) fn new(mode: Mode) -> Self {
        Self {
            mode,
            header: mode.header().to_string(),
            readouts: Vec::new(),
            message: None,
            plot: None,
        }
    }

    pub(crate) fn with_readout(mut self, label: &str, value: f64, unit: &str) -> Self {
        self.readouts.push(Readout {
            label: label.to_string(),
            value,
            unit: unit.to_string(),
        });
        self
    }

    pub(crate) fn with_message(mut self, severity: Severity, text: String) -> Self {
        self.message = Some(Message { severity, text });
        self
    }

    pub(crate) fn with_plot(mut self, plot: PlotSpec) -> Self {
        self.plot = Some(plot);
        self
    }

    pub fn readout(&self, label: &str) -> Option<&Readout> {
        self.readouts.iter().find(|r| r.label == label)
    }
}

/// A labelled scalar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    pub label: String,
    pub value: f64,
    pub unit: String,
}

impl Readout {
    /// Value rounded for display
    pub fn formatted(&self) -> String {
        format!("{:.*}", READOUT_DECIMALS, self.value)
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.label, self.formatted(), self.unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Info,
}

/// Qualitative verdict shown next to the readouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

/// A single 2-D line plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(f64, f64)>,
}

impl PlotSpec {
    pub(crate) fn new(title: &str, x_label: &str, y_label: &str, points: Vec<(f64, f64)>) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout_display_three_decimals() {
        let r = Readout {
            label: "Bandgap".to_string(),
            value: 0.604_63,
            unit: "eV".to_string(),
        };
        assert_eq!(r.to_string(), "Bandgap: 0.605 eV");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
