use serde::{Deserialize, Serialize};

use iq_core::ModeInfo;

#[derive(Debug, Clone, Serialize)]
pub struct Catalogue {
    pub title: &'static str,
    pub caption: &'static str,
    pub modes: Vec<ModeInfo>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self {
            title: iq_core::APP_TITLE,
            caption: iq_core::APP_CAPTION,
            modes: iq_core::Mode::ALL.iter().map(|mode| mode.info()).collect(),
        }
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}
