use business::application::scan::session::ScanSnapshot;
use business::domain::scan::errors::ScanError;
use business::domain::scan::session::ScanStatus;

use super::error_mapper::IntoUserMessage;

#[derive(Debug, Clone, PartialEq)]
pub enum ScanPanel {
    Idle,
    Scanning,
    Detected { code: String },
    /// Replaces the video view when the camera could not be started.
    Unavailable { message: String },
}

impl ScanPanel {
    pub fn from_state(snapshot: &ScanSnapshot, start_error: Option<&ScanError>) -> Self {
        if let Some(err) = start_error {
            return ScanPanel::Unavailable {
                message: err.user_message(),
            };
        }
        match (&snapshot.status, &snapshot.decoded_value) {
            (ScanStatus::Decoded, Some(code)) => ScanPanel::Detected {
                code: code.to_string(),
            },
            (ScanStatus::Scanning, _) => ScanPanel::Scanning,
            _ => ScanPanel::Idle,
        }
    }

    pub fn render(&self) -> String {
        match self {
            ScanPanel::Idle => "Scanner stopped".to_string(),
            ScanPanel::Scanning => "Scanning...".to_string(),
            ScanPanel::Detected { code } => format!("Code detected: {}", code),
            ScanPanel::Unavailable { message } => message.clone(),
        }
    }
}
