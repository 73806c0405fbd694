use business::domain::price::errors::PriceError;
use business::domain::scan::errors::ScanError;

/// Text shown to the shopper in place of the failing panel.
pub trait IntoUserMessage {
    fn user_message(&self) -> String;
}

impl IntoUserMessage for ScanError {
    fn user_message(&self) -> String {
        match self {
            ScanError::EngineStart(reason) => format!("Camera unavailable: {}", reason),
        }
    }
}

impl IntoUserMessage for PriceError {
    fn user_message(&self) -> String {
        // Malformed bodies look the same as transport failures to the shopper.
        match self {
            PriceError::Transport(_)
            | PriceError::UnexpectedStatus(_)
            | PriceError::MalformedResponse(_) => "Could not load price data".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_camera_failure() {
        let message = ScanError::engine_start("permission denied").user_message();

        assert_eq!(message, "Camera unavailable: permission denied");
    }

    #[test]
    fn should_show_same_message_for_every_price_failure() {
        let errors = [
            PriceError::transport("connection refused"),
            PriceError::unexpected_status(502),
            PriceError::malformed_response("expected f64"),
        ];

        for error in errors {
            assert_eq!(error.user_message(), "Could not load price data");
        }
    }
}
