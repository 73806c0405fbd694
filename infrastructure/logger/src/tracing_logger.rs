use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// [`Logger`] backed by `tracing`; output depends on the installed subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Kiosk -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Kiosk -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Kiosk -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Kiosk -- ", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_log_through_port_without_subscriber() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        logger.debug("debug");
    }
}
