use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards application log records to `tracing` under the `groceries` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "groceries", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "groceries", "{}", message);
    }
    fn error(&self, label: &str, message: &str) {
        error!(target: "groceries", label, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "groceries", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_log_without_subscriber() {
        let logger = TracingLogger;

        logger.info("created");
        logger.warn("no rows");
        logger.error("create_grocery", "connection refused");
        logger.debug("details");
    }
}
