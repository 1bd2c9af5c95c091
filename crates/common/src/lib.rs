//! Shared helpers for the pager workspace.

pub mod utils;

#[cfg(test)]
mod tests {
    use super::utils::logging;

    #[test]
    fn logging_init_is_idempotent() {
        logging::init_logging_default();
        logging::init_logging_json();
        logging::init_logging_default();
        tracing::info!(event = "logger_init", "tracing subscriber initialized");
    }
}
