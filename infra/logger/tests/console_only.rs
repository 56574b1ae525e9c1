use scriba_domain::config::LoggingConfig;
use scriba_logger::Logger;

#[test]
fn default_config_logs_to_console_only() {
    let logger =
        Logger::init("scriba-console-only", &LoggingConfig::default()).expect("logger should initialize");

    assert!(!logger.writes_files(), "console-only logger should not own a file writer");
}
