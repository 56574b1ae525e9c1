use scriba_domain::config::LoggingConfig;
use scriba_logger::Logger;
use std::fs;
use tempfile::tempdir;

#[test]
fn json_file_logging_writes_records() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let config = LoggingConfig {
        console: false,
        path: Some(log_dir.clone()),
        max_files: 2,
        json: true,
        filter: Some("info".to_owned()),
        ..LoggingConfig::default()
    };
    let logger = Logger::init("scriba-file-logging", &config)?;
    assert!(logger.writes_files());

    tracing::info!(eclass = "BTSLemmaEntry", "converted transfer object");
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.contains("BTSLemmaEntry"), "structured field should be written");
    assert!(contents.trim_start().starts_with('{'), "file layer should emit JSON");

    Ok(())
}
