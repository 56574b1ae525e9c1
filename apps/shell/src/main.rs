use anyhow::Context;
use clap::{Parser, Subcommand};
use scriba::domain::dto::{DocumentDto, SingleDocumentWrapper};
use scriba::kernel::config::load_scriba_config;
use scriba::mapping::Mapper;
use scriba_logger::Logger;
use std::io::{self, Write};
use std::path::PathBuf;

/// Inspect the type registry and convert backend documents offline.
#[derive(Debug, Parser)]
#[command(name = "scriba", version, about)]
struct Cli {
    /// Configuration file; defaults plus `SCRIBA__*` environment overrides otherwise.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List registered discriminants and their model types.
    Types,
    /// Convert a transfer-object JSON file and print the domain object.
    Convert {
        file: PathBuf,
        /// Read a detail response (`doc` plus `related`) instead of a bare document.
        #[arg(long)]
        details: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_scriba_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let _logger = Logger::init(env!("CARGO_BIN_NAME"), &config.logging)?;
    match cli.config.as_deref() {
        Some(path) => tracing::info!(path = %path.display(), "Configuration loaded"),
        None => tracing::info!("Configuration loaded from defaults and environment"),
    }
    let mapper = scriba::init(&config)?;
    tracing::debug!(command = ?cli.command, "Running");

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Types => print_types(&mut out, &mapper)?,
        Command::Convert { file, details } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            convert(&mut out, &mapper, &raw, details)?;
        },
    }
    Ok(())
}

fn print_types(out: &mut impl Write, mapper: &Mapper) -> io::Result<()> {
    for model in mapper.registry().types() {
        writeln!(out, "{:<16} {}", model.eclass(), model.type_name())?;
    }
    Ok(())
}

fn convert(out: &mut impl Write, mapper: &Mapper, raw: &str, details: bool) -> anyhow::Result<()> {
    if !details {
        let doc: DocumentDto = serde_json::from_str(raw).context("Not a transfer object")?;
        let object = mapper.convert(&doc)?;
        writeln!(out, "{object:#?}")?;
        return Ok(());
    }

    let wrapper: SingleDocumentWrapper = serde_json::from_str(raw).context("Not a detail response")?;
    let object = mapper.convert(&wrapper.doc)?;
    writeln!(out, "{object:#?}")?;

    match &wrapper.related {
        None => writeln!(out, "related: none declared")?,
        Some(block) => {
            let is_primary =
                |doc: &DocumentDto| doc.eclass() == wrapper.doc.eclass() && doc.id() == wrapper.doc.id();
            for (eclass, documents) in block {
                let docs: Vec<_> = documents.values().filter(|doc| !is_primary(doc)).cloned().collect();
                let related = mapper.convert_all(&docs)?;
                writeln!(out, "related {eclass} ({}):", related.len())?;
                for object in related {
                    writeln!(out, "{object:#?}")?;
                }
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use scriba::domain::config::ScribaConfig;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_convert_with_details() {
        let cli = Cli::try_parse_from(["scriba", "convert", "lemma.json", "--details", "--config", "x.toml"])
            .expect("valid arguments");
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
        assert!(matches!(cli.command, Command::Convert { details: true, .. }));
    }

    #[test]
    fn types_are_listed_in_discriminant_order() {
        let mapper = scriba::init(&ScribaConfig::default()).expect("init");
        let mut out = Vec::new();
        print_types(&mut out, &mapper).expect("write");

        let text = String::from_utf8(out).expect("utf8");
        let first: Vec<_> = text.lines().filter_map(|l| l.split_whitespace().next()).collect();
        assert_eq!(first, ["BTSAnnotation", "BTSLemmaEntry", "BTSThsEntry"]);
    }

    #[test]
    fn details_do_not_repeat_the_primary_object() {
        let mapper = scriba::init(&ScribaConfig::default()).expect("init");
        let raw = r#"{
            "doc": { "eclass": "BTSLemmaEntry", "id": "10070", "name": "jnk" },
            "related": {
                "BTSLemmaEntry": {
                    "10070": { "eclass": "BTSLemmaEntry", "id": "10070", "name": "jnk" },
                    "10071": { "eclass": "BTSLemmaEntry", "id": "10071", "name": "jnk.w" }
                },
                "BTSAnnotation": {
                    "ann1": { "eclass": "BTSAnnotation", "id": "ann1", "body": "text" }
                }
            }
        }"#;

        let mut out = Vec::new();
        convert(&mut out, &mapper, raw, true).expect("convert");
        let text = String::from_utf8(out).expect("utf8");

        assert!(text.contains("related BTSLemmaEntry (1):"));
        assert!(text.contains("related BTSAnnotation (1):"));
        assert_eq!(text.matches("\"10070\"").count(), 1);
        assert_eq!(text.matches("\"10071\"").count(), 1);
    }

    #[test]
    fn undeclared_relations_are_reported() {
        let mapper = scriba::init(&ScribaConfig::default()).expect("init");
        let raw = r#"{ "doc": { "eclass": "BTSAnnotation", "id": "a1" } }"#;

        let mut out = Vec::new();
        convert(&mut out, &mapper, raw, true).expect("convert");
        assert!(String::from_utf8(out).expect("utf8").ends_with("related: none declared\n"));
    }
}
