//! Interactive contract generation CLI
//!
//! Collects the outorgante's data field by field, normalizes it, and
//! renders every registered contract into the output directory.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use contract_engine::{ContractGenerator, DocumentSink, JsonSink, MarkdownSink};
use formatter_engine::Formatter;
use owo_colors::OwoColorize;
use shared_types::FirmConfig;
use std::fs;
use std::path::PathBuf;
use tracing::info;

mod collector;

#[derive(Parser)]
#[command(
    name = "contract-cli",
    version,
    about = "Geração de contratos da sociedade"
)]
struct Cli {
    /// Directory where generated contracts are written
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Serialization format for the rendered documents
    #[arg(long, value_enum, default_value = "json")]
    format: SinkFormat,

    /// Signing date (DD/MM/AAAA); skips the date prompt
    #[arg(long)]
    date: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SinkFormat {
    /// Span structure for the document writer
    Json,
    /// Readable preview with bold markers
    Markdown,
}

impl SinkFormat {
    fn sink(self) -> Box<dyn DocumentSink> {
        match self {
            SinkFormat::Json => Box::new(JsonSink),
            SinkFormat::Markdown => Box::new(MarkdownSink),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("contract_cli=info".parse()?)
                .add_directive("contract_engine=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let formatter = Formatter::default();
    let firm = FirmConfig::default();

    println!("{}", "=".repeat(60));
    println!("SISTEMA DE GERAÇÃO DE CONTRATOS - {}", firm.name);
    println!("{}", "=".repeat(60));

    let record = collector::collect_record(&formatter, cli.date.as_deref())?;
    collector::show_summary(&record);

    if !collector::confirm("Confirmar e gerar contratos? (S/N):")? {
        println!("\n{}", "Operação cancelada.".red());
        return Ok(());
    }

    fs::create_dir_all(&cli.output_dir)?;
    let sink = cli.format.sink();
    let generator = ContractGenerator::new(firm);

    println!("\n{}", "GERANDO CONTRATOS...".bold());

    let results = generator.generate_all(&record);
    let total = results.len();
    let mut generated = 0;

    for (info, result) in results {
        match result.and_then(|doc| {
            let bytes = sink.render(&doc.document)?;
            let filename = format!("{}.{}", doc.file_stem, sink.extension());
            fs::write(cli.output_dir.join(&filename), bytes)?;
            Ok(filename)
        }) {
            Ok(filename) => {
                generated += 1;
                println!("{} {:<25} {}", "✓".green(), info.title, filename.dimmed());
            }
            Err(err) => {
                println!("{} {:<25} {}", "✗".red(), info.title, err);
            }
        }
    }

    println!("\n{}/{} contratos gerados", generated, total);
    if generated > 0 {
        info!("output written to {}", cli.output_dir.display());
        println!("Pasta de saída: {}", cli.output_dir.display());
    }

    Ok(())
}
