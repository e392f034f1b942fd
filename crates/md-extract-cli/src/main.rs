use anyhow::{Context, Result};
use clap::Parser;
use md_extract_config::{Config, OutputFormat};
use md_extract_engine::{Extractor, NodeType};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Print the literal text of markdown nodes of one type
#[derive(Debug, Parser)]
#[command(name = "md-extract", version, about)]
struct Cli {
    /// Node type to extract, e.g. Heading or Strong (see --list-types)
    #[arg(required_unless_present_any = ["list_types", "write_config"])]
    node_type: Option<String>,

    /// Markdown file to read; stdin when absent or `-`
    file: Option<PathBuf>,

    /// Output format: lines or json (overrides the config file). `lines` does
    /// not delimit literals that contain newlines; use json for those
    #[arg(long, short)]
    format: Option<OutputFormat>,

    /// Config file to use instead of ~/.config/md-extract/config.toml
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// List the accepted node types and whether they can be extracted
    #[arg(long)]
    list_types: bool,

    /// Write the effective configuration (including --format) to the config
    /// file and exit
    #[arg(long, conflicts_with = "list_types")]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&cli, io::stdin(), &mut out) {
        log::debug!("md-extract failed: {e:?}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run<R: Read, W: Write>(cli: &Cli, stdin: R, out: &mut W) -> Result<()> {
    if cli.list_types {
        return list_types(out);
    }

    let config = Config::load_or_default(cli.config.as_deref())?;
    if cli.write_config {
        return write_config(cli, config, out);
    }

    let node_type = cli
        .node_type
        .as_deref()
        .context("No node type given")?;
    let markdown = read_input(cli.file.as_deref(), stdin)?;

    let extractor = Extractor::new(config.parser);
    log::debug!("Using parser options: {:?}", extractor.options());
    let literals = extractor.extract(&markdown, node_type)?;

    let format = cli.format.unwrap_or(config.output.format);
    write_literals(&literals, format, out)
}

fn write_config<W: Write>(cli: &Cli, mut config: Config, out: &mut W) -> Result<()> {
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    let config_path = Config::resolve_path(cli.config.as_deref());
    config
        .save_to_path(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    log::info!("Wrote config to {}", config_path.display());
    writeln!(out, "{}", config_path.display())?;
    Ok(())
}

fn read_input<R: Read>(file: Option<&Path>, mut stdin: R) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut markdown = String::new();
            stdin
                .read_to_string(&mut markdown)
                .context("Failed to read markdown from stdin")?;
            Ok(markdown)
        }
    }
}

fn write_literals<W: Write>(literals: &[String], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Lines => {
            for literal in literals {
                writeln!(out, "{literal}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, literals)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn list_types<W: Write>(out: &mut W) -> Result<()> {
    for node_type in NodeType::ALL {
        let status = if node_type.is_supported() {
            "supported"
        } else {
            "unsupported"
        };
        writeln!(out, "{node_type}\t{status}")?;
    }
    Ok(())
}
