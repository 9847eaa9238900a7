//! xrd-openapi CLI
//!
//! Command-line interface for converting Crossplane composite resource
//! definitions into OpenAPI documents and provider generator configs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use xrd_openapi_common::DEFAULT_PROVIDER_NAME;
use xrd_openapi_generator::{convert_definition, ArtifactWriter, Conversion, ConvertOptions};
use xrd_openapi_parser::XrdParser;

#[derive(Parser)]
#[command(name = "xrd-openapi")]
#[command(version, about = "Generate OpenAPI documents from Crossplane XRDs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an XRD and write the OpenAPI document and provider config
    #[command(after_help = "EXAMPLES:\n  \
        # Convert an XRD into ./output\n  \
        xrd-openapi convert --xrd xwidgets.example.org.yaml\n\n  \
        # Pick the output directory and provider name\n  \
        xrd-openapi convert \\\n    \
        --xrd xwidgets.example.org.yaml \\\n    \
        --output ./provider-widgets \\\n    \
        --provider-name widgets")]
    Convert {
        /// Path to the XRD file (YAML or JSON)
        #[arg(short, long)]
        xrd: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Provider name written into the provider config
        #[arg(long, default_value = DEFAULT_PROVIDER_NAME)]
        provider_name: String,
    },

    /// Convert an XRD and display the result without writing files
    #[command(after_help = "EXAMPLES:\n  \
        xrd-openapi inspect --xrd xwidgets.example.org.yaml")]
    Inspect {
        /// Path to the XRD file (YAML or JSON)
        #[arg(short, long)]
        xrd: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Convert {
            xrd,
            output,
            provider_name,
        } => {
            convert_command(&xrd, &output, provider_name)?;
        }
        Commands::Inspect { xrd } => {
            inspect_command(&xrd)?;
        }
    }

    Ok(())
}

/// Install the stderr log subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_and_convert(xrd_path: &Path, options: &ConvertOptions) -> Result<Conversion> {
    println!("{} Reading XRD: {}", "→".cyan(), xrd_path.display());

    let parser = XrdParser::from_file(xrd_path)
        .with_context(|| format!("Failed to load XRD from {}", xrd_path.display()))?;

    convert_definition(parser.definition(), options)
        .with_context(|| format!("Failed to convert XRD {}", parser.definition().name()))
}

fn convert_command(xrd_path: &Path, output: &Path, provider_name: String) -> Result<()> {
    let options = ConvertOptions { provider_name };
    let conversion = load_and_convert(xrd_path, &options)?;

    println!("{} Writing artifacts...", "→".cyan());
    let writer = ArtifactWriter::new().context("Failed to load templates")?;
    let written = writer
        .write_to_directory(&conversion, output)
        .with_context(|| format!("Failed to write artifacts to {}", output.display()))?;

    println!("\n{}", "✓ Conversion complete!".green().bold());
    println!("\n{}", "Generated files:".bold());
    for path in &written {
        println!("  📄 {}", path.display());
    }

    println!("\n{}", "Resources:".bold());
    for name in conversion.config.resources.keys() {
        println!("  • {}", name.cyan());
    }

    Ok(())
}

fn inspect_command(xrd_path: &Path) -> Result<()> {
    let parser = XrdParser::from_file(xrd_path)
        .with_context(|| format!("Failed to load XRD from {}", xrd_path.display()))?;
    let xrd = parser.definition();

    println!("\n{}", "Composite Resource Definition:".bold());
    println!("  Name: {}", xrd.name().yellow());
    println!("  Group: {}", xrd.group().yellow());
    if let Some(names) = &xrd.spec.names {
        println!("  Composite: {}", names.plural);
    }
    println!("  Claim: {}", xrd.claim_plural());
    println!("  Versions:");
    for version in &xrd.spec.versions {
        let mut flags = Vec::new();
        if version.served {
            flags.push("served");
        }
        if version.referenceable {
            flags.push("referenceable");
        }
        println!("    • {} [{}]", version.name, flags.join(", "));
    }

    let conversion = convert_definition(xrd, &ConvertOptions::default())
        .with_context(|| format!("Failed to convert XRD {}", xrd.name()))?;

    if let Some(selected) = conversion.selected_version() {
        println!("  Selected version: {}", selected.green());
    }

    for source in &conversion.sources {
        println!("\n{} {}", "Path:".bold(), source.path.cyan());

        if let Some(schema) = conversion.document.post_request_schema(&source.path) {
            let properties: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
            println!("  Properties: {}", properties.join(", "));
        }
    }

    println!("\n{}", "Provider config:".bold());
    println!("  Provider: {}", conversion.config.provider.name.yellow());
    for (name, resource) in &conversion.config.resources {
        println!("  • {}", name.cyan());
        for (verb, location) in resource.operations() {
            println!("    {:<7} {:<7} {}", verb, location.method, location.path);
        }
    }

    Ok(())
}
