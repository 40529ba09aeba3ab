//! Actiload CLI - Build activity upload requests from CSV event schemas
//!
//! # Commands
//!
//! ```bash
//! actiload parse schema.csv                  # Just parse CSV to JSON records
//! actiload build schema.csv --asset-id A1    # Build the activity event list
//! actiload render schema.csv --asset-id A1   # Render the full curl request
//! ```
//!
//! Credentials can come from flags or from `SMARTECH_API_KEY` /
//! `SMARTECH_ACCESS_TOKEN` (a `.env` file is loaded if present).

use actiload::{
    build_from_path, parse_csv_file_auto, render_curl, ActivitySource, PipelineResult,
    SystemClock, UploadConfig,
};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "actiload")]
#[command(about = "Build Smartech activity upload requests from CSV event schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a CSV schema and output the raw JSON records
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the activity event list from a CSV schema
    Build {
        /// Input CSV file
        input: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the full upload request as a curl command
    Render {
        /// Input CSV file
        input: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Upload configuration flags shared by `build` and `render`.
#[derive(Args)]
struct ConfigArgs {
    /// Ingestion API endpoint
    #[arg(long, default_value = actiload::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// API key for the Authorization header (or SMARTECH_API_KEY)
    #[arg(long, default_value = "")]
    api_key: String,

    /// Access token header value (or SMARTECH_ACCESS_TOKEN)
    #[arg(long, default_value = "")]
    access_token: String,

    /// Asset id stamped onto every event
    #[arg(long, default_value = "")]
    asset_id: String,

    /// Identity stamped onto every event
    #[arg(long, default_value = "")]
    identity: String,

    /// Activity source channel: web or app
    #[arg(long, default_value = "web", value_parser = parse_source)]
    source: ActivitySource,
}

fn parse_source(s: &str) -> Result<ActivitySource, String> {
    ActivitySource::from_code(s).ok_or_else(|| format!("unknown source '{}' (expected web or app)", s))
}

impl ConfigArgs {
    fn into_config(self) -> UploadConfig {
        UploadConfig {
            endpoint: self.endpoint,
            api_key: self.api_key,
            access_token: self.access_token,
            asset_id: self.asset_id,
            identity: self.identity,
            activity_source: self.source,
        }
        .with_env_credentials()
    }
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),

        Commands::Build { input, config, output } => {
            cmd_build(&input, config.into_config(), output.as_deref())
        }

        Commands::Render { input, config, output } => {
            cmd_render(&input, config.into_config(), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> PipelineResult<()> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let result = parse_csv_file_auto(input)?;

    eprintln!("   Encoding: {}", result.encoding);
    eprintln!("   Delimiter: '{}'", format_delimiter(result.delimiter));
    eprintln!("   Columns: {}", result.headers.join(", "));
    eprintln!("✅ Parsed {} records", result.records.len());

    let json = serde_json::to_string_pretty(&result.records)?;
    write_output(&json, output)
}

fn cmd_build(input: &Path, config: UploadConfig, output: Option<&Path>) -> PipelineResult<()> {
    eprintln!("📄 Processing: {}", input.display());

    let result = build_from_path(input, &config, &SystemClock)?;

    eprintln!("\n⚙️  Built {} activity events", result.events.len());

    let json = serde_json::to_string_pretty(&result.events)?;
    write_output(&json, output)
}

fn cmd_render(input: &Path, config: UploadConfig, output: Option<&Path>) -> PipelineResult<()> {
    eprintln!("📄 Processing: {}", input.display());

    let result = build_from_path(input, &config, &SystemClock)?;
    let curl = render_curl(&result.events, &config)?;

    eprintln!("\n✨ Request ready ({} events)", result.events.len());

    write_output(&curl, output)
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> PipelineResult<()> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
