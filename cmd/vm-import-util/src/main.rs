use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};
use pkg_config::file::load_record_file;
use pkg_config::{ConfigMapControllerConfigProvider, ControllerConfigProvider, SnapshotStore};
use pkg_constants::config::{CONTROLLER_CONFIG_NAME, DEFAULT_CONFIG_FILE};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "vm-import-util",
    about = "Normalization helpers for the VM import controller"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize a string into a DNS-1123 resource name
    Normalize {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Shorten a label value to 63 characters
    Label {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Render a byte count in binary units
    Bytes {
        #[arg(allow_negative_numbers = true)]
        bytes: i64,
    },
    /// Parse a binary-unit quantity (e.g. 512Mi) into bytes
    ParseBytes { quantity: String },
    /// Check whether a timezone is UTC for all time
    Tz {
        #[arg(default_value = "")]
        name: String,
    },
    /// Convert a [+-]HH:MM offset into seconds
    Offset {
        #[arg(allow_hyphen_values = true)]
        offset: String,
    },
    /// Show the controller configuration read from a record file
    Config {
        /// Path to the YAML config record
        #[arg(long, short, default_value = DEFAULT_CONFIG_FILE)]
        file: String,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,

        /// Fail if the record could not be read instead of printing defaults
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { input } => println!("{}", pkg_utils::normalize_name(&input)?),
        Commands::Label { value } => println!("{}", pkg_utils::ensure_label_length(&value)),
        Commands::Bytes { bytes } => println!("{}", pkg_utils::format_bytes(bytes)?),
        Commands::ParseBytes { quantity } => println!("{}", pkg_utils::parse_bytes(&quantity)?),
        Commands::Tz { name } => println!("{}", pkg_utils::is_utc_compatible(&name)),
        Commands::Offset { offset } => {
            println!("{}", pkg_utils::parse_offset_seconds(&offset)?)
        }
        Commands::Config {
            file,
            output,
            strict,
        } => show_config(&file, output, strict)?,
    }

    Ok(())
}

fn show_config(file: &str, output: OutputFormat, strict: bool) -> anyhow::Result<()> {
    info!("Config record file: {}", file);

    let store = SnapshotStore::new();
    match load_record_file(file) {
        Ok(record) => store.publish(CONTROLLER_CONFIG_NAME, record),
        Err(e) => store.publish_error(CONTROLLER_CONFIG_NAME, format!("{:#}", e)),
    }

    let provider = ConfigMapControllerConfigProvider::new(store);
    let (config, err) = provider.get_config();
    if let Some(e) = err {
        if strict {
            bail!("failed to read {}: {}", CONTROLLER_CONFIG_NAME, e);
        }
        warn!("Using best-effort controller config: {}", e);
    }

    match output {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&config)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
