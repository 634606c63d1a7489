use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use svg_resizer::config::validation::validate_config;
use svg_resizer::config::{load_config, ConfigError, ServiceConfig};
use svg_resizer::fetch::SvgFetcher;
use svg_resizer::http::request::{parse_dimension, parse_svg_url};
use svg_resizer::lifecycle::startup;
use svg_resizer::observability::logging::init_logging;
use svg_resizer::svg::{resize_svg, RequestedSize};

#[derive(Parser)]
#[command(name = "svg-resizer")]
#[command(version, about = "Resize remote SVG images by rewriting width/height", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Override listener.bind_address
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Resize a local file or an http(s) URL once and print the result
    Resize {
        /// File path or URL
        source: String,

        #[arg(long)]
        width: Option<String>,

        #[arg(long)]
        height: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.listener.bind_address = bind;
                validate_config(&config).map_err(ConfigError::Validation)?;
            }
            init_logging(&config.observability);
            tracing::info!("svg-resizer v{} starting", env!("CARGO_PKG_VERSION"));
            startup::run(config).await?;
        }
        Commands::Resize {
            source,
            width,
            height,
            output,
        } => {
            init_logging(&config.observability);
            let size = RequestedSize::new(
                parse_dimension("width", width.as_deref())?,
                parse_dimension("height", height.as_deref())?,
            );
            let text = read_source(&config, &source).await?;
            let resized = resize_svg(&text, size)?;
            match output {
                Some(path) => std::fs::write(&path, resized)?,
                None => print!("{resized}"),
            }
        }
    }

    Ok(())
}

/// Fetch `source` if it looks like a URL, otherwise read it from disk.
async fn read_source(
    config: &ServiceConfig,
    source: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let url = parse_svg_url(Some(source))?;
        let fetcher = SvgFetcher::from_config(&config.upstream)?;
        Ok(fetcher.fetch(&url).await?)
    } else {
        Ok(std::fs::read_to_string(Path::new(source))?)
    }
}
