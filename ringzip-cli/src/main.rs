use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ringzip_codec::{compress_with_stats, decompress, CodecConfig, MatchRule};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compress or decompress a file using circle mapping")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON encoder settings, e.g. {"match_rule":"tolerant","error_threshold":0.1}
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Hit rule for compression: exact (lossless) or tolerant (lossy)
    #[arg(long, global = true)]
    match_rule: Option<MatchRule>,

    /// Show codec diagnostics on stderr (honours RUST_LOG)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logs
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress <INPUT> into <OUTPUT>
    Compress { input: PathBuf, output: PathBuf },
    /// Decompress <INPUT> into <OUTPUT>
    Decompress { input: PathBuf, output: PathBuf },
}

fn init_tracing(args: &Args) {
    let filter = if args.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if args.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,ringzip_codec=debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<CodecConfig> {
    let mut config = match args.config.as_ref() {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => CodecConfig::default(),
    };
    if let Some(rule) = args.match_rule {
        config.match_rule = rule;
    }
    config.validate().context("invalid codec config")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    match &args.command {
        Command::Compress { input, output } => {
            let config = load_config(&args)?;
            run_compress(input, output, &config)?;
            println!("Compressed {} to {}", input.display(), output.display());
        }
        Command::Decompress { input, output } => {
            run_decompress(input, output)?;
            println!("Decompressed {} to {}", input.display(), output.display());
        }
    }
    Ok(())
}

fn run_compress(input: &Path, output: &Path, config: &CodecConfig) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("open {}", input.display()))?;
    let (packed, stats) = compress_with_stats(&data, config);

    if config.match_rule == MatchRule::Tolerant && stats.hits > 0 {
        tracing::warn!("tolerant match rule: near matches will not decompress exactly");
    }
    tracing::info!(
        raw = stats.input_len,
        compressed = packed.len(),
        hits = stats.hits,
        misses = stats.misses,
        ratio = %format!("{:.2}", stats.ratio()),
        "compress done"
    );

    fs::write(output, &packed).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn run_decompress(input: &Path, output: &Path) -> Result<()> {
    let packed = fs::read(input).with_context(|| format!("open {}", input.display()))?;
    let data = decompress(&packed).with_context(|| format!("decode {}", input.display()))?;
    tracing::info!(compressed = packed.len(), raw = data.len(), "decompress done");

    fs::write(output, &data).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}
