//! Command line surface of pdfebc

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::domains::compression::types::{DEFAULT_GHOSTSCRIPT_BINARY, DEFAULT_SIZE_THRESHOLD};
use crate::domains::compression::{BatchCompressor, CompressionConfig, ConsoleReporter, StatusReporter};
use crate::domains::core::{make_output_directory, remove_directory};
use crate::domains::email::{prompt_email_config, send_files, EmailConfig, Mailer, SmtpMailer};
use crate::errors::AppResult;

pub const OUTPUT_DIR_DEFAULT: &str = "pdfebc_out";
pub const SOURCE_DIR_DEFAULT: &str = ".";

/// Compresses all pdf files in the current directory
#[derive(Parser, Debug, Clone)]
#[command(name = "pdfebc", version, about, long_about = None)]
pub struct Cli {
    /// Output directory
    #[arg(short = 'o', long = "outdir", env = "PDFEBC_OUTDIR", default_value = OUTPUT_DIR_DEFAULT)]
    pub outdir: PathBuf,

    /// Source directory
    #[arg(long = "sourcedir", visible_alias = "src", env = "PDFEBC_SOURCEDIR", default_value = SOURCE_DIR_DEFAULT)]
    pub sourcedir: PathBuf,

    /// Do not create the output directory
    #[arg(long = "nomakedir", visible_alias = "nm")]
    pub nomakedir: bool,

    /// Name of the Ghostscript binary
    #[arg(long = "ghostscript", visible_alias = "gs", env = "PDFEBC_GHOSTSCRIPT", default_value = DEFAULT_GHOSTSCRIPT_BINARY)]
    pub ghostscript: String,

    /// Files below this many bytes are copied instead of compressed
    #[arg(long, env = "PDFEBC_SIZE_THRESHOLD", default_value_t = DEFAULT_SIZE_THRESHOLD)]
    pub threshold: u64,

    /// Email the compressed PDF files using the settings in config.ini
    #[arg(short, long)]
    pub send: bool,

    /// Remove the output directory when done. Most useful together with --send
    #[arg(short, long)]
    pub clean: bool,

    /// Prompt for email settings and write them to config.ini
    #[arg(long)]
    pub configure: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn compression_config(&self) -> CompressionConfig {
        CompressionConfig::default()
            .with_ghostscript_binary(self.ghostscript.clone())
            .with_size_threshold(self.threshold)
    }
}

/// Run pdfebc end to end with terminal I/O
pub async fn run(cli: &Cli) -> AppResult<Vec<PathBuf>> {
    if cli.configure {
        configure(&EmailConfig::default_path()?)?;
    }

    let outputs = compress(cli, &ConsoleReporter).await?;

    if cli.send {
        let config = load_or_configure(&EmailConfig::default_path()?)?;
        let mailer = SmtpMailer::new(&config);
        let email: (&EmailConfig, &dyn Mailer) = (&config, &mailer);
        deliver(cli, &outputs, Some(email)).await?;
        println!("Sent {} files to {}", outputs.len(), config.receiver);
    } else {
        deliver(cli, &outputs, None).await?;
    }

    Ok(outputs)
}

/// Prepare the output directory and compress the source directory into it
pub async fn compress(cli: &Cli, reporter: &dyn StatusReporter) -> AppResult<Vec<PathBuf>> {
    if !cli.nomakedir {
        make_output_directory(&cli.outdir).await?;
    }
    let compressor = BatchCompressor::new(&cli.compression_config());
    let outputs = compressor.run(&cli.sourcedir, &cli.outdir, reporter).await?;
    Ok(outputs)
}

/// Email the outputs through `email` when given, then remove the output directory if requested
pub async fn deliver(
    cli: &Cli,
    outputs: &[PathBuf],
    email: Option<(&EmailConfig, &dyn Mailer)>,
) -> AppResult<()> {
    if let Some((config, mailer)) = email {
        send_files(config, outputs, mailer).await?;
    }
    if cli.clean {
        remove_directory(&cli.outdir).await?;
    }
    Ok(())
}

fn configure(path: &Path) -> AppResult<EmailConfig> {
    println!("Configuring email settings in {}", path.display());
    let config = prompt_email_config()?;
    config.write_to(path)?;
    Ok(config)
}

fn load_or_configure(path: &Path) -> AppResult<EmailConfig> {
    if !path.exists() {
        log::info!("No email config at {}, prompting", path.display());
        return configure(path);
    }
    let config = EmailConfig::read_from(path)?;
    config.validate()?;
    Ok(config)
}
