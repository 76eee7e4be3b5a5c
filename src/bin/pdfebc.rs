use clap::Parser;
use pdfebc::cli::{self, Cli};
use pdfebc::errors::{AppError, FAILURE_EXIT_CODE};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging first
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", if cli.verbose { "debug" } else { "warn" });
    }
    let _ = env_logger::try_init();

    if let Err(e) = cli::run(&cli).await {
        // A missing Ghostscript binary has already been reported on the console
        let reported = matches!(&e, AppError::Compression(c) if c.is_fatal());
        if !reported {
            eprintln!("{}", e);
        }
        log::debug!("Exiting after error: {:?}", e);
        std::process::exit(FAILURE_EXIT_CODE);
    }
}
