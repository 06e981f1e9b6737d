mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "poliza",
    version,
    about = "Policy-document extraction for insurer PDF text layers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct and print each page's reading-order text
    Pages {
        /// Path to the policy PDF
        pdf_file: PathBuf,

        /// Only print this page number
        #[arg(short, long)]
        page: Option<usize>,
    },
    /// Print the insurer/product routing decision for a PDF
    Classify {
        /// Path to the policy PDF
        pdf_file: PathBuf,
    },
    /// Extract the structured policy record
    Extract {
        /// Path to the policy PDF
        pdf_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the extracted record to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pages { pdf_file, page } => commands::pages::run(pdf_file, page),
        Commands::Classify { pdf_file } => commands::classify::run(pdf_file),
        Commands::Extract {
            pdf_file,
            output,
            out,
        } => commands::extract::run(pdf_file, &output, out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Log filtering comes from RUST_LOG; per-field extraction narration sits
/// at debug level in poliza-core.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).init();
}
