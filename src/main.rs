#![forbid(unsafe_code)]

use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gates_diff::diff_cmd::{self, DiffOptions, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "gates-diff")]
#[command(about = "Diff circuit sizes and ACIR opcode counts between two workspace reports", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set GATES_DIFF_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare a workspace report against a baseline
    Diff {
        /// Baseline report (JSON from `nargo info --json`)
        #[arg(long)]
        base: std::path::PathBuf,
        /// Report to compare against the baseline
        #[arg(long)]
        report: std::path::PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Shell)]
        format: OutputFormat,
        /// First line of the markdown report
        #[arg(long)]
        header: Option<String>,
        /// Repository slug used for commit links (owner/name)
        #[arg(long)]
        repository: Option<String>,
        /// Commit the report was generated at
        #[arg(long)]
        commit: Option<String>,
        /// Commit the baseline was generated at
        #[arg(long)]
        ref_commit: Option<String>,
        /// Quantile of circuit size changes shown in the summary (0.8 = top 20%)
        #[arg(long)]
        summary_quantile: Option<f64>,
        /// Disable ANSI colors in shell output
        #[arg(long)]
        no_color: bool,
        /// Settings file (gates-diff.toml)
        #[arg(long)]
        config: Option<std::path::PathBuf>,
        /// Write the rendered diff to this file instead of stdout
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("GATES_DIFF_LOG").unwrap_or_else(|_| {
        if verbose { "gates_diff=debug".to_string() } else { "gates_diff=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Diff {
            base,
            report,
            format,
            header,
            repository,
            commit,
            ref_commit,
            summary_quantile,
            no_color,
            config,
            out,
        } => {
            let color = !no_color && out.is_none() && std::io::stdout().is_terminal();
            diff_cmd::run(DiffOptions {
                base,
                report,
                format,
                header,
                repository,
                commit,
                ref_commit,
                summary_quantile,
                color,
                config,
                out,
            })
        }
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
