//! CLI for lcglab — LCG streams and the classical tests that judge them.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lcglab")]
#[command(about = "lcglab — LCG streams and the classical tests that judge them")]
#[command(version = lcglab_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a value stream from one parameterization and persist it
    Generate {
        /// Parameterization: mixed (general-purpose) or randu
        #[arg(long, default_value = "mixed", value_parser = ["mixed", "randu"])]
        generator: String,

        /// Number of values to generate
        #[arg(long, default_value = "10000")]
        count: usize,

        /// Output file (one value per line)
        #[arg(long)]
        output: String,
    },

    /// Run the KS and runs tests on a persisted value stream
    Analyze {
        /// Path to a value stream (one value per line)
        input: String,

        /// Number of leading values the KS test runs on
        #[arg(long, default_value = "100")]
        prefix: usize,

        /// Use one-sided critical values for the runs z lookup
        #[arg(long)]
        one_sided: bool,

        /// Write full results as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// Generate both parameterizations and test each end to end
    Report {
        /// Number of values to generate per parameterization
        #[arg(long, default_value = "10000")]
        count: usize,

        /// Directory the value streams are written into
        #[arg(long, default_value = ".")]
        dir: String,

        /// Write a markdown report
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            generator,
            count,
            output,
        } => commands::generate::run(&generator, count, &output),
        Commands::Analyze {
            input,
            prefix,
            one_sided,
            output,
        } => commands::analyze::run(&input, prefix, one_sided, output.as_deref()),
        Commands::Report { count, dir, output } => {
            commands::report::run(count, &dir, output.as_deref())
        }
    }
}
