use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payopt::application::allocator::allocate;
use payopt::domain::ports::RecordSourceBox;
use payopt::error::AllocationError;
use payopt::infrastructure::json_files::JsonFileSource;
use payopt::interfaces::csv::allocation_writer::AllocationWriter;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders JSON file
    orders: PathBuf,

    /// Payment methods JSON file
    payment_methods: PathBuf,

    /// Log filter used when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let source: RecordSourceBox = Box::new(JsonFileSource::new(cli.orders, cli.payment_methods));
    let orders = source.orders().into_diagnostic()?;
    let methods = source.payment_methods().into_diagnostic()?;

    match allocate(&orders, &methods) {
        Ok(allocation) => {
            let stdout = io::stdout();
            let mut writer = AllocationWriter::new(stdout.lock());
            writer.write_allocation(&allocation).into_diagnostic()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ AllocationError::NoPaymentMethodAvailable { .. }) => {
            println!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).into_diagnostic(),
    }
}
