use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use stepform::application::engine::WizardEngine;
use stepform::domain::ports::{SessionStoreBox, SubmissionSinkBox};
use stepform::infrastructure::in_memory::InMemorySessionStore;
use stepform::infrastructure::tracing_sink::TracingSubmissionSink;
use stepform::interfaces::csv::event_reader::EventReader;
use stepform::interfaces::csv::state_writer::StateWriter;
use stepform::interfaces::json;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input form-event CSV file (session,action,step,field,value)
    input: PathBuf,

    /// Output format for the final session states
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log filter directives; overrides RUST_LOG
    #[arg(long)]
    log_filter: Option<String>,
}

fn init_tracing(directives: Option<&str>) {
    let filter = match directives {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stepform=info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter.as_deref());

    let session_store: SessionStoreBox = Box::new(InMemorySessionStore::new());
    let submission_sink: SubmissionSinkBox = Box::new(TracingSubmissionSink::new());
    let engine = WizardEngine::new(session_store, submission_sink);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = EventReader::new(file);
    for (row, event_result) in reader.events().enumerate() {
        match event_result {
            Ok(event) => {
                if let Err(e) = engine.process_event(event).await {
                    warn!(row = row + 1, "Error processing event: {}", e);
                }
            }
            Err(e) => {
                warn!(row = row + 1, "Error reading event: {}", e);
            }
        }
    }

    let sessions = engine.into_results().await.into_diagnostic()?;
    let views = sessions.iter().map(|(id, state)| (id.as_str(), state));

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => {
            let mut writer = StateWriter::new(stdout.lock());
            writer.write_states(views).into_diagnostic()?;
        }
        OutputFormat::Json => json::write_states(stdout.lock(), views).into_diagnostic()?,
    }

    Ok(())
}
