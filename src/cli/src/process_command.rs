use crate::commands::{Cli, Commands, EventCommands, LabelCommands, TracerCommands};
use crate::logging::setup_logging;
use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;
use tracer_client::{HttpTransport, RemoteStoreClient};
use tracer_common::config::{ConfigLoader, ConfigSource};
use tracer_common::types::{Label, Request, TracerEvent, TracerId};

pub fn process_cli() -> Result<()> {
    let cli = Cli::parse();
    let _guard = setup_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = ConfigLoader::load_config(cli.config.as_deref(), cli.server)
        .context("Failed to load configuration")?;
    let client = RemoteStoreClient::from_config(config);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let mut stdout = io::stdout().lock();
    runtime.block_on(run_command(&client, cli.command, &mut stdout))
}

pub async fn run_command<C, T, W>(
    client: &RemoteStoreClient<C, T>,
    command: Commands,
    out: &mut W,
) -> Result<()>
where
    C: ConfigSource,
    T: HttpTransport,
    W: Write,
{
    match command {
        Commands::Tracers(TracerCommands::List) => {
            let tracers = client.get_tracers().await?;
            print_json(out, &tracers)?;
        }
        Commands::Tracers(TracerCommands::Add { file }) => {
            let request: Request = read_json(&file)?;
            client.add_tracers(&request).await?;
        }
        Commands::Events(EventCommands::Add { tracer_id, file }) => {
            let tracer_event: TracerEvent = read_json(&file)?;
            client.add_tracer_event(tracer_event, tracer_id).await?;
        }
        Commands::Events(EventCommands::AddMany { file }) => {
            let tracer_events: BTreeMap<TracerId, TracerEvent> = read_json(&file)?;
            let total = tracer_events.len();
            let failures = client.add_tracer_events(tracer_events).await;

            if !failures.is_empty() {
                let details = failures
                    .iter()
                    .map(|failure| format!("  {}", failure))
                    .collect::<Vec<_>>()
                    .join("\n");
                anyhow::bail!(
                    "{} of {} tracer events could not be submitted:\n{}",
                    failures.len(),
                    total,
                    details
                );
            }
        }
        Commands::Labels(LabelCommands::List) => {
            let labels = client.get_labels().await?;
            print_json(out, &labels)?;
        }
        Commands::Labels(LabelCommands::Get { id }) => {
            let label = client.get_label(id).await?;
            print_json(out, &label)?;
        }
        Commands::Labels(LabelCommands::Add { file }) => {
            let label: Label = read_json(&file)?;
            client.add_label(&label).await?;
        }
    }

    Ok(())
}

fn read_json<D: DeserializeOwned>(path: &Path) -> Result<D> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))
}

fn print_json<W: Write, S: Serialize + ?Sized>(out: &mut W, value: &S) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to write output")?;
    writeln!(out)?;
    Ok(())
}
