use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use se_mock_events::api::{HttpClient, StreamElementsClient};
use se_mock_events::config::Config;
use se_mock_events::events::{
    build_event_payload, EventFieldValues, EventType, FieldValue, EVENT_CONFIGS,
};

/// Send mock Twitch activity to a StreamElements channel
#[derive(Parser, Debug)]
#[command(name = "se-mock-events")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// StreamElements JWT
    #[arg(long, env = "SE_JWT_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the channel the token belongs to
    Channel,
    /// List the input fields for an event type
    Fields {
        /// Event type, e.g. "tip" or "community gift"; all types when omitted
        event_type: Option<EventType>,
    },
    /// Build a mock event and send it to the token's channel
    Send(SendArgs),
}

#[derive(Args, Debug)]
struct SendArgs {
    /// Event type, e.g. "tip" or "community gift"
    event_type: EventType,

    #[arg(long)]
    sender: Option<String>,

    /// Months, bits, viewers, item or gift count depending on the event type
    #[arg(long)]
    amount: Option<String>,

    #[arg(long)]
    message: Option<String>,

    #[arg(long)]
    tier: Option<String>,

    #[arg(long)]
    receiver: Option<String>,

    /// Groups a community gift with its recipients
    #[arg(long)]
    activity_group: Option<String>,

    /// Print the payload without sending it
    #[arg(long)]
    dry_run: bool,
}

impl SendArgs {
    fn field_values(&self) -> EventFieldValues {
        let mut values = EventFieldValues::new();
        for (id, value) in [
            ("sender", &self.sender),
            ("message", &self.message),
            ("tier", &self.tier),
            ("receiver", &self.receiver),
        ] {
            if let Some(value) = value {
                values.insert(id, value.as_str());
            }
        }
        if let Some(amount) = &self.amount {
            values.insert("amount", parse_amount(amount));
        }
        values
    }
}

/// Numbers are sent as numbers; anything else is forwarded as typed
fn parse_amount(raw: &str) -> FieldValue {
    serde_json::from_str::<serde_json::Number>(raw.trim())
        .map_or_else(|_| FieldValue::from(raw), FieldValue::Number)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let client = StreamElementsClient::with_base_url(&config.api_base_url);
    run(&cli, &config, &client, &mut std::io::stdout().lock()).await
}

/// Executes the parsed command, writing results to `out`
async fn run<H: HttpClient>(
    cli: &Cli,
    config: &Config,
    client: &StreamElementsClient<H>,
    out: &mut impl Write,
) -> Result<()> {
    match &cli.command {
        Command::Fields { event_type } => print_fields(*event_type, out)?,
        Command::Channel => {
            let token = resolve_token(cli, config)?;
            let channel = client.fetch_channel_info(&token).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&channel)?)?;
        }
        Command::Send(args) => {
            let payload = build_event_payload(
                args.event_type,
                &args.field_values(),
                args.activity_group.as_deref(),
            );

            if args.dry_run {
                writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
                return Ok(());
            }

            let token = resolve_token(cli, config)?;
            let channel = client.fetch_channel_info(&token).await?;
            tracing::info!(
                "Sending {} event to {} ({})",
                args.event_type,
                channel.display_name,
                channel.id
            );

            let response = client.send_mock_event(&channel.id, &token, &payload).await?;
            writeln!(out, "{}", response.to_pretty_string())?;
        }
    }

    Ok(())
}

/// Command line (or `SE_JWT_TOKEN`) wins over the stored token
///
/// An empty value on the command line counts as not given.
fn resolve_token(cli: &Cli, config: &Config) -> Result<String> {
    let non_empty = |t: &Option<String>| t.clone().filter(|t| !t.is_empty());

    non_empty(&cli.token)
        .or_else(|| non_empty(&config.jwt_token))
        .context(
            "No token given: pass --token, set SE_JWT_TOKEN or add jwt_token to the config file",
        )
}

fn print_fields(event_type: Option<EventType>, out: &mut impl Write) -> Result<()> {
    let configs: Vec<_> = EVENT_CONFIGS
        .iter()
        .filter(|c| event_type.map_or(true, |t| c.event_type == t))
        .collect();
    writeln!(out, "{}", serde_json::to_string_pretty(&configs)?)?;
    Ok(())
}
