use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use voxcast_core::config::Config;
use voxcast_core::event::HttpEvent;
use voxcast_core::handler::Handler;
use voxcast_core::storage::s3::{S3AudioStore, S3StoreConfig};
use voxcast_core::synthesis::polly::{PollyConfig, PollySynthesizer};

#[derive(Parser, Debug)]
#[command(name = "voxcast")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Voxcast - synthesize text to speech and return a signed audio URL")]
struct Args {
    /// Path to an HTTP-style proxy event JSON file ("-" reads stdin)
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    event: Option<String>,

    /// Synthesize this text directly instead of reading an event
    #[arg(long)]
    text: Option<String>,

    /// Output format (mp3, ogg_vorbis, pcm)
    #[arg(long, requires = "text")]
    format: Option<String>,

    /// Voice to synthesize with
    #[arg(long, requires = "text")]
    voice_id: Option<String>,

    /// Treat the text as SSML markup
    #[arg(long, requires = "text")]
    ssml: bool,

    /// AWS profile for the Polly and S3 clients
    #[arg(long)]
    profile: Option<String>,

    /// AWS region for the Polly and S3 clients
    #[arg(long, default_value = "us-east-1")]
    region: String,
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    info!(
        "CLI startup: bucket={}, region={}, profile={:?}",
        config.audio_bucket, args.region, args.profile
    );

    let event = load_event(&args)?;

    let synthesizer = PollySynthesizer::new(PollyConfig {
        profile: args.profile.clone(),
        region: args.region.clone(),
    })
    .await
    .context("Failed to create Polly client")?;

    let store = S3AudioStore::new(S3StoreConfig {
        bucket: config.audio_bucket.clone(),
        profile: args.profile.clone(),
        region: args.region.clone(),
    })
    .await
    .context("Failed to create S3 client")?;

    let handler = Handler::new(config, Arc::new(synthesizer), Arc::new(store));
    let response = handler.handle(&event).await;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Build the inbound event either from an event file or from the direct
/// synthesis flags.
fn load_event(args: &Args) -> Result<HttpEvent> {
    if let Some(path) = &args.event {
        let raw = if path == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read event from stdin")?;
            buffer
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read event file {path}"))?
        };

        return serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse event JSON from {path}"));
    }

    let Some(text) = &args.text else {
        anyhow::bail!("either --event or --text is required");
    };

    let mut body = serde_json::json!({ "text": text });
    if let Some(format) = &args.format {
        body["format"] = serde_json::json!(format);
    }
    if let Some(voice_id) = &args.voice_id {
        body["voiceId"] = serde_json::json!(voice_id);
    }
    if args.ssml {
        body["useSsml"] = serde_json::json!(true);
    }

    Ok(HttpEvent {
        body: Some(body.to_string()),
        ..Default::default()
    })
}

fn setup_tracing() -> Result<()> {
    use tracing_subscriber::fmt;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Ok(())
}
