//! CLI entrypoint for agora
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use agora_application::{
    ChatPoster, ConversationLogger, DebateOrchestrator, DebateProgressNotifier, EventEnvelope,
    EventOutcome, HandleEventUseCase, InvocationRouter, ModelInvoker, NoConversationLogger,
    NoProgress, RunDebateUseCase, SessionStore, StartDebateInput, StartDebateUseCase,
    TakeTurnUseCase,
};
use agora_domain::{DebateSession, OutputFormat, Severity};
use agora_infrastructure::{
    ConfigLoader, FileConfig, InMemorySessionStore, JsonFileSessionStore,
    JsonlConversationLogger,
};
use agora_presentation::{
    Cli, ConsoleChatPoster, ConsoleFormatter, ProgressReporter, SimpleProgress,
};
use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use clap::Parser;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let (debate_config, issues) = file_config.to_debate_config();
    let mut has_errors = false;
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("Config: {}", issue.message),
            Severity::Error => {
                eprintln!("Config error: {}", issue.message);
                has_errors = true;
            }
        }
    }
    if has_errors {
        bail!("Invalid configuration");
    }

    info!("Starting agora");

    // === Dependency Injection ===
    let store = build_store(&cli, &file_config).await?;

    if cli.purge_expired {
        let purged = store.purge_expired(Utc::now()).await?;
        println!("Purged {} expired debate(s)", purged);
        return Ok(());
    }

    if cli.list {
        for session in store.list_by_channel(&cli.channel).await? {
            println!("{}", ConsoleFormatter::format_listing(&session));
        }
        return Ok(());
    }

    if !file_config.output.color {
        colored::control::set_override(false);
    }

    let output: OutputFormat = cli
        .output
        .map(Into::into)
        .or(file_config.output.format)
        .unwrap_or_default();

    let invoker = build_invoker(&file_config).await?;
    let poster = build_poster(&cli, &file_config, output)?;
    let logger = build_logger(&cli, &file_config);

    let orchestrator = Arc::new(DebateOrchestrator::new(debate_config.clone(), invoker));
    let router = Arc::new(InvocationRouter::new(orchestrator));
    let take_turn = Arc::new(
        TakeTurnUseCase::new(router, store.clone(), poster)
            .with_conversation_logger(logger.clone()),
    );
    let start_debate = Arc::new(
        StartDebateUseCase::new(store.clone(), debate_config.clone())
            .with_conversation_logger(logger),
    );

    let session = if let Some(id) = &cli.resume {
        store
            .get(id)
            .await?
            .with_context(|| format!("No stored debate with id {}", id))?
    } else if let Some(path) = &cli.event {
        let envelope = read_envelope(path)?;
        match HandleEventUseCase::new(start_debate).execute(envelope).await? {
            EventOutcome::Challenge(challenge) => {
                println!("{}", challenge);
                return Ok(());
            }
            EventOutcome::Ignored(reason) => {
                info!(reason, "Event ignored");
                return Ok(());
            }
            EventOutcome::DebateStarted(session) => session,
        }
    } else {
        let proposition = match &cli.proposition {
            Some(p) => p.clone(),
            None => bail!("A proposition is required. Use --resume or --event otherwise."),
        };
        let mut input = StartDebateInput::new(new_debate_id(), &cli.channel, proposition);
        if let Some(max_rounds) = cli.max_rounds {
            input = input.with_max_rounds(max_rounds);
        }
        start_debate.execute(input).await?
    };

    if !cli.quiet && output == OutputFormat::Full {
        println!();
        println!("Proposition: {}", session.proposition());
        println!("Debate id:   {}", session.id());
    }

    // Spinners and log lines fight over stderr, so verbose runs get plain text
    let progress: Box<dyn DebateProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if cli.verbose > 0 {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let finished = RunDebateUseCase::new(take_turn)
        .execute_with_progress(&session, progress.as_ref())
        .await?;

    print_result(&finished, &debate_config, output, cli.quiet);
    Ok(())
}

fn print_result(
    session: &DebateSession,
    config: &agora_application::DebateConfig,
    output: OutputFormat,
    quiet: bool,
) {
    match output {
        // Turns were already echoed by the console poster
        OutputFormat::Full if !quiet => {
            println!("{}", ConsoleFormatter::format_summary(session, config.roster()))
        }
        OutputFormat::Full => println!("{}", ConsoleFormatter::format(session, config.roster())),
        OutputFormat::Summary => {
            println!("{}", ConsoleFormatter::format_summary(session, config.roster()))
        }
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(session)),
    }
}

/// Thread-style id (`<seconds>.<micros>`) like a chat timestamp
fn new_debate_id() -> String {
    let now = Utc::now();
    format!("{}.{:06}", now.timestamp(), now.timestamp_subsec_micros())
}

fn read_envelope(path: &Path) -> Result<EventEnvelope> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read event from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?
    };
    serde_json::from_str(&raw).context("Malformed event envelope")
}

async fn build_store(cli: &Cli, config: &FileConfig) -> Result<Arc<dyn SessionStore>> {
    if cli.ephemeral {
        return Ok(Arc::new(InMemorySessionStore::new()));
    }

    let dir = cli
        .store_dir
        .clone()
        .or_else(|| config.store.resolved_dir());
    match dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Using session directory");
            Ok(Arc::new(JsonFileSessionStore::open(dir).await?))
        }
        None => {
            warn!("No data directory available; sessions will not be kept");
            Ok(Arc::new(InMemorySessionStore::new()))
        }
    }
}

#[cfg(feature = "bedrock")]
async fn build_invoker(config: &FileConfig) -> Result<Arc<dyn ModelInvoker>> {
    let invoker =
        agora_infrastructure::BedrockModelInvoker::new(&config.providers.bedrock).await;
    Ok(Arc::new(invoker))
}

#[cfg(not(feature = "bedrock"))]
async fn build_invoker(_config: &FileConfig) -> Result<Arc<dyn ModelInvoker>> {
    bail!("No model provider compiled in. Rebuild with `--features bedrock`.")
}

fn build_poster(
    cli: &Cli,
    config: &FileConfig,
    output: OutputFormat,
) -> Result<Arc<dyn ChatPoster>> {
    if cli.slack {
        return build_slack_poster(config);
    }
    let echo = !cli.quiet && output == OutputFormat::Full;
    Ok(Arc::new(ConsoleChatPoster::new(echo)))
}

#[cfg(feature = "slack")]
fn build_slack_poster(config: &FileConfig) -> Result<Arc<dyn ChatPoster>> {
    let tokens = agora_infrastructure::EnvTokenStore::new(config.slack.clone());
    let missing = tokens.missing_groups();
    if !missing.is_empty() {
        warn!(?missing, "Some bot tokens are not set; their posts will fail");
    }
    let poster = agora_infrastructure::SlackChatPoster::new(&config.slack, Arc::new(tokens))?;
    Ok(Arc::new(poster))
}

#[cfg(not(feature = "slack"))]
fn build_slack_poster(_config: &FileConfig) -> Result<Arc<dyn ChatPoster>> {
    bail!("Slack support not compiled in. Rebuild with `--features slack`.")
}

fn build_logger(cli: &Cli, config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let path = cli
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log.clone());

    match path.and_then(JsonlConversationLogger::new) {
        Some(logger) => {
            info!(path = %logger.path().display(), "Conversation log enabled");
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}
