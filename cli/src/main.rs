//! CLI entrypoint for covenant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use covenant_application::{
    AgreementRepository, AskAgreementUseCase, ConversationController, QuestionAnswerer,
};
use covenant_domain::{AgreementId, OwnerId};
use covenant_infrastructure::{
    ConfigLoader, FileConfig, GeminiConfig, GeminiGateway, InMemoryAgreementStore,
    JsonAgreementStore,
};
use covenant_presentation::{
    AnswerSpinner, AppState, ChatRepl, Cli, Command, ConsoleFormatter, JwtAuth, OutputFormat,
    build_router, serve,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let log_dir = match &cli.command {
        Some(Command::Serve { log_dir, .. }) => log_dir.clone(),
        _ => None,
    };
    // Held until exit so buffered file logs are flushed
    let _guard = init_tracing(cli.verbose, log_dir.as_deref());

    let config = if cli.no_config {
        ConfigLoader::load_defaults()?
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Serve { bind, .. } => run_serve(&config, bind).await,
        Command::Ask {
            agreement,
            user,
            question,
            output,
            quiet,
        } => run_ask(&config, &agreement, &user, &question, output, quiet).await,
        Command::Chat {
            agreement,
            user,
            quiet,
            no_history,
        } => run_chat(&config, &agreement, &user, quiet, no_history).await,
        Command::IssueToken { user, ttl_hours } => run_issue_token(&config, &user, ttl_hours),
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "covenant.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Print configuration issues; fail on errors.
fn report_issues(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        eprintln!("{}", ConsoleFormatter::format_issue(issue));
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("invalid configuration");
    }
    Ok(())
}

// === Dependency Injection ===

fn build_repository(config: &FileConfig) -> Result<Arc<dyn AgreementRepository>> {
    match &config.store.path {
        Some(path) => Ok(Arc::new(JsonAgreementStore::load(path)?)),
        None => {
            warn!("No agreement store configured, starting empty");
            Ok(Arc::new(InMemoryAgreementStore::new()))
        }
    }
}

fn build_answerer(config: &FileConfig) -> Result<Arc<dyn QuestionAnswerer>> {
    report_issues(config)?;

    let repository = build_repository(config)?;
    let api_key = config
        .backend
        .api_key()
        .context("backend.api_key is required to answer questions")?;
    let gateway = GeminiGateway::new(GeminiConfig {
        base_url: config.backend.base_url.clone(),
        api_key: api_key.to_string(),
        connect_timeout: Duration::from_millis(config.backend.connect_timeout_ms),
    })?;

    let ask_config = config.to_ask_config();
    info!(
        model = %ask_config.model,
        max_context_chars = ask_config.budget.max_context_chars(),
        max_retries = ask_config.answer.max_retries,
        worst_case_ms = ask_config.answer.worst_case().as_millis() as u64,
        "Ask pipeline ready"
    );
    Ok(Arc::new(AskAgreementUseCase::new(
        repository,
        Arc::new(gateway),
        ask_config,
    )))
}

fn jwt_auth(config: &FileConfig) -> Result<JwtAuth> {
    let secret = config
        .server
        .jwt_secret()
        .context("server.jwt_secret is required (set COVENANT_SERVER__JWT_SECRET)")?;
    Ok(JwtAuth::new(secret))
}

async fn run_serve(config: &FileConfig, bind: Option<String>) -> Result<()> {
    let answerer = build_answerer(config)?;
    let auth = jwt_auth(config)?;

    let addr: SocketAddr = match bind {
        Some(bind) => bind
            .parse()
            .with_context(|| format!("invalid --bind address '{bind}'"))?,
        None => config.server.parse_bind().0,
    };

    info!("Starting covenant API");
    let router = build_router(
        AppState::new(answerer, auth),
        config.server.body_limit_bytes.max(1),
    );
    serve(addr, router).await?;
    Ok(())
}

async fn run_ask(
    config: &FileConfig,
    agreement: &str,
    user: &str,
    question: &str,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let agreement_id = AgreementId::new(agreement)?;
    let identity = OwnerId::new(user)?;
    let answerer = build_answerer(config)?;

    let spinner = AnswerSpinner::start("Reading the agreement...", !quiet);
    let result = answerer.ask(&agreement_id, &identity, question).await;
    spinner.finish();

    let answer = result?;
    let rendered = match output {
        OutputFormat::Text => ConsoleFormatter::format_answer(question, &answer),
        OutputFormat::Json => ConsoleFormatter::format_answer_json(question, &answer),
    };
    println!("{}", rendered);
    Ok(())
}

async fn run_chat(
    config: &FileConfig,
    agreement: &str,
    user: &str,
    quiet: bool,
    no_history: bool,
) -> Result<()> {
    let agreement_id = AgreementId::new(agreement)?;
    let identity = OwnerId::new(user)?;
    let answerer = build_answerer(config)?;

    let controller = ConversationController::new(agreement_id, identity, answerer);
    let mut repl = ChatRepl::new(controller).with_progress(!quiet);
    if no_history {
        repl = repl.with_history_path(None);
    }
    repl.run().await?;
    Ok(())
}

fn run_issue_token(config: &FileConfig, user: &str, ttl_hours: i64) -> Result<()> {
    if ttl_hours <= 0 {
        bail!("--ttl-hours must be positive");
    }
    let identity = OwnerId::new(user)?;
    let token = jwt_auth(config)?.issue(&identity, chrono::Duration::hours(ttl_hours))?;
    println!("{}", token);
    Ok(())
}
