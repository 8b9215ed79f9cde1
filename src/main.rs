use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use clap::{Parser, Subcommand};
use mentor_match::config::Settings;
use mentor_match::core::{Lexicon, SkillMatcher};
use mentor_match::models::{parse_learner_skills, parse_mentors, InputError, RankMentorsResponse, RankOptions};
use mentor_match::routes::{self, AppState};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mentor-match", version, about = "Rank mentors by skill compatibility with a learner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank mentors once and print the result document to stdout
    Rank {
        /// Learner skills as a JSON array of strings
        learner_skills: String,
        /// Mentor profiles as a JSON array of objects
        mentors: String,
        /// Minimum total score for a mentor to be returned
        #[arg(long)]
        min_score: Option<f64>,
        /// Maximum number of mentors to return
        #[arg(long)]
        max_results: Option<usize>,
        /// Print single-line JSON instead of pretty JSON
        #[arg(long)]
        compact: bool,
    },
    /// Serve the matching HTTP API
    Serve,
}

/// Errors that end a CLI ranking run
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings);

    let matcher = SkillMatcher::new(load_lexicon(&settings));

    match cli.command {
        Command::Rank {
            learner_skills,
            mentors,
            min_score,
            max_results,
            compact,
        } => {
            let options = (
                min_score.unwrap_or(settings.matching.min_score),
                max_results.unwrap_or(settings.matching.max_results),
            );
            match run_rank(&matcher, &learner_skills, &mentors, options, compact) {
                Ok(output) => {
                    println!("{}", output);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("Ranking failed: {}", e);
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Serve => match serve(settings, matcher) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("Server error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Initialize logging; output goes to stderr so stdout stays machine-readable
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

/// Built-in lexicon, with the configured file merged over it when present
fn load_lexicon(settings: &Settings) -> Arc<Lexicon> {
    let Some(path) = &settings.lexicon.path else {
        return Lexicon::builtin();
    };

    match Lexicon::builtin_with(path) {
        Ok(lexicon) => {
            info!("Lexicon loaded from {} ({} synsets)", path.display(), lexicon.len());
            Arc::new(lexicon)
        }
        Err(e) => {
            warn!("Failed to load lexicon from {}, using built-in: {}", path.display(), e);
            Lexicon::builtin()
        }
    }
}

fn run_rank(
    matcher: &SkillMatcher,
    learner_skills_json: &str,
    mentors_json: &str,
    (min_score, max_results): (f64, usize),
    compact: bool,
) -> Result<String, CliError> {
    let learner_skills = parse_learner_skills(learner_skills_json)?;
    let mentors = parse_mentors(mentors_json)?;
    let options = RankOptions::new(min_score, max_results)?;

    let response = RankMentorsResponse::from(matcher.rank_mentors(&learner_skills, mentors, &options));

    let output = if compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    Ok(output)
}

fn serve(settings: Settings, matcher: SkillMatcher) -> std::io::Result<()> {
    actix_web::rt::System::new().block_on(run_server(settings, matcher))
}

async fn run_server(settings: Settings, matcher: SkillMatcher) -> std::io::Result<()> {
    info!("Starting Mentor Match service...");
    info!("Matcher initialized with {} lexicon synsets", matcher.lexicon_size());

    let app_state = AppState {
        matcher,
        matching: settings.matching.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
