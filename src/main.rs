//! Flashcards Quiz CLI
//!
//! Terminal front end for the quiz server:
//! - List quiz groups and the quizzes in a group
//! - Take a quiz, with optional inline grading
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flashcards_quiz::{
    generate_default_config, inline_grading_label, Config, EndpointMode, LoggingConfig,
    QuizClient, QuizSession, ScoreReport,
};

#[derive(Parser)]
#[command(name = "quiz-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Take flash-card quizzes from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiz server URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Use the static fixture endpoints instead of the live server
    #[arg(long, global = true)]
    pub static_endpoints: bool,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List quiz groups
    Groups,

    /// List the quizzes in a group
    List {
        /// Group name
        group: String,
    },

    /// Take a quiz
    Take {
        /// Quiz title
        title: String,
        /// Show per-answer correctness while answering
        #[arg(short, long)]
        inline_grading: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_errors) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Vec::new()),
        None => Config::search(&Config::default_paths()),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if cli.static_endpoints {
        config.api.mode = EndpointMode::Static;
    }

    init_logging(&config.logging);
    for e in &config_errors {
        tracing::warn!(error = %e, "Skipping config file, using defaults");
    }
    let json = cli.format == "json";

    match cli.command {
        Commands::Groups => {
            let client = QuizClient::new(&config.api)?;
            let mut session = QuizSession::new();
            let index = session
                .load_groupings(&client)
                .await
                .context("Error loading quiz groupings.")?;

            if json {
                println!("{}", serde_json::to_string_pretty(index)?);
            } else {
                for section in index.sections() {
                    println!("{:<30} {} quizzes", section.name, section.titles.len());
                }
            }
        }

        Commands::List { group } => {
            let client = QuizClient::new(&config.api)?;
            let mut session = QuizSession::new();
            session.select_group(group);
            let titles = session
                .load_quiz_list(&client)
                .await
                .context("Error loading quiz list.")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&titles)?);
            } else {
                for title in titles {
                    println!("{}", title);
                }
            }
        }

        Commands::Take {
            title,
            inline_grading,
        } => {
            let client = QuizClient::new(&config.api)?;
            let mut session = QuizSession::new();
            session.set_inline_grading(inline_grading || config.grading.inline);
            session.select_title(title.clone());

            take_quiz(&client, &mut session, json).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Ask each prompt on stdin, then submit and print the score
async fn take_quiz(client: &QuizClient, session: &mut QuizSession, json: bool) -> anyhow::Result<()> {
    let title = session.selected_title().unwrap_or_default().to_string();
    let prompts = session
        .load_quiz(client)
        .await
        .context("Error retrieving quiz.")?
        .prompts
        .clone();

    if prompts.is_empty() {
        bail!("Quiz '{}' has no prompts", title);
    }

    println!("{}", title);
    println!("{}", inline_grading_label(session.inline_grading()));

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    for (i, prompt) in prompts.iter().enumerate() {
        let answer = loop {
            print!("{}) {}: ", i + 1, prompt.question);
            std::io::stdout().flush()?;

            let Some(line) = lines.next() else {
                bail!("Input ended before the quiz was complete");
            };
            let line = line?;
            let answer = line.trim_end_matches(['\r', '\n']).to_string();
            if !answer.trim().is_empty() {
                break answer;
            }
        };

        let snapshot = session.record_answer(i, answer)?;
        let mark = match snapshot.statuses[i] {
            s if s.correct => "✓",
            _ if snapshot.inline_grading => "✕",
            _ => "•",
        };
        println!("   {} {}", mark, snapshot.summary());
    }

    let result = session
        .submit(client)
        .await
        .context("Error scoring quiz.")?;

    let graded_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let report = ScoreReport::new(title, session.inline_grading(), &result, graded_at);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        print!("{}", report.to_table());
    }
    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("flashcards_quiz={},quiz_cli={}", logging.level, logging.level)),
    );

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
