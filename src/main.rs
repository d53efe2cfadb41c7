use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, WrapErr};
use quizdeck::{names, quiz, resolver::Resolver, router, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
    address: String,

    /// Where preset quizzes live: a directory or an http(s) base URL
    /// containing the quiz manifest.
    #[arg(short, long, env, default_value = names::DEFAULT_PRESETS_LOCATION)]
    presets: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the quiz app (default).
    Serve,
    /// Validate a quiz file and print a summary.
    Check {
        /// Path to the quiz JSON file.
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,quizdeck=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    match args.command {
        Some(Command::Check { file }) => check(&file).await,
        Some(Command::Serve) | None => serve(&args.address, &args.presets).await,
    }
}

async fn serve(address: &str, presets: &str) -> color_eyre::Result<()> {
    let resolver = Resolver::from_location(presets)?;
    let catalog = resolver.discover().await;
    let app = router(AppState::new(resolver, catalog));

    let address = address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on http://{address}");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn check(file: &std::path::Path) -> color_eyre::Result<()> {
    let text = tokio::fs::read_to_string(file)
        .await
        .wrap_err_with(|| format!("could not read {}", file.display()))?;

    let quiz = match quiz::parse_document(&text) {
        Ok(quiz) => quiz,
        Err(e) => bail!("{}: {} ({e})", file.display(), e.user_message()),
    };

    println!(
        "{}: {} questions",
        quizdeck::utils::quiz_title(quiz.title()),
        quiz.len()
    );
    for (idx, q) in quiz.questions.iter().enumerate() {
        match q.correct_option() {
            Some(opt) => println!("  Q{} [{}] {}", idx + 1, opt.key, q.text),
            None => println!(
                "  Q{} [!] {} (correct answer matches no option)",
                idx + 1,
                q.text
            ),
        }
    }

    Ok(())
}
