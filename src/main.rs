use clap::{CommandFactory, Parser};
use shortcut_quiz::config::DataConfig;
use shortcut_quiz::error::QuizError;
use shortcut_quiz::fetch::WebFetcher;
use shortcut_quiz::profile::Profile;
use shortcut_quiz::prompt::{Prompt, TerminalPrompt};
use shortcut_quiz::reports;
use shortcut_quiz::session::{GameOutcome, GameSession, FAREWELL};
use std::process;
use tracing::{error, info};

mod cmd;

/// Quiz yourself on IntelliJ and Android Studio keyboard shortcuts.
///
/// Run without arguments to be asked for each setting.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// IDE to be quizzed on: Android (Studio) or IntelliJ
    #[arg(requires = "level")]
    ide: Option<String>,

    /// junior (1 round), senior (2 rounds) or executive (3 rounds)
    level: Option<String>,

    /// Operating system for Android Studio shortcuts: windows, linux or mac
    #[arg(short, long)]
    system: Option<String>,

    #[command(flatten)]
    data: DataConfig,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn fatal(e: QuizError) -> ! {
    error!("❌ {}", e);
    process::exit(e.exit_code());
}

fn farewell() -> ! {
    println!("\n\n{}\n", FAREWELL);
    process::exit(0);
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // Direct mode is fully validated before the terminal or data are touched.
    let direct = match (&cli.ide, &cli.level) {
        (Some(ide), Some(level)) => Some(
            cmd::direct::settings(ide, level, cli.system.as_deref()).unwrap_or_else(|e| {
                eprintln!("{}", e);
                eprintln!("{}", Cli::command().render_usage());
                process::exit(e.exit_code());
            }),
        ),
        _ => None,
    };

    let mut prompt = TerminalPrompt::new().unwrap_or_else(|e| fatal(e));
    prompt.say(&reports::render_banner());

    let settings = match direct {
        Some(settings) => settings,
        None => match cmd::interactive::settings(&mut prompt) {
            Ok(Some(settings)) => settings,
            Ok(None) => farewell(),
            Err(e) => fatal(e),
        },
    };

    info!(
        "Settings: {} / {} / {:?}",
        settings.ide, settings.level_label, settings.system
    );

    let fetcher = WebFetcher::new().unwrap_or_else(|e| fatal(e));
    let profile = Profile::load(settings, &cli.data, &fetcher).unwrap_or_else(|e| fatal(e));

    let mut session = GameSession::new(profile, cli.data.rng());

    match session.run(&mut prompt) {
        Ok(GameOutcome::Cancelled { .. }) => farewell(),
        Ok(outcome) => println!("\n{}\n", outcome.report()),
        Err(e) => fatal(e),
    }
}
