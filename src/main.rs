use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use secrecy::SecretString;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

use pwd_meter::report::{render_composition, render_evaluation, render_generated, render_history};
use pwd_meter::{
    evaluate_password_strength, generate_password, init_blacklist, init_blacklist_from_path,
    PasswordEvaluation, Session, DEFAULT_PASSWORD_LENGTH,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Blacklist file, one password per line
    #[arg(long, global = true, env = "PWD_BLACKLIST_PATH")]
    blacklist: Option<PathBuf>,

    /// Command to execute (defaults to an interactive session)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Score a single password
    Check {
        /// Password to score; prompted for if omitted
        password: Option<String>,
    },

    /// Generate a random password
    Generate {
        #[arg(long, short, default_value_t = DEFAULT_PASSWORD_LENGTH)]
        length: usize,
    },

    /// Score passwords interactively and keep a history
    Session {
        /// Show plaintext passwords in the history table
        #[arg(long)]
        reveal: bool,
    },
}

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Password(String),
    Generate(usize),
    History,
    Quit,
    Skip,
    Invalid(String),
}

fn parse_input(line: &str) -> Input {
    let mut words = line.split_ascii_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(":quit"), None, _) => Input::Quit,
        (Some(":history"), None, _) => Input::History,
        (Some(":gen"), None, _) => Input::Generate(DEFAULT_PASSWORD_LENGTH),
        (Some(":gen"), Some(n), None) => match n.parse() {
            Ok(len) => Input::Generate(len),
            Err(_) => Input::Invalid(format!("not a length: {n}")),
        },
        _ if line.is_empty() => Input::Skip,
        _ => Input::Password(line.to_string()),
    }
}

fn setup_logger() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    Ok(())
}

fn print_evaluation(evaluation: &PasswordEvaluation) {
    println!("{}", render_evaluation(evaluation));
    println!("{}", render_composition(&evaluation.counts));
}

fn print_generated(length: usize) {
    match generate_password(length) {
        Ok(password) => println!("{}", render_generated(&password)),
        Err(e) => eprintln!("{e}"),
    }
}

fn check(password: Option<String>) -> anyhow::Result<()> {
    let password = match password {
        Some(p) => p,
        None => DefaultEditor::new()?
            .readline("password> ")
            .context("reading password")?,
    };
    let password = SecretString::new(password.into());
    print_evaluation(&evaluate_password_strength(&password, None));
    Ok(())
}

fn run_session(reveal: bool) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut session = Session::new();

    println!("Enter a password to score it. Commands: :gen [length], :history, :quit");
    loop {
        let line = match rl.readline("password> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("reading input"),
        };

        match parse_input(&line) {
            Input::Password(password) => {
                let evaluation = session.submit(SecretString::new(password.into()));
                print_evaluation(&evaluation);
            }
            Input::Generate(length) => print_generated(length),
            Input::History => print!("{}", render_history(session.history(), reveal)),
            Input::Invalid(msg) => eprintln!("{msg}"),
            Input::Skip => {}
            Input::Quit => break,
        }
    }

    tracing::debug!("session ended after {} submissions", session.len());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    setup_logger()?;

    let args = Args::parse();

    let count = match &args.blacklist {
        Some(path) => init_blacklist_from_path(path)
            .with_context(|| format!("loading blacklist {}", path.display()))?,
        None => init_blacklist()?,
    };
    tracing::debug!("blacklist holds {} passwords", count);

    match args.command {
        Some(Command::Check { password }) => check(password),
        Some(Command::Generate { length }) => {
            let password = generate_password(length)?;
            println!("{}", render_generated(&password));
            Ok(())
        }
        Some(Command::Session { reveal }) => run_session(reveal),
        None => run_session(false),
    }
}
