//! # quick
//!
//! Cheat sheets in the terminal.
//!
//! ## Usage
//!
//! View a topic or subtopic:
//! ```sh
//! quick git
//! quick git:config
//! ```
//!
//! List, edit, or open on the web:
//! ```sh
//! quick git:
//! quick --edit git:config
//! quick --web git
//! ```

mod cli;

use cli::{Cli, Exit};
use color_eyre::Result;
use quick::{Config, QuickError, Topic, TopicAction, edit, highlight, update, web};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a tracing filter, e.g. `QUICK_LOG=debug`
const LOG_ENV: &str = "QUICK_LOG";

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    // Handle dynamic shell completions
    #[cfg(feature = "unstable-dynamic")]
    clap_complete::CompleteEnv::with_factory(|| {
        use clap::CommandFactory;
        Cli::command()
    })
    .complete();

    let args = match Cli::parse_with_env() {
        Ok(args) => args,
        Err(e) => {
            let exit = if e.use_stderr() {
                Exit::ArgumentError
            } else {
                // --help and --version
                Exit::Success
            };
            e.print()?;
            return Ok(exit.into());
        }
    };

    init_tracing(args.verbose);

    let config = Config::load();

    let result = if args.update {
        command_update(&config)
    } else {
        let topic = args
            .topic
            .as_deref()
            .map(Topic::parse)
            .unwrap_or_default()
            .with_action(args.action());

        if !topic.has_topic() && topic.action != TopicAction::List {
            print!("{}", cli::SHORT_USAGE);
            return Ok(Exit::Success.into());
        }

        match topic.action {
            TopicAction::View => command_view(&config, &topic, &args),
            TopicAction::List => command_list(&config, &topic),
            TopicAction::Edit => command_edit(&config, &topic),
            TopicAction::Web => command_web(&config, &topic),
        }
    };

    match result {
        Ok(()) => Ok(Exit::Success.into()),
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(Exit::Error.into())
        }
    }
}

/// Initialize tracing subscriber based on verbosity
fn init_tracing(verbose: u8) {
    // QUICK_LOG wins over -v flags
    let base_filter = std::env::var(LOG_ENV).unwrap_or_else(|_| {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
        .to_string()
    });

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(io::stderr),
        )
        .init();
}

fn command_view(config: &Config, topic: &Topic, args: &Cli) -> quick::Result<()> {
    let cache = config.cache();

    // First run: nothing has been fetched yet
    update::ensure_cache(&cache, &config.cache.repository)?;

    let text = cache.read(topic)?;
    let mode = config.color_mode(args.color_flag());
    let output = highlight::render(&text, mode, stdout_is_interactive);

    write_stdout(&output)
}

fn command_list(config: &Config, topic: &Topic) -> quick::Result<()> {
    let names = config.cache().list(topic.topic.as_deref())?;
    write_stdout(&names.join("\n"))
}

fn command_edit(config: &Config, topic: &Topic) -> quick::Result<()> {
    let cache = config.cache();
    let path = cache.resolve(topic)?;
    cache.ensure_parent(&path)?;

    edit::edit_file(config.editor.command.as_deref(), &path)
}

fn command_web(config: &Config, topic: &Topic) -> quick::Result<()> {
    let url = web::open_topic(&config.web.base_url, topic)?;
    println!("Opened {}", url);
    Ok(())
}

fn command_update(config: &Config) -> quick::Result<()> {
    let plan = update::update(&config.cache.dir, &config.cache.repository)?;
    let verb = match plan {
        update::UpdatePlan::Clone => "Downloaded",
        update::UpdatePlan::Pull => "Updated",
    };
    println!("{} quick files in {}", verb, config.cache.dir.display());
    Ok(())
}

/// Whether stdout is a terminal that should receive color
fn stdout_is_interactive() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Write `text` and a trailing newline, treating a closed pipe as success
fn write_stdout(text: &str) -> quick::Result<()> {
    let mut stdout = io::stdout().lock();
    match writeln!(stdout, "{}", text).and_then(|_| stdout.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(QuickError::Io(e)),
    }
}
