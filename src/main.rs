use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  crossterm::style::Stylize,
  hn_api::{Category, Client, Config, Error, Transport},
  serde::Serialize,
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal, Write},
    process,
  },
  subcommand::Subcommand,
  tracing::warn,
  tracing_subscriber::EnvFilter,
};

mod arguments;
mod subcommand;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_tracing() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(io::stderr)
    .try_init();
}

fn run() -> Result {
  initialize_tracing();

  Arguments::parse().run()
}

fn main() {
  if let Err(error) = run() {
    print_error(&error);
    process::exit(1);
  }
}

fn print_error(error: &anyhow::Error) {
  let use_color = io::stderr().is_terminal();

  let label = |text: &'static str| {
    if use_color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  eprintln!("{} {error}", label("error:"));

  let mut causes = error.chain().skip(1).peekable();

  if causes.peek().is_some() {
    eprintln!();
    eprintln!("{}", label("because:"));

    for cause in causes {
      eprintln!("{} {cause}", label("-"));
    }
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    eprintln!("{}", label("backtrace:"));
    eprintln!("{backtrace}");
  }
}
