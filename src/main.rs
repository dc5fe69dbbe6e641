use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  crossterm::style::Stylize,
  reddit::{Client, Post},
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal},
    process,
  },
  tracing::{debug, info},
  tracing_subscriber::EnvFilter,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn report(error: &anyhow::Error) {
  let use_color = io::stderr().is_terminal();

  let label = |text: &str| {
    if use_color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  eprintln!("{} {error}", label("error:"));

  let causes = error.chain().skip(1).collect::<Vec<_>>();

  if !causes.is_empty() {
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

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_logging();

  arguments.run().await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    report(&error);
    process::exit(1);
  }
}
