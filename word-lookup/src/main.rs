use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use config::Config;
use controller::{LookupController, SubmitOutcome};
use dictionary::{DefinitionProvider, Dictionary};
use render::{print_footer, print_header, print_state};
use state::LookupState;
use tracing_subscriber::EnvFilter;
use utilities::{input, parse_command, Command};

mod config;
mod controller;
mod render;
mod state;
mod utilities;

/// Look up english words on the Free Dictionary API.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Look up a single word and exit instead of starting the prompt
    word: Option<String>,
    /// Entries endpoint of the dictionary provider (overrides DICTIONARY_API_URL)
    #[arg(long)]
    api_url: Option<String>,
    /// Request timeout in seconds (overrides DICTIONARY_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.api_url, cli.timeout_secs);
    let dict = Dictionary::from_config(config.dictionary())?;
    tracing::debug!(base_url = dict.base_url(), "dictionary client ready");
    let controller = LookupController::new(dict);

    if let Some(word) = cli.word {
        let mut stdout = io::stdout().lock();
        let state = define_word(&controller, &mut stdout, &word).await?;
        return Ok(exit_code(&state));
    }

    print_header(&mut io::stdout().lock())?;
    while let Some(line) = input("Enter a word: ")? {
        match parse_command(&line) {
            Command::Exit => break,
            Command::Define(word) => {
                let mut stdout = io::stdout().lock();
                define_word(&controller, &mut stdout, word).await?;
            }
        }
    }
    print_footer(&mut io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}

/// One-shot lookups report a failed lookup through the exit status.
fn exit_code(state: &LookupState) -> ExitCode {
    if state.error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn define_word<P: DefinitionProvider>(
    controller: &LookupController<P>,
    out: &mut impl Write,
    word: &str,
) -> io::Result<LookupState> {
    controller.set_query(word).await;
    let outcome = controller.submit().await;
    let state = controller.state().await;
    tracing::debug!(
        ?outcome,
        meanings = state.meanings().map_or(0, <[_]>::len),
        "lookup finished"
    );
    if outcome == SubmitOutcome::Settled {
        print_state(out, word, &state)?;
    }
    out.flush()?;
    Ok(state)
}
