//! Toggler CLI
//!
//! Prints the word that follows `<WORD>` in the toggle groups configured for
//! `<FILETYPE>`

mod output;

use anyhow::Context;
use clap::{CommandFactory, Parser, error::ErrorKind};
use clap_complete::{Shell, generate};
use std::io::{self, BufRead};
use std::process::ExitCode;
use toggler_core::{
    CONFIG_ENV_VAR, ConfigLoader, Toggle, ToggleOptions, Toggler, TogglerError, init_tracing,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "toggler")]
#[command(about = "Cycle a word through configured alternatives (true/false, get/set, ...)")]
#[command(version = toggler_core::VERSION)]
#[command(
    long_about = "Toggler looks up a word in the toggle groups configured for a file type,\n\
then in the groups of every scope it extends and finally in `global`,\n\
and prints the next word of the first group containing it.\n\
\n\
Options go before <FILETYPE>: everything after it, including words such as\n\
`--` or `-=`, is taken as the word to toggle.\n\
\n\
Examples:\n  \
toggler cpp true                # prints `false`\n  \
toggler rust Enable             # prints `Disable`, keeping Title case\n  \
toggler c -=                    # prints `+=` with [\"+=\", \"-=\"] configured\n  \
echo get | toggler --stdin lua  # read the word from stdin\n  \
toggler -c ~/dotfiles cpp on    # use ~/dotfiles/toggles.toml"
)]
struct Cli {
    /// File type whose scope is searched first
    #[arg(required_unless_present = "generate_completion", allow_hyphen_values = true)]
    filetype: Option<String>,

    /// Word to toggle; may start with `-` (`-=`, `--`, `-`)
    #[arg(
        required_unless_present_any = ["generate_completion", "stdin"],
        conflicts_with = "stdin",
        allow_hyphen_values = true
    )]
    word: Option<String>,

    /// Read the word from the first line of stdin instead of <WORD>
    #[arg(long, help = "Read the word to toggle from stdin")]
    stdin: bool,

    /// Toggle file or directory containing `toggles.toml`
    #[arg(
        short,
        long,
        env = CONFIG_ENV_VAR,
        help = "Path to toggles.toml or its directory (supports ~ and $VARS)"
    )]
    config: Option<String>,

    /// Match case-sensitively and print stored casing verbatim
    #[arg(long, help = "Disable case folding and case reconstruction")]
    exact: bool,

    /// Ignore `extends` lists
    #[arg(long, help = "Only search the file type's own scope and global")]
    no_extends: bool,

    /// Do not echo the original word when it is not found
    #[arg(long, help = "Print nothing to stdout when the word is not found")]
    no_echo: bool,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(
        long,
        value_enum,
        help = "Generate completion script for specified shell"
    )]
    generate_completion: Option<Shell>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Usage errors go to stderr; the toggle file is never read
                let _ = e.print();
                return ExitCode::FAILURE;
            }
        },
    };

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let log_level = match cli.verbose {
        0 => "toggler=error",
        1 => "toggler=warn",
        2 => "toggler=info",
        3 => "toggler=debug",
        _ => "toggler=trace",
    };
    init_tracing(log_level);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output::report_error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if let Some(shell) = cli.generate_completion {
        generate_completion_script(shell);
        return Ok(ExitCode::SUCCESS);
    }

    let Some(filetype) = cli.filetype else {
        unreachable!("clap requires <FILETYPE> unless --generate-completion is given");
    };
    let word = match (cli.word, cli.stdin) {
        (None, true) => read_stdin_word()?,
        (Some(word), false) => word,
        _ => unreachable!("clap requires exactly one of <WORD> and --stdin"),
    };

    let config = ConfigLoader::load(cli.config.as_deref(), None)?;
    let options = ToggleOptions {
        case_insensitive: !cli.exact,
        follow_extends: !cli.no_extends,
        ..ToggleOptions::default()
    };
    debug!(?options, "toggle options");

    let toggler = Toggler::new(config, options);
    match toggler.toggle(&filetype, &word) {
        Toggle::Next { word: next, .. } => {
            output::write_word(&next).context("Failed to write toggled word")?;
            Ok(ExitCode::SUCCESS)
        }
        Toggle::Unchanged { word } => {
            if !cli.no_echo {
                output::write_word(&word).context("Failed to echo original word")?;
            }
            output::report_miss(&filetype, &word);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Read the word from the first line of stdin
fn read_stdin_word() -> toggler_core::Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut buffer)
        .map_err(|e| TogglerError::input_error(format!("Failed to read word from stdin: {e}")))?;

    let word = buffer.trim_end_matches(['\n', '\r']);
    if word.trim().is_empty() {
        return Err(TogglerError::input_error("Need a word to toggle"));
    }
    Ok(word.to_string())
}

fn generate_completion_script(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
