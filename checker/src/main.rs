use checker::error::CheckerError;
use checker::judge::{self, Verdict};
use checker::profiles::Profile;
use clap::{Parser, ValueEnum};
use common::config::Config;
use common::logger::init_logger;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TokenMode {
    /// Single printable ASCII characters, compared exactly
    Chars,
    /// Finite decimal numbers, compared under a tolerance
    Reals,
}

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The contestant's output file
    output: PathBuf,
    /// The ground-truth answer file
    answer: PathBuf,
    /// Whether the test case is hidden: "0" or "1"
    #[arg(action = clap::ArgAction::Set, value_parser = parse_hidden)]
    hidden: bool,
    /// The original input file; accepted for positional compatibility, never read
    #[allow(dead_code)]
    input: Option<PathBuf>,
    /// Token profile to grade under
    #[arg(long, value_enum, default_value_t = TokenMode::Chars)]
    mode: TokenMode,
    /// Name the diverging tokens in the grade message
    #[arg(long)]
    show_diff: bool,
    /// Echo the claimed output as parsed after a mismatch
    #[arg(long)]
    show_output: bool,
}

fn parse_hidden(raw: &str) -> Result<bool, String> {
    match raw {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(format!("hidden flag must be \"0\" or \"1\", got \"{other}\"")),
    }
}

fn run(args: &Args) -> Result<Verdict, CheckerError> {
    match args.mode {
        TokenMode::Chars => judge::grade(
            &Profile::chars()
                .with_diff(args.show_diff)
                .with_output_echo(args.show_output),
            &args.output,
            &args.answer,
            args.hidden,
        ),
        TokenMode::Reals => judge::grade(
            &Profile::reals()
                .with_diff(args.show_diff)
                .with_output_echo(args.show_output),
            &args.output,
            &args.answer,
            args.hidden,
        ),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::init(".env");
    init_logger(&config.log_level, &config.log_file);

    info!(
        "grading {:?} against {:?} (mode: {:?}, hidden: {})",
        args.output, args.answer, args.mode, args.hidden
    );

    let verdict = match run(&args) {
        Ok(verdict) => verdict,
        Err(err) => {
            // Environment failure: no grade line, distinct exit status.
            error!("checker aborted: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", verdict.protocol_line());
    if let Some(echo) = &verdict.echo {
        println!("{echo}");
    }
    ExitCode::SUCCESS
}
