//! Command-line interface.
//!
//! Argument parsing uses clap; every command writes to a caller-supplied
//! writer so the binary and the tests share one code path.

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use lexgram_foundation::{Error, ErrorKind, Result};
use lexgram_lexer::{IgnoreSet, Token};
use lexgram_recognizer::{Language, RecognizerConfig};
use tracing::info;

use crate::config::{load_language, read_line_bytes};
use crate::repl::Repl;

/// Tokenize text and check it against a context-free grammar.
#[derive(Debug, Parser)]
#[command(name = "lexgram", version, about)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the tokens of the input
    Tokenize(TokenizeArgs),
    /// Check the input against the grammar
    Check(CheckArgs),
    /// Print the grammar of the language
    Grammar(LanguageArgs),
    /// Check inputs interactively
    Repl(LanguageArgs),
}

/// Selects the language.
#[derive(Debug, Args)]
pub struct LanguageArgs {
    /// Config file with token and grammar sections (default: built-in JSON)
    #[arg(long, value_name = "PATH")]
    pub cfg: Option<PathBuf>,
}

/// Selects the input.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Read input lines from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Use the given text as input, split on newlines
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments of `tokenize`.
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Language selection.
    #[command(flatten)]
    pub language: LanguageArgs,

    /// Input selection.
    #[command(flatten)]
    pub input: InputArgs,

    /// Token types to consume without listing
    #[arg(long, value_name = "TYPES", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Print tokens as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Language selection.
    #[command(flatten)]
    pub language: LanguageArgs,

    /// Input selection.
    #[command(flatten)]
    pub input: InputArgs,

    /// Token types to drop before recognition
    #[arg(long, value_name = "TYPES", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Give up after this much search work
    #[arg(long, value_name = "N")]
    pub max_steps: Option<usize>,

    /// Give up when this many derivation steps are pending
    #[arg(long, value_name = "N")]
    pub max_frontier: Option<usize>,
}

impl InputArgs {
    /// Reads the selected input as byte lines.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the input file cannot be read.
    pub fn lines(&self) -> Result<Vec<Vec<u8>>> {
        match (&self.file, &self.text) {
            (Some(path), _) => read_line_bytes(path),
            (None, Some(text)) => Ok(text
                .split('\n')
                .map(|line| line.as_bytes().to_vec())
                .collect()),
            (None, None) => Err(Error::new(ErrorKind::Internal(
                "either --file or --text is required".to_string(),
            ))),
        }
    }
}

/// Runs a parsed command line, writing results to `out`.
///
/// # Errors
///
/// Returns the first error from loading the language, reading input,
/// tokenizing, or recognizing.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Tokenize(args) => tokenize(args, out),
        Command::Check(args) => check(args, out),
        Command::Grammar(args) => grammar(args, out),
        Command::Repl(args) => {
            let language = load(args)?;
            Repl::new(language)?
                .with_continuation(args.cfg.is_none())
                .run(out)
        }
    }
}

fn load(args: &LanguageArgs) -> Result<Language> {
    let language = load_language(args.cfg.as_deref())?;
    let source = args
        .cfg
        .as_ref()
        .map_or_else(|| "built-in JSON".to_string(), |path| path.display().to_string());
    info!(
        %source,
        token_types = language.lexer().token_types().len(),
        non_terminals = language.grammar().non_terminals().len(),
        "loaded language"
    );
    Ok(language)
}

fn tokenize<W: Write>(args: &TokenizeArgs, out: &mut W) -> Result<()> {
    let language = load(&args.language)?;
    let lines = args.input.lines()?;
    let ignore: IgnoreSet = args.ignore.iter().cloned().collect();
    let tokens = language.tokenize(&lines, &ignore)?;

    let text = if args.json {
        let mut json = serde_json::to_string_pretty(&tokens)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        json.push('\n');
        json
    } else {
        token_table(&tokens)
    };
    write!(out, "{text}").map_err(output_error)
}

fn check<W: Write>(args: &CheckArgs, out: &mut W) -> Result<()> {
    let mut config = RecognizerConfig::default();
    config.max_steps = args.max_steps;
    config.max_frontier = args.max_frontier;
    let language = load(&args.language)?.with_config(config);

    let lines = args.input.lines()?;
    let ignore: IgnoreSet = args.ignore.iter().cloned().collect();
    language.check(&lines, &ignore)?;
    writeln!(out, "Parse: OK").map_err(output_error)
}

fn grammar<W: Write>(args: &LanguageArgs, out: &mut W) -> Result<()> {
    let language = load(args)?;
    let grammar = language.grammar();

    let mut text = format!("Start: {}\n", grammar.start().unwrap_or("(none)"));
    text.push_str(&grammar.to_string());
    text.push_str(&format!("Terminals: {}\n", grammar.terminals().join(", ")));
    let unknown = language.unknown_terminals();
    if !unknown.is_empty() {
        text.push_str(&format!("Undeclared token types: {}\n", unknown.join(", ")));
    }
    write!(out, "{text}").map_err(output_error)
}

/// Renders tokens as a count line followed by an aligned table.
///
/// Rows read `[i] TYPE : row:col TEXT` with 1-based index and coordinates.
#[must_use]
pub fn token_table(tokens: &[Token]) -> String {
    let mut text = format!("Tokens: {}\n", tokens.len());
    if tokens.is_empty() {
        return text;
    }

    let coords: Vec<String> = tokens.iter().map(Token::coords).collect();
    let num_width = tokens.len().to_string().len();
    let kind_width = tokens.iter().map(|t| t.kind.len()).max().unwrap_or(0);
    let coords_width = coords.iter().map(String::len).max().unwrap_or(0);

    for (i, (token, coords)) in tokens.iter().zip(&coords).enumerate() {
        text.push_str(&format!(
            "[{:>num_width$}] {:<kind_width$} : {:<coords_width$} {}\n",
            i + 1,
            token.kind,
            coords,
            token.text
        ));
    }
    text
}

fn output_error(e: std::io::Error) -> Error {
    Error::io("<output>", &e)
}
