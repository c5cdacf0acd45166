//! Interactive checking against a loaded language.
//!
//! Each entered line is tokenized and recognized on its own. Languages
//! with bracketed nesting can opt into continuation, where a line with open
//! brackets keeps reading so multi-line documents can be typed or pasted.

use std::io::Write;

use lexgram_foundation::{Error, Result};
use lexgram_lexer::IgnoreSet;
use lexgram_recognizer::Language;

use crate::cli::token_table;
use crate::editor::{LineEditor, ReadResult, RustylineEditor, brackets_balanced};

const COMMANDS: [&str; 4] = [":tokens", ":grammar", ":help", ":quit"];

const HELP: &str = "\
Enter text to check it against the grammar.
  :tokens    toggle the token listing
  :grammar   print the grammar
  :help      show this message
  :quit      exit (or Ctrl+D)";

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The language inputs are checked against.
    language: Language,

    /// Whether to list tokens before the verdict.
    show_tokens: bool,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Whether open brackets continue input on the next line.
    continuation: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(language: Language) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, language))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, language: Language) -> Self {
        let keywords = COMMANDS
            .iter()
            .map(ToString::to_string)
            .chain(language.lexer().token_types().iter().map(|tt| tt.name.clone()))
            .collect();
        editor.set_keywords(keywords);

        Self {
            editor,
            language,
            show_tokens: false,
            show_banner: true,
            continuation: false,
            prompt: "lexgram> ".to_string(),
            continuation_prompt: "   ...> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Enables or disables bracket continuation.
    ///
    /// Only suits languages where `()`, `[]`, `{}` and `"` nest and pair up
    /// the way they do in JSON.
    #[must_use]
    pub const fn with_continuation(mut self, enabled: bool) -> Self {
        self.continuation = enabled;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the language.
    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.show_banner {
            self.print_banner(out)?;
        }

        loop {
            let Some(input) = self.read_input()? else {
                break;
            };
            let trimmed = input.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.editor.add_history(trimmed);

            if trimmed == ":quit" {
                break;
            }
            let text = match self.eval(&input) {
                Ok(text) => text,
                Err(e) => format!("Error: {e}"),
            };
            writeln!(out, "{text}").map_err(|e| Error::io("<output>", &e))?;
        }

        writeln!(out, "Goodbye!").map_err(|e| Error::io("<output>", &e))
    }

    /// Evaluates one input and returns the text to show.
    ///
    /// # Errors
    ///
    /// Returns the tokenizer or recognizer error for ordinary input.
    pub fn eval(&mut self, input: &str) -> Result<String> {
        match input.trim() {
            ":tokens" => {
                self.show_tokens = !self.show_tokens;
                let state = if self.show_tokens { "on" } else { "off" };
                return Ok(format!("token listing {state}"));
            }
            ":grammar" => return Ok(self.language.grammar().to_string().trim_end().to_string()),
            ":help" => return Ok(HELP.to_string()),
            _ => {}
        }

        let lines: Vec<&str> = input.lines().collect();
        let tokens = self.language.tokenize(&lines, &IgnoreSet::new())?;
        let mut text = String::new();
        if self.show_tokens {
            text.push_str(&token_table(&tokens));
        }
        self.language.parse(&tokens)?;
        text.push_str("Parse: OK");
        Ok(text)
    }

    /// Reads one line, or several while continuation is on and brackets
    /// are open.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);

                    if !self.continuation
                        || input.trim_start().starts_with(':')
                        || brackets_balanced(&input)
                    {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => return Ok(Some(String::new())),
                ReadResult::Eof if first_line => return Ok(None),
                ReadResult::Eof => return Ok(Some(input)),
            }
        }
    }

    fn print_banner<W: Write>(&self, out: &mut W) -> Result<()> {
        let start = self.language.grammar().start().unwrap_or("(none)");
        writeln!(
            out,
            "lexgram {}\nStart symbol: {start}\nType :help for commands, Ctrl+D to exit.",
            env!("CARGO_PKG_VERSION")
        )
        .map_err(|e| Error::io("<output>", &e))
    }
}
