// laoword-cli: shared utilities for CLI tools.

use std::io::{self, Read};
use std::process;

use laoword_core::span::{GrammarCheckResult, WordSpan};
use laoword_lo::handle::LaoHandle;
use serde::Serialize;

/// Environment variable read when `--max-consonants` is not given.
pub const MAX_CONSONANTS_ENV: &str = "LAOWORD_MAX_CONSONANTS";

/// Parse validator options from command line args and build a handle.
///
/// Recognised:
/// - `--max-consonants N` / `--max-consonants=N`
/// - `--reject-non-lao`
///
/// When no `--max-consonants` flag is present, `LAOWORD_MAX_CONSONANTS`
/// is consulted. Returns `(handle, remaining_args)`.
pub fn parse_options(args: &[String]) -> Result<(LaoHandle, Vec<String>), String> {
    let mut handle = LaoHandle::default();
    let mut max_consonants = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--max-consonants=") {
            max_consonants = Some(val.to_string());
        } else if arg == "--max-consonants" {
            match iter.next() {
                Some(val) => max_consonants = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else if arg == "--reject-non-lao" {
            handle.set_accept_non_lao(false);
        } else {
            remaining.push(arg.clone());
        }
    }

    if max_consonants.is_none() {
        max_consonants = std::env::var(MAX_CONSONANTS_ENV).ok();
    }
    if let Some(val) = max_consonants {
        handle
            .set_option("max_consonants", &val)
            .map_err(|e| e.to_string())?;
    }

    log::debug!("validator options: {:?}", handle.options());
    Ok((handle, remaining))
}

/// Install the `env_logger` backend. Controlled by `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

/// Read all of stdin or exit.
pub fn read_stdin() -> String {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| fatal(&format!("failed to read stdin: {e}")));
    input
}

/// Make control characters visible in one-line output.
pub fn display_text(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// JSON form of a span, matching the field names of the web API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanRecord<'a> {
    pub word: &'a str,
    pub start_index: usize,
    pub end_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grammar_correct: Option<bool>,
}

impl<'a> From<&'a WordSpan> for SpanRecord<'a> {
    fn from(span: &'a WordSpan) -> Self {
        Self {
            word: &span.text,
            start_index: span.start_index,
            end_index: span.end_index,
            grammar_correct: None,
        }
    }
}

impl<'a> From<&'a GrammarCheckResult> for SpanRecord<'a> {
    fn from(result: &'a GrammarCheckResult) -> Self {
        Self {
            grammar_correct: Some(result.grammar_correct),
            ..Self::from(&result.span)
        }
    }
}

/// Serialize records as a pretty JSON array or exit.
pub fn to_json(records: &[SpanRecord<'_>]) -> String {
    serde_json::to_string_pretty(records)
        .unwrap_or_else(|e| fatal(&format!("failed to serialize output: {e}")))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
