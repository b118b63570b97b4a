//! Command handlers for the cev CLI.
//!
//! Each submodule implements one command. Option parsing and error
//! rendering shared between commands live here in the module root.

use cev_eval::EvalError;
use cev_ir::Span;
use cev_parse::ParseError;

mod eval;

pub use eval::{check_expression, eval_expression};

/// Options shared by `eval` and `check`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// `--var NAME=LITERAL`, in command-line order.
    pub vars: Vec<(String, String)>,
    /// `--declare NAME`: names known to exist without a constant value.
    ///
    /// A name may appear only once across `vars` and `declared`.
    pub declared: Vec<String>,
    /// `--max-depth N`
    pub max_depth: Option<usize>,
}

/// Failure of a command after its arguments were accepted.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// A `--var` literal failed to parse or reduce.
    #[error("in binding for `{name}`: {source}")]
    Binding {
        name: String,
        source: Box<CommandError>,
    },

    /// The same name was given to `--var` or `--declare` more than once.
    #[error("`{name}` is bound more than once")]
    DuplicateBinding { name: String },
}

impl CommandError {
    /// Span of the offending source text, if the error carries one.
    ///
    /// Binding errors point into the literal, not the expression, so they
    /// report none.
    pub fn span(&self) -> Option<Span> {
        match self {
            CommandError::Parse(err) => Some(err.span),
            CommandError::Eval(err) => err.span,
            CommandError::Binding { .. } | CommandError::DuplicateBinding { .. } => None,
        }
    }
}

/// Parse everything after `<expr>` for `eval` and `check`.
///
/// Returns the usage error message on malformed options.
pub fn parse_eval_options(args: &[String]) -> Result<EvalOptions, String> {
    let mut options = EvalOptions::default();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--var" => {
                let binding = args.next().ok_or("--var needs NAME=LITERAL")?;
                options.vars.push(parse_binding(binding)?);
            }
            "--declare" => {
                let name = args.next().ok_or("--declare needs NAME")?;
                options.declared.push(parse_declared(name)?);
            }
            "--max-depth" => {
                let depth = args.next().ok_or("--max-depth needs a number")?;
                options.max_depth = Some(parse_depth(depth)?);
            }
            other => {
                if let Some(binding) = other.strip_prefix("--var=") {
                    options.vars.push(parse_binding(binding)?);
                } else if let Some(name) = other.strip_prefix("--declare=") {
                    options.declared.push(parse_declared(name)?);
                } else if let Some(depth) = other.strip_prefix("--max-depth=") {
                    options.max_depth = Some(parse_depth(depth)?);
                } else {
                    return Err(format!("unknown option '{other}'"));
                }
            }
        }
    }

    Ok(options)
}

fn parse_binding(binding: &str) -> Result<(String, String), String> {
    let invalid = || format!("invalid binding '{binding}', expected NAME=LITERAL");
    let (name, literal) = binding.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    Ok((name.to_string(), literal.to_string()))
}

fn parse_declared(name: &str) -> Result<String, String> {
    match name.trim() {
        "" => Err("--declare needs NAME".to_string()),
        name => Ok(name.to_string()),
    }
}

fn parse_depth(depth: &str) -> Result<usize, String> {
    depth
        .parse()
        .map_err(|_| format!("invalid --max-depth '{depth}'"))
}

/// Render `err` for the terminal, underlining its span in `source` when
/// it has one.
pub fn render_error(source: &str, err: &CommandError) -> String {
    let mut out = format!("error: {err}");
    if let Some(span) = err.span() {
        if let Some(snippet) = underline(source, span) {
            out.push('\n');
            out.push_str(&snippet);
        }
    }
    out
}

/// The source followed by a caret line under `span`. `None` for spans
/// outside the source or for multi-line input.
fn underline(source: &str, span: Span) -> Option<String> {
    if source.contains('\n') {
        return None;
    }
    let marked = span.slice(source)?;
    let prefix = source.get(..usize::try_from(span.start).ok()?)?;

    let pad = prefix.chars().count();
    let width = marked.chars().count().max(1);
    Some(format!(
        "  {source}\n  {}{}",
        " ".repeat(pad),
        "^".repeat(width)
    ))
}

#[cfg(test)]
mod tests;
