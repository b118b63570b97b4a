//! The `eval` and `check` commands: reduce an expression under bindings
//! given on the command line.

use cev_eval::{EvalConfig, Evaluator, Value, VarContext};
use cev_ir::{Name, StringInterner};
use cev_parse::{ParseError, ParseOutput, Parser, MAX_NESTING};

use super::{CommandError, EvalOptions};

fn config(options: &EvalOptions) -> EvalConfig {
    let mut config = EvalConfig::default();
    if let Some(max_depth) = options.max_depth {
        config.max_depth = max_depth;
    }
    config
}

/// Build the variable context. Each `--var` literal is itself reduced with
/// an empty context; `--declare` names are added without values. A name
/// given twice is an error, whichever flags gave it.
fn build_context(
    options: &EvalOptions,
    interner: &StringInterner,
) -> Result<VarContext, CommandError> {
    let empty = VarContext::new();
    let mut ctx = VarContext::new();

    for (name, literal) in &options.vars {
        let key = unclaimed(&ctx, name, interner)?;
        let value = reduce(literal, &empty, interner, config(options)).map_err(|source| {
            CommandError::Binding {
                name: name.clone(),
                source: Box::new(source),
            }
        })?;
        tracing::debug!(%name, %value, "bound variable");
        ctx.define(key, value);
    }
    for name in &options.declared {
        let key = unclaimed(&ctx, name, interner)?;
        ctx.declare(key);
    }

    Ok(ctx)
}

/// Intern `name`, failing if `ctx` already holds it.
fn unclaimed(
    ctx: &VarContext,
    name: &str,
    interner: &StringInterner,
) -> Result<Name, CommandError> {
    let key = interner.intern(name);
    if ctx.is_declared(key) {
        return Err(CommandError::DuplicateBinding {
            name: name.to_string(),
        });
    }
    Ok(key)
}

/// Lex and parse `source`. Raising `--max-depth` past the parser's
/// default nesting limit raises that limit too.
fn parse(
    source: &str,
    interner: &StringInterner,
    config: EvalConfig,
) -> Result<ParseOutput, ParseError> {
    let tokens = cev_lexer::lex(source, interner);
    Parser::new(&tokens, interner)
        .with_max_depth(config.max_depth.max(MAX_NESTING))
        .parse_all()
}

fn reduce(
    source: &str,
    ctx: &VarContext,
    interner: &StringInterner,
    config: EvalConfig,
) -> Result<Value, CommandError> {
    let output = parse(source, interner, config)?;
    let value = Evaluator::builder(&output.arena, ctx, interner)
        .config(config)
        .build()
        .eval(output.root)?;
    Ok(value)
}

/// Reduce `source` to a value.
pub fn eval_expression(source: &str, options: &EvalOptions) -> Result<Value, CommandError> {
    let interner = StringInterner::new();
    let ctx = build_context(options, &interner)?;
    reduce(source, &ctx, &interner, config(options))
}

/// Reduce `source` as a condition.
pub fn check_expression(source: &str, options: &EvalOptions) -> Result<bool, CommandError> {
    let interner = StringInterner::new();
    let ctx = build_context(options, &interner)?;
    let output = parse(source, &interner, config(options))?;
    let holds = Evaluator::builder(&output.arena, &ctx, &interner)
        .config(config(options))
        .build()
        .eval_condition(output.root)?;
    Ok(holds)
}
