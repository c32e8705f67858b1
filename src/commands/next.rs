//! `seqname next` command.

use serde_json::Value;

use crate::adapters::FieldOverride;
use crate::cli::NextArgs;
use crate::error::GeneratorError;
use crate::generator::{Generator, Request, DEFAULT_GROUP};
use crate::options::{GeneratorConfig, GroupOptions};

/// Execute the `next` command, returning one name per output line.
///
/// With `--context`, each context is offered to the `--id-field` override
/// and falls back to the default sequence. Otherwise `count` names are
/// drawn from the requested group.
///
/// # Errors
///
/// Returns an error string if a context is not valid JSON.
pub fn run(args: &NextArgs, config: GeneratorConfig) -> Result<Vec<String>, String> {
    let mut generator = Generator::from_parts(FieldOverride::new(args.id_fields.clone()), config);

    if !args.contexts.is_empty() {
        let contexts = args
            .contexts
            .iter()
            .map(String::as_str)
            .map(parse_context)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;
        return Ok(contexts.into_iter().map(|context| generator.next(context)).collect());
    }

    Ok(generator.take(request_for(args), args.count))
}

fn request_for(args: &NextArgs) -> Request {
    let per_call = GroupOptions {
        digit_width: args.digits,
        auto_max: args.auto,
        prefix: args.prefix.clone(),
    };
    let group = args.group.clone();

    match (group, per_call.is_empty()) {
        (None, true) => Request::Default,
        (Some(group), true) => Request::Group(group),
        (group, false) => {
            Request::GroupWith(group.unwrap_or_else(|| DEFAULT_GROUP.to_owned()), per_call)
        }
    }
}

/// Parses a `--context` argument as JSON.
fn parse_context(raw: &str) -> Result<Value, GeneratorError> {
    serde_json::from_str(raw).map_err(|e| GeneratorError::InvalidContext {
        input: raw.to_owned(),
        reason: e.to_string(),
    })
}
