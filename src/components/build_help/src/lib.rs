use domain::DomainType;
use itertools::Itertools;
use schema::{Arity, OptionSpec, ResolvedBuiltin, Schema, Shadowing};
use std::fmt::Write;

struct Row {
    names: String,
    description: Option<String>,
}

/// Renders usage and help text for an option schema. Documentation is
/// reproduced as given, only its continuation lines are indented.
pub fn build_help(schema: &Schema, program_name: &str) -> String {
    let mut help = String::new();

    if let Some(summary) = schema.summary() {
        help.push_str(summary.trim_end());
        help.push_str("\n\n");
    }

    help.push_str("Usage:\n");
    let _ = writeln!(help, "  {} [options]", program_name);

    let rows = schema
        .options()
        .iter()
        .map(option_row)
        .chain(schema.builtins().iter().map(builtin_row))
        .collect_vec();

    let width = rows
        .iter()
        .map(|row| row.names.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    help.push_str("\nOptions:\n");

    for row in rows.iter() {
        match &row.description {
            Some(description) => {
                let mut lines = description.lines();
                let first = lines.next().unwrap_or_default();
                let _ = writeln!(help, "  {:width$}{}", row.names, first, width = width);

                for line in lines {
                    let _ = writeln!(help, "  {:width$}{}", "", line, width = width);
                }
            }
            None => {
                let _ = writeln!(help, "  {}", row.names);
            }
        }
    }

    if !schema.shadowings().is_empty() {
        help.push_str("\nNotes:\n");

        for shadowing in schema.shadowings() {
            let _ = writeln!(help, "  {}", shadowing_note(shadowing));
        }
    }

    help
}

fn option_row(option: &OptionSpec) -> Row {
    let names = option
        .short_flag()
        .into_iter()
        .chain(std::iter::once(option.long_flag()))
        .join(", ");

    Row {
        names: format!("{} {}", names, placeholder(option.arity, option.ty())),
        description: option.parameter.documentation.clone(),
    }
}

fn builtin_row(resolved: &ResolvedBuiltin) -> Row {
    let names = resolved
        .shorts
        .iter()
        .map(|short| format!("-{}", short))
        .chain(std::iter::once(resolved.long_flag()))
        .join(", ");

    let names = if resolved.builtin.takes_value() {
        format!("{} <String>", names)
    } else {
        names
    };

    Row {
        names,
        description: Some(resolved.builtin.description().into()),
    }
}

fn placeholder(arity: Arity, ty: &DomainType) -> String {
    match (arity, ty) {
        (Arity::Flag, _) => "[true|false]".into(),
        (_, DomainType::Array(element)) => format!("<{}>...", element),
        (_, ty) => format!("<{}>", ty),
    }
}

fn shadowing_note(shadowing: &Shadowing) -> String {
    match &shadowing.renamed_to {
        Some(renamed_to) => format!(
            "Parameter '{}' uses '--{}', the built-in option moved to '--{}'.",
            shadowing.parameter,
            shadowing.builtin.primary(),
            renamed_to
        ),
        None => format!(
            "Parameter '{}' uses '--{}', the built-in option is unavailable.",
            shadowing.parameter,
            shadowing.builtin.primary(),
        ),
    }
}

#[cfg(test)]
mod tests;
