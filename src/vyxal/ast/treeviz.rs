//! Treeviz formatter for parsed programs

use super::node::{Program, Structure};

/// Default number of label characters shown before truncation
pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(program: &[Structure]) -> String {
    to_treeviz_str_with_width(program, DEFAULT_LABEL_WIDTH)
}

pub fn to_treeviz_str_with_width(program: &[Structure], label_width: usize) -> String {
    let mut result = String::new();
    append_program(&mut result, program, "", label_width);
    result
}

fn append_program(result: &mut String, program: &[Structure], prefix: &str, width: usize) {
    for (i, item) in program.iter().enumerate() {
        let is_last = i == program.len() - 1;
        append_structure(result, item, prefix, is_last, width);
    }
}

fn append_structure(
    result: &mut String,
    item: &Structure,
    prefix: &str,
    is_last: bool,
    width: usize,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&item.display_label(), width);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        item.node_type(),
        display_label
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });

    match item {
        Structure::If { branches } | Structure::While { branches } => {
            append_branches(result, branches, &new_prefix, width);
        }
        Structure::ListLiteral { items } => {
            append_branches(result, items, &new_prefix, width);
        }
        other => {
            for child in other.children() {
                append_program(result, child, &new_prefix, width);
            }
        }
    }
}

fn append_branches(result: &mut String, branches: &[Program], prefix: &str, width: usize) {
    for (i, branch) in branches.iter().enumerate() {
        let is_last = i == branches.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };
        result.push_str(&format!("{}{} Branch: #{}\n", prefix, connector, i));

        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        append_program(result, branch, &new_prefix, width);
    }
}
