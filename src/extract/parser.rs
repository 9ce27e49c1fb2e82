//! Import-clause parsing for Go sources.
//!
//! Only the syntactic prefix of a file is inspected: the package clause, any
//! top-level comments, and the `import` declarations that follow. Whatever comes
//! after the first other declaration is ignored, so a broken function body never
//! fails the parse.

use crate::error::{GetterError, Result};
use std::fs;
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Read `path` and return the raw import paths declared in its import clause.
pub fn parse_imports(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| GetterError::io(path, e))?;
    parse_import_clause(&content).map_err(|message| GetterError::parse(path, message))
}

/// Parse Go source text and return the import paths in declaration order.
pub fn parse_import_clause(content: &str) -> std::result::Result<Vec<String>, String> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| format!("Go grammar unavailable: {e}"))?;

    let tree = parser.parse(content, None).ok_or_else(|| "parser produced no tree".to_string())?;
    let root = tree.root_node();
    let source = content.as_bytes();

    let mut saw_package = false;
    let mut imports = Vec::new();

    for i in 0..root.named_child_count() {
        let Some(child) = root.named_child(i) else {
            continue;
        };

        match child.kind() {
            "comment" => {}
            "package_clause" => {
                if child.has_error() {
                    return Err(syntax_error("malformed package clause", child));
                }
                saw_package = true;
            }
            "import_declaration" => {
                if !saw_package {
                    return Err(syntax_error("import declared before package clause", child));
                }
                if child.has_error() {
                    return Err(syntax_error("malformed import declaration", child));
                }
                collect_import_specs(child, source, &mut imports)?;
            }
            "ERROR" => {
                if !saw_package || error_reaches_imports(root, i, child, source) {
                    return Err(syntax_error("syntax error in import clause", child));
                }
                break;
            }
            _ => break,
        }
    }

    if !saw_package {
        return Err("missing package clause".to_string());
    }

    Ok(imports)
}

/// An error node belongs to the import clause when it swallows an `import`
/// keyword or when an import declaration still follows it.
fn error_reaches_imports(root: Node<'_>, index: usize, error: Node<'_>, source: &[u8]) -> bool {
    let text = error.utf8_text(source).unwrap_or("");
    if text.lines().any(|line| starts_with_import_keyword(line.trim_start())) {
        return true;
    }
    (index + 1..root.named_child_count())
        .filter_map(|j| root.named_child(j))
        .any(|sibling| sibling.kind() == "import_declaration")
}

fn starts_with_import_keyword(line: &str) -> bool {
    line.strip_prefix("import")
        .is_some_and(|rest| !rest.starts_with(|c: char| c.is_alphanumeric() || c == '_'))
}

fn collect_import_specs(
    declaration: Node<'_>,
    source: &[u8],
    imports: &mut Vec<String>,
) -> std::result::Result<(), String> {
    for i in 0..declaration.named_child_count() {
        let Some(child) = declaration.named_child(i) else {
            continue;
        };
        match child.kind() {
            "import_spec" => imports.push(import_spec_path(child, source)?),
            "import_spec_list" => {
                for j in 0..child.named_child_count() {
                    if let Some(spec) = child.named_child(j) {
                        if spec.kind() == "import_spec" {
                            imports.push(import_spec_path(spec, source)?);
                        }
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn import_spec_path(spec: Node<'_>, source: &[u8]) -> std::result::Result<String, String> {
    let path_node = spec
        .child_by_field_name("path")
        .ok_or_else(|| syntax_error("import without a path", spec))?;
    let literal = path_node
        .utf8_text(source)
        .map_err(|e| format!("invalid UTF-8 in import path: {e}"))?;

    let unquoted = unquote(literal).ok_or_else(|| syntax_error("unterminated import path", spec))?;
    if literal.starts_with('"') && unquoted.contains('\\') {
        return Err(syntax_error("escape sequence in import path", spec));
    }
    if unquoted.is_empty() {
        return Err(syntax_error("empty import path", spec));
    }
    Ok(unquoted.to_string())
}

fn unquote(literal: &str) -> Option<&str> {
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| literal.strip_prefix('`').and_then(|s| s.strip_suffix('`')))
}

fn syntax_error(message: &str, node: Node<'_>) -> String {
    let pos = node.start_position();
    format!("{} at line {}, column {}", message, pos.row + 1, pos.column + 1)
}
