//! Named extraction rules
//!
//! Each rule is a pure function over file content. Rules never fail: text
//! that does not match simply yields nothing.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::domain::entities::{DeclaredSymbol, KeywordHit, PurposeStatement};

static JS_DECLARATION_RE: OnceLock<Regex> = OnceLock::new();
static JS_IMPORT_RE: OnceLock<Regex> = OnceLock::new();
static PY_DECLARATION_RE: OnceLock<Regex> = OnceLock::new();
static PY_IMPORT_RE: OnceLock<Regex> = OnceLock::new();
static PURPOSE_LABEL_RE: OnceLock<Regex> = OnceLock::new();
static DESCRIPTION_TAG_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("extraction pattern is a valid regex"))
}

/// 1-based line of a byte offset.
pub fn line_number_at(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

fn first_group<'t>(caps: &Captures<'t>, groups: &[usize]) -> Option<(usize, &'t str)> {
    groups
        .iter()
        .find_map(|&i| caps.get(i).map(|m| (i, m.as_str())))
        .filter(|(_, name)| !name.is_empty())
}

/// `function name`, `name = function` / `name: async function`, `class Name`.
pub fn javascript_declarations(content: &str) -> Vec<DeclaredSymbol> {
    let re = compiled(
        &JS_DECLARATION_RE,
        r"function\s+(\w+)|(\w+)\s*[:=]\s*(?:async\s+)?function|class\s+(\w+)",
    );

    re.captures_iter(content)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let (group, name) = first_group(&caps, &[1, 2, 3])?;
            let line = line_number_at(content, start);
            Some(if group == 3 {
                DeclaredSymbol::class(name, line)
            } else {
                DeclaredSymbol::function(name, line)
            })
        })
        .collect()
}

/// `import ... from '<module>'` and `require('<module>')`, verbatim.
pub fn javascript_imports(content: &str) -> Vec<String> {
    let re = compiled(
        &JS_IMPORT_RE,
        r#"import\s+.*?\s+from\s+['"]([^'"]+)['"]|require\(['"]([^'"]+)['"]\)"#,
    );

    re.captures_iter(content)
        .filter_map(|caps| first_group(&caps, &[1, 2]).map(|(_, m)| m.to_string()))
        .collect()
}

/// `def name` and `class Name`.
pub fn python_declarations(content: &str) -> Vec<DeclaredSymbol> {
    let re = compiled(&PY_DECLARATION_RE, r"def\s+(\w+)|class\s+(\w+)");

    re.captures_iter(content)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let (group, name) = first_group(&caps, &[1, 2])?;
            let line = line_number_at(content, start);
            Some(if group == 2 {
                DeclaredSymbol::class(name, line)
            } else {
                DeclaredSymbol::function(name, line)
            })
        })
        .collect()
}

/// First identifier after `from` or `import`.
pub fn python_imports(content: &str) -> Vec<String> {
    let re = compiled(&PY_IMPORT_RE, r"from\s+(\w+)|import\s+(\w+)");

    re.captures_iter(content)
        .filter_map(|caps| first_group(&caps, &[1, 2]).map(|(_, m)| m.to_string()))
        .collect()
}

/// Case-insensitive substring counts for each vocabulary term, in vocabulary
/// order. Terms that never occur are omitted.
pub fn keyword_hits(content: &str, vocabulary: &[String]) -> Vec<KeywordHit> {
    let lowered = content.to_lowercase();

    vocabulary
        .iter()
        .filter(|keyword| !keyword.is_empty())
        .filter_map(|keyword| {
            let count = lowered.matches(keyword.to_lowercase().as_str()).count();
            (count > 0).then(|| KeywordHit {
                keyword: keyword.clone(),
                count,
            })
        })
        .collect()
}

/// Rest of the line after `purpose:`, `description:`, `overview:` or
/// `@description`, in order of appearance.
pub fn purpose_statements(content: &str) -> Vec<PurposeStatement> {
    let labels = compiled(
        &PURPOSE_LABEL_RE,
        r"(?i)(?:purpose|description|overview)[ \t]*:[ \t]*([^\r\n]+)",
    );
    let tags = compiled(&DESCRIPTION_TAG_RE, r"(?i)@description[ \t]+([^\r\n]+)");

    let mut found: Vec<(usize, String)> = labels
        .captures_iter(content)
        .chain(tags.captures_iter(content))
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let text = caps.get(1)?.as_str().trim();
            (!text.is_empty()).then(|| (start, text.to_string()))
        })
        .collect();
    found.sort_by_key(|(start, _)| *start);

    found
        .into_iter()
        .map(|(start, text)| PurposeStatement {
            text,
            line_number: line_number_at(content, start),
        })
        .collect()
}
