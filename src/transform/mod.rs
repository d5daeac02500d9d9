//! Content rewriting: ordered literal substitutions plus a timestamp header.
//!
//! Rules are applied one after another over the running text, so a later
//! rule sees whatever earlier rules produced. `"hello"` → `"HELLO"`
//! followed by `"HELLO"` → `"bye"` turns `hello` into `bye`. That
//! compounding is part of the contract.

use chrono::{DateTime, TimeZone};

use crate::models::Rule;

/// `strftime` pattern for the header timestamp.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result of rewriting a file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// Header line, blank line, then the rewritten body.
    pub text: String,
    /// Rules that matched at least once, in the order they fired.
    pub applied: Vec<Rule>,
}

/// Apply every rule in order. Returns the rewritten body and the rules
/// that fired.
///
/// A rule whose `find` is absent (or empty) is skipped without a trace.
pub fn apply_rules(content: &str, rules: &[Rule]) -> (String, Vec<Rule>) {
    let mut body = content.to_string();
    let mut applied = Vec::new();

    for rule in rules {
        if rule.find.is_empty() || !body.contains(&rule.find) {
            continue;
        }
        body = body.replace(&rule.find, &rule.replace);
        tracing::debug!(find = %rule.find, replace = %rule.replace, "rule applied");
        applied.push(rule.clone());
    }

    (body, applied)
}

/// The header line written above every rewritten file (without newline).
pub fn header_line<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("/* Modified on: {} */", now.format(TIMESTAMP_FORMAT))
}

/// Rewrite `content` with `rules` and prepend the timestamp header.
pub fn transform<Tz>(content: &str, rules: &[Rule], now: &DateTime<Tz>) -> Transformed
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let (body, applied) = apply_rules(content, rules);
    Transformed {
        text: format!("{}\n\n{body}", header_line(now)),
        applied,
    }
}
