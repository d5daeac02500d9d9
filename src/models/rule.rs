//! Literal find/replace rules.

use serde::{Deserialize, Serialize};

/// One literal substitution: every occurrence of `find` becomes `replace`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub find: String,
    pub replace: String,
}

impl Rule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// The built-in rule list, applied in this order.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new("Original content", "Modified content"),
        Rule::new("hello", "HELLO"),
        Rule::new("world", "WORLD"),
        Rule::new("the", "THE"),
        Rule::new("and", "AND"),
    ]
}
