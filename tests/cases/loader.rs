#![allow(clippy::expect_used)]

/// Loader for the JSON mutation cases
use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum Entry {
    Case(Case),
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Case {
    pub input: String,
    #[serde(default)]
    pub ops: Vec<Op>,
    pub href: String,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    AddQueryParam { key: String, value: String },
    SetQueryParam { key: String, value: String },
    RemoveQueryParam { key: String },
    AddPathSegment { segment: String },
    RemovePathSegment { index: usize },
    ExpandPath { values: BTreeMap<String, String> },
}

pub fn load_cases() -> Vec<Case> {
    let data = include_str!("../data/mutations.json");
    let entries: Vec<Entry> = serde_json::from_str(data).expect("valid mutation cases");
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Case(case) => Some(case),
            Entry::Comment(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        assert!(cases.len() >= 10);
        assert!(cases.iter().any(|case| case.error.is_some()));
    }
}
