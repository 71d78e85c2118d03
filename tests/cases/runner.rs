#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Runs the JSON mutation cases against the mutators and the builder
use httpurl::{Builder, Error, Url};

use super::loader::{Case, Op, load_cases};

fn error_kind(err: &Error) -> &'static str {
    match err {
        Error::Parse(_) => "Parse",
        Error::InvalidScheme { .. } => "InvalidScheme",
        Error::MissingHost => "MissingHost",
        Error::InvalidHost { .. } => "InvalidHost",
        Error::InvalidUserinfo => "InvalidUserinfo",
        Error::MissingTemplateValue { .. } => "MissingTemplateValue",
        Error::InvalidTemplateValue { .. } => "InvalidTemplateValue",
    }
}

fn apply(url: &mut Url, op: &Op) -> httpurl::Result<()> {
    match op {
        Op::AddQueryParam { key, value } => httpurl::add_query_param(url, key, value),
        Op::SetQueryParam { key, value } => httpurl::set_query_param(url, key, value),
        Op::RemoveQueryParam { key } => httpurl::remove_query_param(url, key),
        Op::AddPathSegment { segment } => httpurl::add_path_segment(url, segment),
        Op::RemovePathSegment { index } => httpurl::remove_path_segment(url, *index),
        Op::ExpandPath { values } => httpurl::expand_path(url, values)?,
    }
    Ok(())
}

fn apply_to_builder(builder: &mut Builder, op: &Op) -> httpurl::Result<()> {
    match op {
        Op::AddQueryParam { key, value } => {
            builder.add_query_param(key, value);
        }
        Op::SetQueryParam { key, value } => {
            builder.set_query_param(key, value);
        }
        Op::RemoveQueryParam { key } => {
            builder.remove_query_param(key);
        }
        Op::AddPathSegment { segment } => {
            builder.add_path_segment(segment);
        }
        Op::RemovePathSegment { index } => {
            builder.remove_path_segment(*index);
        }
        Op::ExpandPath { values } => {
            builder.expand_path(values)?;
        }
    }
    Ok(())
}

/// Check the outcome of a case, returning a failure description
fn check(case: &Case, result: httpurl::Result<()>, href: &str) -> Option<String> {
    match (&case.error, result) {
        (None, Err(err)) => return Some(format!("unexpected error {err}")),
        (Some(expected), Ok(())) => return Some(format!("expected {expected} error")),
        (Some(expected), Err(err)) if error_kind(&err) != expected.as_str() => {
            return Some(format!("expected {expected} error, got {err}"));
        }
        _ => {}
    }
    (href != case.href).then(|| format!("expected {}, got {href}", case.href))
}

#[test]
fn test_mutation_cases() {
    let mut failures = Vec::new();
    for (i, case) in load_cases().iter().enumerate() {
        let mut url = httpurl::parse(&case.input).unwrap();
        let result = case.ops.iter().try_for_each(|op| apply(&mut url, op));
        if let Some(failure) = check(case, result, url.as_str()) {
            failures.push(format!("#{i} {}: {failure}", case.input));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn test_builder_cases() {
    let mut failures = Vec::new();
    for (i, case) in load_cases().iter().enumerate() {
        let mut builder = Builder::parse(&case.input).unwrap();
        let result = case
            .ops
            .iter()
            .try_for_each(|op| apply_to_builder(&mut builder, op));
        let href = builder.build().unwrap();
        if let Some(failure) = check(case, result, href.as_str()) {
            failures.push(format!("#{i} {}: {failure}", case.input));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
