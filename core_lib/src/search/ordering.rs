//! Presentation ordering for provider lists

use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};
use crate::models::Provider;
use crate::search::query::SortKey;

/// Sorted copy of `records` for a textual sort key.
///
/// Unknown keys return the input order unchanged.
pub fn sort_by(records: &[Provider], key: &str) -> Vec<Provider> {
    match SortKey::parse(key) {
        Some(key) => sort_by_key(records, key),
        None => records.to_vec(),
    }
}

/// Sorting is stable, so equal keys keep their input order.
pub fn sort_by_key(records: &[Provider], key: SortKey) -> Vec<Provider> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Rating => sorted.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortKey::Name => sorted.sort_by(|a, b| locale_compare(&a.name, &b.name)),
        SortKey::Location => sorted.sort_by(|a, b| locale_compare(&a.location, &b.location)),
    }
    sorted
}

/// ASCII punctuation and symbols in root collation order. Whitespace sorts
/// before all of these, digits and letters after.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Comparison modelled on the root collation order:
///
/// 1. base characters, with whitespace < punctuation < symbols < digits < letters,
///    ignoring case and accents (`"a b" < "a-b" < "a,b" < "a.b"`);
/// 2. accents (`"eclair" < "Éclair"`);
/// 3. case, lowercase first (`"amy" < "Amy"`);
/// 4. raw code points, so distinct strings never compare equal.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

pub fn collation_key(input: &str) -> String {
    input
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(|c| c.to_lowercase())
        .collect()
}

fn primary_key(input: &str) -> Vec<(u8, u32)> {
    collation_key(input).chars().map(primary_weight).collect()
}

fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, c as u32)
    } else if let Some(position) = PUNCTUATION_ORDER.find(c) {
        (1, position as u32)
    } else if c.is_numeric() {
        (3, c as u32)
    } else if c.is_alphabetic() {
        (4, c as u32)
    } else {
        (2, c as u32)
    }
}

fn accent_key(input: &str) -> String {
    input.nfd().flat_map(|c| c.to_lowercase()).collect()
}

/// `false` for lowercase characters, so lowercase wins ties.
fn case_key(input: &str) -> Vec<bool> {
    input.nfd().map(|c| !c.is_lowercase()).collect()
}
