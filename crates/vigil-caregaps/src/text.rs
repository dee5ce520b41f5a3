//! Keyword matching over free-text problem lists, procedures and
//! immunizations.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CareGapError;
use crate::rules::RULES;

type KeywordList = &'static [&'static str];

/// One compiled matcher per keyword list in the rule table.
static RULE_PATTERNS: LazyLock<Result<HashMap<KeywordList, Regex>, regex::Error>> =
    LazyLock::new(compile_rule_patterns);

fn compile_rule_patterns() -> Result<HashMap<KeywordList, Regex>, regex::Error> {
    let mut patterns = HashMap::new();
    for rule in RULES {
        for keywords in [Some(rule.keywords), rule.trigger.conditions()].into_iter().flatten() {
            if !patterns.contains_key(keywords) {
                patterns.insert(keywords, keyword_pattern(keywords)?);
            }
        }
    }
    Ok(patterns)
}

/// `(?i)\b(?:kw1|kw2|…)\b`: case-insensitive and whole words only, so "fit"
/// does not match "benefit".
pub(crate) fn keyword_pattern(keywords: &[&str]) -> Result<Regex, regex::Error> {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
}

/// First entry in `texts` that mentions any of `keywords`.
pub(crate) fn first_mention<'a>(
    texts: &'a [String],
    keywords: KeywordList,
) -> Result<Option<&'a str>, CareGapError> {
    if keywords.is_empty() {
        return Ok(None);
    }
    let patterns = RULE_PATTERNS
        .as_ref()
        .map_err(|e| CareGapError::Pattern(e.clone()))?;
    let found = match patterns.get(keywords) {
        Some(regex) => find(texts, regex),
        None => find(texts, &keyword_pattern(keywords)?),
    };
    Ok(found)
}

fn find<'a>(texts: &'a [String], regex: &Regex) -> Option<&'a str> {
    texts.iter().map(String::as_str).find(|text| regex.is_match(text))
}
