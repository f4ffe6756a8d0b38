use crate::convert::ConvertedRule;
use crate::errors::Result;
use indexmap::{IndexMap, IndexSet};
use regex::Regex;

/// Blacklist of class tokens to exclude from matching.
///
/// A token is blacklisted when it equals a pattern literally or when the
/// pattern, compiled as a shell-style glob (`*`/`?`), matches the whole token.
pub struct Blacklist {
    patterns: Vec<(String, Regex)>,
}

impl Blacklist {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            compiled.push((pattern.clone(), glob_to_regex(pattern)?));
        }
        Ok(Self { patterns: compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.patterns
            .iter()
            .any(|(literal, regex)| token == literal || regex.is_match(token))
    }
}

/// Compile a glob pattern to an anchored whole-string regex.
fn glob_to_regex(pattern: &str) -> Result<Regex> {
    let mut source = String::with_capacity(pattern.len() + 2);
    source.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            _ => source.push_str(&regex::escape(ch.encode_utf8(&mut [0u8; 4]))),
        }
    }
    source.push('$');
    Ok(Regex::new(&source)?)
}

/// Build the token -> Tailwind classes map.
///
/// For every selector of every converted rule, strip all `.` and `#`
/// characters to obtain a candidate token. Skip blacklisted candidates.
/// Only tokens that actually appear in the collected class groups are
/// tracked; classes accumulate with ordered-set semantics, so the same
/// Tailwind class contributed by multiple rules is stored once.
pub fn build_token_map(
    rules: &[ConvertedRule],
    groups: &IndexSet<String>,
    blacklist: &Blacklist,
) -> IndexMap<String, IndexSet<String>> {
    let tokens: IndexSet<&str> = groups
        .iter()
        .flat_map(|group| group.split_whitespace())
        .collect();

    let mut map: IndexMap<String, IndexSet<String>> = IndexMap::new();

    for rule in rules {
        for selector in &rule.selectors {
            let candidate = selector.replace(['.', '#'], "");

            if blacklist.contains(&candidate) {
                continue;
            }
            if !tokens.contains(candidate.as_str()) {
                continue;
            }

            map.entry(candidate)
                .or_default()
                .extend(rule.tailwind_classes.iter().cloned());
        }
    }

    map
}
