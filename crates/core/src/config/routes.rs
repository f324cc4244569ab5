//! Glob route rules (`/docs/**`, `/blog/*`).

use regex::Regex;

use crate::config::types::RouteRule;

#[derive(Debug, Clone)]
struct CompiledRule {
    pattern: String,
    matcher: Regex,
    rule: RouteRule,
}

/// Route rules ordered from most to least specific.
#[derive(Debug, Clone, Default)]
pub struct RouteRules {
    rules: Vec<CompiledRule>,
}

impl RouteRules {
    pub fn compile<'a, I>(rules: I) -> Result<Self, (String, regex::Error)>
    where
        I: IntoIterator<Item = (&'a String, &'a RouteRule)>,
    {
        let mut compiled = rules
            .into_iter()
            .map(|(pattern, rule)| {
                glob_to_regex(pattern)
                    .map(|matcher| CompiledRule { pattern: pattern.clone(), matcher, rule: *rule })
                    .map_err(|e| (pattern.clone(), e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Longer patterns are more specific; stable sort keeps input order on ties.
        compiled.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
        Ok(Self { rules: compiled })
    }

    /// The most specific rule matching `route`.
    pub fn rule_for(&self, route: &str) -> Option<&RouteRule> {
        self.rules.iter().find(|r| r.matcher.is_match(route)).map(|r| &r.rule)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.pattern.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// `**` matches any suffix, `*` matches within one path segment.
/// A trailing `/**` also matches the bare prefix (`/docs/**` matches `/docs`).
fn glob_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let (body, tail) = match pattern.strip_suffix("/**") {
        Some(prefix) => (prefix, "(?:/.*)?"),
        None => (pattern, ""),
    };

    let mut re = String::from("^");
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '*' {
            if chars.peek() == Some(&'*') {
                chars.next();
                re.push_str(".*");
            } else {
                re.push_str("[^/]*");
            }
        } else {
            re.push_str(&regex::escape(&c.to_string()));
        }
    }
    re.push_str(tail);
    re.push('$');
    Regex::new(&re)
}
