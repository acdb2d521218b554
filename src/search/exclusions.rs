//! Exclusion-rule parsing and clause building.
//!
//! Administrators configure a newline-delimited blocklist of
//! `<field> <operator> <value>` rules. Each rule becomes a negated clause
//! appended to free-text queries, keeping unpublished or embargoed content
//! out of results without exposing negation syntax to end users.
//!
//! Rules are read fresh from configuration on every query and never cached.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// `<field> <operator-symbol> <value>`; the value may contain spaces.
static RULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+)\s+(\S+)\s+(.+)$").expect("rule pattern is valid"));

/// `{{name}}` placeholder embedded in a rule value.
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid"));

/// Result of resolving one rule line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Parsed and resolved; ready to append as a negated clause.
    Clause {
        field: String,
        operator: String,
        value: String,
    },
    /// Line does not have the three-part shape; skipped.
    NoMatch,
    /// Placeholder with a name this layer cannot expand; stops processing of
    /// every remaining rule for the current query.
    Unresolved { name: String },
}

/// Map a configured operator symbol to the query operator.
///
/// `=` becomes `:`, `>` becomes `GT`, `&` becomes `LT`; anything else passes
/// through unchanged. The `&`-to-less-than pairing is a fixed convention.
fn map_operator(symbol: &str) -> String {
    match symbol {
        "=" => ":".to_string(),
        ">" => "GT".to_string(),
        "&" => "LT".to_string(),
        other => other.to_string(),
    }
}

/// Parse one rule line, expanding `{{today}}` against `today`.
pub fn resolve_rule(line: &str, today: NaiveDate) -> RuleOutcome {
    let Some(caps) = RULE_RE.captures(line.trim()) else {
        return RuleOutcome::NoMatch;
    };

    let field = caps[1].to_string();
    let operator = map_operator(&caps[2]);
    let raw_value = caps[3].trim().to_string();

    let value = match PLACEHOLDER_RE.captures(&raw_value) {
        Some(placeholder) => match &placeholder[1] {
            "today" => format!("'{}T00:00:00+00:00'", today.format("%Y-%m-%d")),
            name => {
                return RuleOutcome::Unresolved {
                    name: name.to_string(),
                };
            }
        },
        None => raw_value,
    };

    RuleOutcome::Clause {
        field,
        operator,
        value,
    }
}

/// Append a negated clause for every resolvable rule in `rules_text`.
///
/// Rules apply in configuration order. A malformed line is skipped silently;
/// an unresolved placeholder stops processing of all remaining rules, and
/// whatever was appended before the stop survives.
pub fn apply_exclusions(query: &str, rules_text: &str, today: NaiveDate) -> String {
    let mut out = query.to_string();
    for line in rules_text.lines() {
        match resolve_rule(line, today) {
            RuleOutcome::Clause {
                field,
                operator,
                value,
            } => {
                out.push_str(&format!(" AND -{field} {operator} {value}"));
            }
            RuleOutcome::NoMatch => continue,
            RuleOutcome::Unresolved { name } => {
                tracing::debug!(
                    placeholder = %name,
                    "unresolved exclusion placeholder, dropping remaining rules"
                );
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn equality_rule_appends_negated_clause() {
        let query = apply_exclusions("shakespeare", "price = 10", day());
        assert_eq!(query, "shakespeare AND -price : 10");
    }

    #[test]
    fn today_placeholder_expands_to_midnight_utc() {
        let outcome = resolve_rule("date > {{today}}", day());
        assert_eq!(
            outcome,
            RuleOutcome::Clause {
                field: "date".into(),
                operator: "GT".into(),
                value: "'2026-08-07T00:00:00+00:00'".into(),
            }
        );
    }

    #[test]
    fn ampersand_maps_to_less_than() {
        let outcome = resolve_rule("expiry & {{today}}", day());
        match outcome {
            RuleOutcome::Clause { operator, .. } => assert_eq!(operator, "LT"),
            other => panic!("expected clause, got {other:?}"),
        }
    }

    #[test]
    fn unknown_operator_passes_through() {
        let query = apply_exclusions("base", "status != draft", day());
        assert_eq!(query, "base AND -status != draft");
    }

    #[test]
    fn malformed_line_is_skipped_without_halting() {
        let rules = "garbage\nprice = 10\nonly-two parts";
        let query = apply_exclusions("base", rules, day());
        assert_eq!(query, "base AND -price : 10");
    }

    #[test]
    fn unresolved_placeholder_halts_remaining_rules() {
        let rules = "price = 10\nfoo > {{bogus}}\nstatus = draft";
        let query = apply_exclusions("base", rules, day());
        // The clause before the bogus placeholder survives; everything after
        // it is dropped.
        assert_eq!(query, "base AND -price : 10");
    }

    #[test]
    fn unresolved_reports_the_placeholder_name() {
        assert_eq!(
            resolve_rule("foo > {{bogus}}", day()),
            RuleOutcome::Unresolved {
                name: "bogus".into()
            }
        );
    }

    #[test]
    fn rules_apply_in_order() {
        let rules = "a = 1\nb > 2";
        let query = apply_exclusions("base", rules, day());
        assert_eq!(query, "base AND -a : 1 AND -b GT 2");
    }

    #[test]
    fn value_may_contain_spaces() {
        let query = apply_exclusions("base", "category = rare books", day());
        assert_eq!(query, "base AND -category : rare books");
    }

    #[test]
    fn blank_lines_are_ignored() {
        let rules = "\nprice = 10\n\n";
        let query = apply_exclusions("base", rules, day());
        assert_eq!(query, "base AND -price : 10");
    }
}
