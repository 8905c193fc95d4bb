//! Placeholder extraction and variable reconciliation

use std::cmp::Ordering;

use lazy_static::lazy_static;
use regex::Regex;

use super::types::Variable;

lazy_static! {
    /// A positional `{{n}}` placeholder. ASCII digits only.
    pub(crate) static ref PLACEHOLDER_RE: Regex = Regex::new(r"\{\{([0-9]+)\}\}").unwrap();
}

/// Extract the distinct placeholder keys of `body`, numerically ascending.
///
/// Keys are the literal digit spans, so `{{10}}` yields `"10"` and sorts
/// after `"9"`. Appearance order in the body is irrelevant.
pub fn extract_variables(body: &str) -> Vec<String> {
    let mut keys: Vec<String> = PLACEHOLDER_RE
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect();

    keys.sort_by(|a, b| compare_keys(a, b));
    keys.dedup();
    keys
}

/// Bring `previous` in line with freshly extracted `keys`.
///
/// Keys still present keep their name and example, new keys get empty ones,
/// vanished keys are dropped. The result follows the order of `keys`.
pub fn reconcile_variables(previous: &[Variable], keys: &[String]) -> Vec<Variable> {
    keys.iter()
        .map(|key| {
            previous
                .iter()
                .find(|v| &v.key == key)
                .cloned()
                .unwrap_or_else(|| Variable::empty(key.as_str()))
        })
        .collect()
}

/// Re-extract `body` and reconcile `previous` against it
pub fn sync_variables(previous: &[Variable], body: &str) -> Vec<Variable> {
    reconcile_variables(previous, &extract_variables(body))
}

/// Numeric value of a digit span with leading zeros stripped.
///
/// Working on the string keeps arbitrarily long spans comparable without
/// overflow.
pub(crate) fn numeric_form(key: &str) -> &str {
    let trimmed = key.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Order digit spans by numeric value, then literally to keep it total
pub(crate) fn compare_keys(a: &str, b: &str) -> Ordering {
    let (na, nb) = (numeric_form(a), numeric_form(b));
    na.len()
        .cmp(&nb.len())
        .then_with(|| na.cmp(nb))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(key: &str, name: &str, example: &str) -> Variable {
        Variable {
            key: key.to_string(),
            name: name.to_string(),
            example: example.to_string(),
        }
    }

    #[test]
    fn test_extract_sorted_and_deduplicated() {
        assert_eq!(extract_variables("{{2}}{{1}}{{2}}"), vec!["1", "2"]);
    }

    #[test]
    fn test_extract_numeric_not_lexical() {
        let body = "{{10}} a {{9}} b {{1}} c {{2}}";
        assert_eq!(extract_variables(body), vec!["1", "2", "9", "10"]);
    }

    #[test]
    fn test_extract_no_placeholders() {
        assert!(extract_variables("").is_empty());
        assert!(extract_variables("Hello there").is_empty());
        assert!(extract_variables("{{name}} and {1} and {{ 1 }}").is_empty());
    }

    #[test]
    fn test_extract_ignores_non_ascii_digits() {
        assert!(extract_variables("{{١}}").is_empty());
    }

    #[test]
    fn test_extract_inside_extra_braces() {
        assert_eq!(extract_variables("{{{1}}}"), vec!["1"]);
    }

    #[test]
    fn test_extract_idempotent() {
        let body = "Oi {{3}}, seu pedido {{1}} chega em {{2}}";
        assert_eq!(extract_variables(body), extract_variables(body));
    }

    #[test]
    fn test_compare_keys_handles_leading_zeros_and_long_spans() {
        assert_eq!(compare_keys("01", "1"), Ordering::Less);
        assert_eq!(compare_keys("002", "10"), Ordering::Less);
        assert_eq!(
            compare_keys("99999999999999999999999", "100000000000000000000000"),
            Ordering::Less
        );
        assert_eq!(numeric_form("000"), "0");
    }

    #[test]
    fn test_reconcile_adds_and_removes() {
        let previous = vec![named("1", "cliente", "Ana"), named("3", "old", "x")];
        let keys = vec!["1".to_string(), "2".to_string()];

        let result = reconcile_variables(&previous, &keys);
        assert_eq!(result, vec![named("1", "cliente", "Ana"), Variable::empty("2")]);
    }

    #[test]
    fn test_reconcile_clears_when_no_keys() {
        let previous = vec![named("1", "cliente", "Ana")];
        assert!(reconcile_variables(&previous, &[]).is_empty());
    }

    #[test]
    fn test_sync_round_trip_preserves_existing_entries() {
        let vars = sync_variables(&[], "{{1}} oi {{2}}");
        assert_eq!(vars, vec![Variable::empty("1"), Variable::empty("2")]);

        let mut vars = vars;
        vars[0].name = "nome".to_string();
        vars[0].example = "Maria".to_string();

        let vars = sync_variables(&vars, "{{1}} oi");
        assert_eq!(vars, vec![named("1", "nome", "Maria")]);
    }
}
