//! Sample rendering of template text

use regex::Captures;

use super::types::Variable;
use super::variables::PLACEHOLDER_RE;

/// Substitute `{{n}}` placeholders with the matching variable's example.
///
/// Placeholders whose variable is missing or has an empty example are left
/// untouched. Substituted text is never rescanned.
pub fn render_preview(text: &str, variables: &[Variable]) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| {
            variables
                .iter()
                .find(|v| v.key == caps[1] && !v.example.is_empty())
                .map(|v| v.example.clone())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(key: &str, example: &str) -> Variable {
        Variable {
            key: key.to_string(),
            name: String::new(),
            example: example.to_string(),
        }
    }

    #[test]
    fn test_render_simple() {
        let vars = vec![var("1", "Maria"), var("2", "#4521")];
        assert_eq!(
            render_preview("Olá {{1}}, seu pedido {{2}} saiu. Obrigado {{1}}!", &vars),
            "Olá Maria, seu pedido #4521 saiu. Obrigado Maria!"
        );
    }

    #[test]
    fn test_missing_example_kept_verbatim() {
        let vars = vec![var("1", "")];
        assert_eq!(render_preview("Oi {{1}} {{2}}", &vars), "Oi {{1}} {{2}}");
    }

    #[test]
    fn test_example_not_rescanned() {
        let vars = vec![var("1", "{{2}}"), var("2", "nope")];
        assert_eq!(render_preview("x {{1}}", &vars), "x {{2}}");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(render_preview("plain text", &[]), "plain text");
    }
}
