/// Pledge form fields as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PledgeForm {
    pub name: String,
    pub email: String,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PledgeNotice {
    pub name: String,
    pub email: String,
    pub count: f64,
    pub message: String,
}

impl PledgeForm {
    /// Produces the confirmation notice and clears the form.
    pub fn submit(&mut self) -> PledgeNotice {
        let form = std::mem::take(self);
        let count = coerce_tree_count(&form.count);
        let name = form.name.trim().to_string();
        let greeting = if name.is_empty() { "friend" } else { name.as_str() };
        let plural = if count == 1.0 { "tree" } else { "trees" };

        PledgeNotice {
            message: format!(
                "Thank you, {greeting}! Your pledge to plant {count} {plural} has been received."
            ),
            name,
            email: form.email.trim().to_string(),
            count,
        }
    }
}

/// Numeric coercion of the tree count. Blank or non-numeric input defaults to
/// 1; any other number is kept as typed.
pub fn coerce_tree_count(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_defaults_to_one_only_when_not_numeric() {
        assert_eq!(coerce_tree_count(""), 1.0);
        assert_eq!(coerce_tree_count("many"), 1.0);
        assert_eq!(coerce_tree_count("NaN"), 1.0);
        assert_eq!(coerce_tree_count(" 5 "), 5.0);
    }

    #[test]
    fn numeric_count_is_kept_as_typed() {
        assert_eq!(coerce_tree_count("0"), 0.0);
        assert_eq!(coerce_tree_count("-3"), -3.0);
        assert_eq!(coerce_tree_count("2.7"), 2.7);

        let mut form = PledgeForm {
            count: "2.5".to_string(),
            ..Default::default()
        };
        assert!(form.submit().message.contains("2.5 trees"));
    }

    #[test]
    fn submit_resets_the_form() {
        let mut form = PledgeForm {
            name: "Rahim".to_string(),
            email: "rahim@example.com".to_string(),
            count: "3".to_string(),
        };

        let notice = form.submit();
        assert_eq!(notice.count, 3.0);
        assert_eq!(notice.email, "rahim@example.com");
        assert!(notice.message.contains("Rahim"));
        assert!(notice.message.contains("3 trees"));
        assert_eq!(form, PledgeForm::default());
    }
}
