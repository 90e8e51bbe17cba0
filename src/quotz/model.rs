use crate::error::{QuotzError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single quote. Equality is structural: two records with the same text
/// and category are the same quote. There is no identity field, and records
/// are never edited in place, only appended or bulk-replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Build a quote from raw user input. Both fields are trimmed; empty
    /// text or category after trimming is rejected.
    pub fn new(text: &str, category: &str) -> Result<Self> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() {
            return Err(QuotzError::Validation("quote text is empty".to_string()));
        }
        if category.is_empty() {
            return Err(QuotzError::Validation("category is empty".to_string()));
        }
        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
        })
    }

    /// The display form handed to the terminal: `"<text>" — <category>`.
    pub fn display_line(&self) -> String {
        format!("\"{}\" — {}", self.text, self.category)
    }
}

static SEED: Lazy<Vec<Quote>> = Lazy::new(|| {
    vec![
        Quote {
            text: "The best way to get started is to quit talking and begin doing.".to_string(),
            category: "Motivation".to_string(),
        },
        Quote {
            text: "Life is what happens when you're busy making other plans.".to_string(),
            category: "Life".to_string(),
        },
        Quote {
            text: "Success is not final, failure is not fatal: It is the courage to continue that counts."
                .to_string(),
            category: "Success".to_string(),
        },
    ]
});

/// The built-in starter collection, used when no durable data exists yet
/// (or the durable payload cannot be read).
pub fn seed_quotes() -> Vec<Quote> {
    SEED.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_both_fields() {
        let q = Quote::new("  Be bold.  ", "  Courage  ").unwrap();
        assert_eq!(q.text, "Be bold.");
        assert_eq!(q.category, "Courage");
    }

    #[test]
    fn test_new_rejects_blank_text() {
        assert!(matches!(
            Quote::new("   ", "X"),
            Err(QuotzError::Validation(_))
        ));
    }

    #[test]
    fn test_new_rejects_blank_category() {
        assert!(matches!(
            Quote::new("Hello", "\t"),
            Err(QuotzError::Validation(_))
        ));
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Quote::new("Same", "Cat").unwrap();
        let b = Quote::new("Same", "Cat").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_has_three_distinct_categories() {
        let seed = seed_quotes();
        assert_eq!(seed.len(), 3);
        let cats: Vec<&str> = seed.iter().map(|q| q.category.as_str()).collect();
        assert_eq!(cats, vec!["Motivation", "Life", "Success"]);
    }

    #[test]
    fn test_display_line_format() {
        let q = Quote::new("Hi", "World").unwrap();
        assert_eq!(q.display_line(), "\"Hi\" — World");
    }
}
