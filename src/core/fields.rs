//! core::fields
//!
//! Normalization of CLI task flags into API request fields.
//!
//! The web service names fields differently from the CLI surface:
//! `--difficulty easy` becomes `"priority": 1`, `--checklist false`
//! becomes `"collapseChecklist": false`, and so on. Flags the user did
//! not pass are simply absent from the result.

use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Task difficulty, mapped to the service's priority multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// The priority multiplier the API expects for this difficulty.
    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    /// Parse a difficulty word. Used as a clap value parser.
    pub fn parse_arg(word: &str) -> Result<Difficulty, String> {
        match word {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{}' (expected easy, medium, or hard)",
                other
            )),
        }
    }
}

/// Task field flags as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct TaskFlags {
    pub text: Option<String>,
    pub notes: Option<String>,
    /// Collapse the checklist display on the web client.
    pub checklist: Option<bool>,
    pub difficulty: Option<Difficulty>,
    pub date: Option<NaiveDate>,
}

/// Map present flags to their API field names and encodings.
pub fn from_flags(flags: &TaskFlags) -> Map<String, Value> {
    let mut fields = Map::new();
    if let Some(text) = &flags.text {
        fields.insert("text".to_string(), Value::from(text.clone()));
    }
    if let Some(notes) = &flags.notes {
        fields.insert("notes".to_string(), Value::from(notes.clone()));
    }
    if let Some(collapse) = flags.checklist {
        fields.insert("collapseChecklist".to_string(), Value::from(collapse));
    }
    if let Some(difficulty) = flags.difficulty {
        fields.insert("priority".to_string(), Value::from(difficulty.multiplier()));
    }
    if let Some(date) = flags.date {
        let encoded = date.format("%Y-%m-%d").to_string();
        fields.insert("date".to_string(), Value::from(encoded));
    }
    fields
}

/// Overwrite `base` with every key present in `updates`, leaving all
/// other keys untouched.
pub fn merge_fields(base: &mut Map<String, Value>, updates: &Map<String, Value>) {
    for (key, value) in updates {
        base.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn difficulty_multipliers() {
        assert_eq!(Difficulty::Easy.multiplier(), 1.0);
        assert_eq!(Difficulty::Medium.multiplier(), 1.5);
        assert_eq!(Difficulty::Hard.multiplier(), 2.0);
    }

    #[test]
    fn unknown_difficulty_word_fails() {
        assert!(Difficulty::parse_arg("extreme").is_err());
    }

    #[test]
    fn present_flags_are_mapped() {
        let flags = TaskFlags {
            difficulty: Some(Difficulty::Medium),
            date: Some(NaiveDate::from_ymd_opt(2017, 12, 1).unwrap()),
            ..TaskFlags::default()
        };
        let fields = from_flags(&flags);
        assert_eq!(fields.get("priority"), Some(&json!(1.5)));
        assert_eq!(fields.get("date"), Some(&json!("2017-12-01")));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn absent_flags_are_omitted() {
        assert!(from_flags(&TaskFlags::default()).is_empty());
    }

    #[test]
    fn checklist_flag_renames_to_collapse() {
        let flags = TaskFlags {
            checklist: Some(true),
            ..TaskFlags::default()
        };
        assert_eq!(
            from_flags(&flags).get("collapseChecklist"),
            Some(&json!(true))
        );
    }

    #[test]
    fn merge_with_empty_updates_is_identity() {
        let mut base = from_flags(&TaskFlags {
            text: Some("Count to three".to_string()),
            ..TaskFlags::default()
        });
        let before = base.clone();
        merge_fields(&mut base, &Map::new());
        assert_eq!(base, before);
    }

    #[test]
    fn merge_overwrites_only_update_keys() {
        let mut base = Map::new();
        base.insert("text".to_string(), json!("old"));
        base.insert("notes".to_string(), json!("keep"));

        let mut updates = Map::new();
        updates.insert("text".to_string(), json!("new"));

        merge_fields(&mut base, &updates);
        assert_eq!(base.get("text"), Some(&json!("new")));
        assert_eq!(base.get("notes"), Some(&json!("keep")));
    }
}
