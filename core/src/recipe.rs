use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref QUOTED: Regex = Regex::new(r#"'([^']+)'|"([^"]+)""#).expect("valid regex");
}

/// A recipe record as handed to the ranking core. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default)]
    pub cook_time: u32,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<String>, instructions: Vec<String>, cook_time: u32) -> Self {
        Self { name: name.into(), ingredients, instructions, cook_time }
    }

    /// Joined ingredient text, the form constraint substring checks run against.
    pub fn ingredient_text(&self) -> String {
        self.ingredients.join(", ")
    }

    /// Text fed to the similarity index: name followed by the ingredients.
    pub fn index_text(&self) -> String {
        format!("{} {}", self.name, self.ingredient_text())
    }
}

/// A list-valued field as it arrives from storage: already a list, or some string encoding of one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    List(Vec<String>),
    Text(String),
}

impl Default for RawField {
    fn default() -> Self { RawField::Text(String::new()) }
}

impl RawField {
    /// Ingredients: bracketed quoted lists are unpacked, anything else is split on commas.
    pub fn into_ingredients(self) -> Vec<String> {
        match self {
            RawField::List(items) => clean(items),
            RawField::Text(text) => {
                let text = text.trim();
                if is_bracketed(text) {
                    if let Some(items) = parse_bracketed(text) {
                        return items;
                    }
                }
                split_commas(text)
            }
        }
    }

    /// Instructions: bracketed quoted lists, then sentence prose (". "), then lines.
    pub fn into_instructions(self) -> Vec<String> {
        match self {
            RawField::List(items) => clean(items),
            RawField::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Vec::new();
                }
                if is_bracketed(text) {
                    return match parse_bracketed(text) {
                        Some(items) => items,
                        None => split_sentences(text),
                    };
                }
                if text.contains(". ") {
                    split_sentences(text)
                } else if text.contains('\n') {
                    clean(text.lines().map(str::to_string).collect())
                } else {
                    vec![text.to_string()]
                }
            }
        }
    }
}

fn is_bracketed(text: &str) -> bool {
    text.starts_with('[') && text.ends_with(']')
}

fn parse_bracketed(text: &str) -> Option<Vec<String>> {
    // JSON first, then python-style single quotes
    if let Ok(items) = serde_json::from_str::<Vec<String>>(text) {
        return Some(clean(items));
    }
    let inner = &text[1..text.len() - 1];
    let items: Vec<String> = QUOTED
        .captures_iter(inner)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().to_string())
        .collect();
    let items = clean(items);
    if items.is_empty() { None } else { Some(items) }
}

fn split_commas(text: &str) -> Vec<String> {
    let text = text.trim_start_matches('[').trim_end_matches(']');
    clean(
        text.split(',')
            .map(|s| s.trim().trim_matches(|c| c == '\'' || c == '"').to_string())
            .collect(),
    )
}

fn split_sentences(text: &str) -> Vec<String> {
    clean(text.replace(". ", ".\n").lines().map(str::to_string).collect())
}

fn clean(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
