//! Pattern-based query understanding.
//!
//! Raw text is lower-cased and run through four ordered pattern tables. Within
//! the dish and time tables the first matching pattern wins; every matching
//! exclude/include pattern contributes an entity. The tables are evaluated in
//! the order they are declared here.

use crate::constraints::{ConstraintSet, Difficulty};
use crate::recipe::Recipe;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::Serialize;

type HintFn = fn(&str) -> Option<TimeHint>;

/// `max_time` implied by "quick" or "fast".
pub const QUICK_MAX_MINUTES: u32 = 30;

lazy_static! {
    static ref DISH_PATTERNS: Vec<Regex> = compile(&[
        r"recipe for ([\w\s]+)",
        r"how (to|do i) (make|cook) ([\w\s]+)",
        r"show me ([\w\s]+) recipes",
        r"i want to (make|cook|prepare) ([\w\s]+)",
    ]);
    static ref TIME_PATTERNS: Vec<(Regex, HintFn)> = vec![
        (pattern(r"(quick|fast|easy|simple)"), keyword_hint as HintFn),
        (pattern(r"(\d+) minutes?"), minutes_hint as HintFn),
        (pattern(r"under (\d+) minutes?"), minutes_hint as HintFn),
    ];
    static ref EXCLUDE_PATTERNS: Vec<Regex> = compile(&[
        r"no ([\w\s]+)",
        r"without ([\w\s]+)",
        r"don'?t (have|want|like) ([\w\s]+)",
    ]);
    static ref INCLUDE_PATTERNS: Vec<Regex> = compile(&[
        r"with ([\w\s]+)",
        r"using ([\w\s]+)",
        r"has ([\w\s]+)",
    ]);
}

fn pattern(src: &str) -> Regex {
    Regex::new(&format!("(?i){src}")).expect("valid regex")
}

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources.iter().map(|s| pattern(s)).collect()
}

fn last_group(caps: &Captures<'_>) -> Option<String> {
    caps.get(caps.len() - 1).map(|m| m.as_str().trim().to_string())
}

fn keyword_hint(word: &str) -> Option<TimeHint> {
    match word {
        "quick" | "fast" => Some(TimeHint::Quick),
        "easy" | "simple" => Some(TimeHint::Easy),
        _ => None,
    }
}

fn minutes_hint(digits: &str) -> Option<TimeHint> {
    digits.parse().ok().map(TimeHint::Minutes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    RequestRecipe,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeHint {
    Minutes(u32),
    Quick,
    Easy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "entity", content = "value", rename_all = "snake_case")]
pub enum Entity {
    Dish(String),
    Time(TimeHint),
    IncludeIngredient(String),
    ExcludeIngredient(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    pub intent: Intent,
    pub entities: Vec<Entity>,
    /// Lower-cased input; empty when the input was blank.
    pub text: String,
}

impl ParsedQuery {
    pub fn dish(&self) -> Option<&str> {
        self.entities.iter().find_map(|e| match e {
            Entity::Dish(d) => Some(d.as_str()),
            _ => None,
        })
    }

    /// Search string plus the constraint set folded from the entities.
    pub fn to_query(&self) -> (String, ConstraintSet) {
        let mut query = self.text.clone();
        let mut constraints = ConstraintSet::default();
        for entity in &self.entities {
            match entity {
                Entity::Dish(dish) => query = dish.clone(),
                Entity::Time(TimeHint::Minutes(n)) => constraints.max_time = Some(*n),
                Entity::Time(TimeHint::Quick) => constraints.max_time = Some(QUICK_MAX_MINUTES),
                Entity::Time(TimeHint::Easy) => constraints.difficulty = Some(Difficulty::Easy),
                Entity::ExcludeIngredient(i) => constraints.exclude(i.clone()),
                Entity::IncludeIngredient(i) => constraints.include(i.clone()),
            }
        }
        (query, constraints)
    }
}

/// Optional named-entity step: returns food mentions found in lower-cased text.
pub trait EntityRecognizer: Send + Sync {
    fn food_entities(&self, text: &str) -> Vec<String>;
}

/// Recognizer for deployments without an entity model.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecognizer;

impl EntityRecognizer for NoopRecognizer {
    fn food_entities(&self, _text: &str) -> Vec<String> { Vec::new() }
}

/// Whole-word gazetteer over known ingredient names.
pub struct LexiconRecognizer {
    terms: Vec<(String, Regex)>,
}

impl LexiconRecognizer {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if term.is_empty() || !seen.insert(term.clone()) { continue; }
            if let Ok(re) = Regex::new(&format!(r"\b{}\b", regex::escape(&term))) {
                out.push((term, re));
            }
        }
        Self { terms: out }
    }

    /// Lexicon of every ingredient string in the corpus.
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        Self::new(recipes.iter().flat_map(|r| r.ingredients.iter()))
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}

impl EntityRecognizer for LexiconRecognizer {
    fn food_entities(&self, text: &str) -> Vec<String> {
        let mut hits: Vec<(usize, &str)> = self
            .terms
            .iter()
            .filter_map(|(term, re)| re.find(text).map(|m| (m.start(), term.as_str())))
            .collect();
        hits.sort_by_key(|(pos, _)| *pos);
        hits.into_iter().map(|(_, t)| t.to_string()).collect()
    }
}

pub struct QueryInterpreter {
    recognizer: Box<dyn EntityRecognizer>,
}

impl Default for QueryInterpreter {
    fn default() -> Self { Self::new() }
}

impl QueryInterpreter {
    pub fn new() -> Self {
        Self { recognizer: Box::new(NoopRecognizer) }
    }

    pub fn with_recognizer(recognizer: Box<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    pub fn parse(&self, text: &str) -> ParsedQuery {
        let mut text = text.to_lowercase();
        if text.trim().is_empty() {
            text.clear();
        }

        let mut intent = Intent::Unknown;
        let mut entities = Vec::new();

        for re in DISH_PATTERNS.iter() {
            if let Some(caps) = re.captures(&text) {
                intent = Intent::RequestRecipe;
                if let Some(dish) = last_group(&caps) {
                    entities.push(Entity::Dish(dish));
                }
                break;
            }
        }

        for (re, hint) in TIME_PATTERNS.iter() {
            if let Some(caps) = re.captures(&text) {
                if let Some(h) = caps.get(1).and_then(|m| hint(&m.as_str().to_lowercase())) {
                    entities.push(Entity::Time(h));
                    break;
                }
            }
        }

        for re in EXCLUDE_PATTERNS.iter() {
            if let Some(ingredient) = re.captures(&text).and_then(|c| last_group(&c)) {
                entities.push(Entity::ExcludeIngredient(ingredient));
            }
        }

        for re in INCLUDE_PATTERNS.iter() {
            if let Some(ingredient) = re.captures(&text).and_then(|c| last_group(&c)) {
                entities.push(Entity::IncludeIngredient(ingredient));
            }
        }

        for food in self.recognizer.food_entities(&text) {
            let known = entities
                .iter()
                .any(|e| matches!(e, Entity::IncludeIngredient(i) if *i == food));
            if !known {
                entities.push(Entity::IncludeIngredient(food));
            }
        }

        tracing::debug!(?intent, entities = entities.len(), "parsed query");
        ParsedQuery { intent, entities, text }
    }

    /// Raw text to (search string, constraints).
    pub fn interpret(&self, text: &str) -> (String, ConstraintSet) {
        self.parse(text).to_query()
    }
}
