use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty label. No recipe field encodes difficulty, so it never filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
        }
    }
}

/// Hard filters derived from a query. Empty lists and `None` mean "no constraint of that kind".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl ConstraintSet {
    pub fn is_empty(&self) -> bool {
        self.include_ingredients.is_empty()
            && self.exclude_ingredients.is_empty()
            && self.max_time.is_none()
            && self.difficulty.is_none()
    }

    pub fn include(&mut self, ingredient: impl Into<String>) {
        push_unique(&mut self.include_ingredients, ingredient.into());
    }

    pub fn exclude(&mut self, ingredient: impl Into<String>) {
        push_unique(&mut self.exclude_ingredients, ingredient.into());
    }

    /// True iff the recipe satisfies every present constraint.
    ///
    /// Ingredient checks are case-insensitive substring tests against the joined
    /// ingredient text, so "egg" also hits "eggplant" and a term may span two
    /// neighbouring ingredients.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_text(&recipe.ingredient_text().to_lowercase(), recipe.cook_time)
    }

    /// Same as [`matches`](Self::matches) over precomputed lower-cased ingredient text.
    pub fn matches_text(&self, ingredients_lower: &str, cook_time: u32) -> bool {
        if self
            .exclude_ingredients
            .iter()
            .any(|i| ingredients_lower.contains(&i.to_lowercase()))
        {
            return false;
        }
        if !self
            .include_ingredients
            .iter()
            .all(|i| ingredients_lower.contains(&i.to_lowercase()))
        {
            return false;
        }
        match self.max_time {
            Some(limit) => cook_time <= limit,
            None => true,
        }
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(ingredients: &[&str], cook_time: u32) -> Recipe {
        Recipe::new("r", ingredients.iter().map(|s| s.to_string()).collect(), vec![], cook_time)
    }

    #[test]
    fn empty_set_matches_everything() {
        assert!(ConstraintSet::default().matches(&recipe(&[], 500)));
    }

    #[test]
    fn exclusion_is_substring_based() {
        let mut c = ConstraintSet::default();
        c.exclude("Egg");
        assert!(!c.matches(&recipe(&["eggplant", "basil"], 10)));
        assert!(c.matches(&recipe(&["basil"], 10)));
    }

    #[test]
    fn inclusion_needs_every_term() {
        let mut c = ConstraintSet::default();
        c.include("garlic");
        c.include("butter");
        assert!(c.matches(&recipe(&["garlic", "butter"], 0)));
        assert!(!c.matches(&recipe(&["garlic"], 0)));
    }

    #[test]
    fn inclusion_can_span_joined_ingredients() {
        let mut c = ConstraintSet::default();
        c.include("salt, pepper");
        assert!(c.matches(&recipe(&["salt", "pepper"], 0)));
    }

    #[test]
    fn max_time_is_inclusive() {
        let c = ConstraintSet { max_time: Some(30), ..Default::default() };
        assert!(c.matches(&recipe(&[], 30)));
        assert!(!c.matches(&recipe(&[], 31)));
    }

    #[test]
    fn difficulty_does_not_filter() {
        let c = ConstraintSet { difficulty: Some(Difficulty::Easy), ..Default::default() };
        assert!(c.matches(&recipe(&["anything"], 240)));
        assert!(!c.is_empty());
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut c = ConstraintSet::default();
        c.include("rice");
        c.include("rice");
        assert_eq!(c.include_ingredients, vec!["rice"]);
    }
}
