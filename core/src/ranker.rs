use crate::constraints::ConstraintSet;
use crate::index::{TfIdfIndex, Weighting};
use crate::recipe::Recipe;
use crate::tokenizer::TokenizerOptions;
use serde::Serialize;

pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub match_score: f32,
}

/// Fixed corpus plus its similarity index. Index position `i` is corpus record `i`.
pub struct RecipeRanker {
    recipes: Vec<Recipe>,
    ingredients_lower: Vec<String>,
    index: TfIdfIndex,
}

impl RecipeRanker {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self::with_options(recipes, Weighting::default(), TokenizerOptions::default())
    }

    pub fn with_options(recipes: Vec<Recipe>, weighting: Weighting, tokenizer: TokenizerOptions) -> Self {
        let texts: Vec<String> = recipes.iter().map(Recipe::index_text).collect();
        let index = TfIdfIndex::build(texts.as_slice(), weighting, tokenizer);
        let ingredients_lower = recipes.iter().map(|r| r.ingredient_text().to_lowercase()).collect();
        tracing::info!(recipes = recipes.len(), terms = index.vocabulary_size(), "recipe index ready");
        Self { recipes, ingredients_lower, index }
    }

    pub fn recipes(&self) -> &[Recipe] { &self.recipes }

    pub fn len(&self) -> usize { self.recipes.len() }

    pub fn is_empty(&self) -> bool { self.recipes.is_empty() }

    /// Corpus positions satisfying every constraint, in corpus order.
    pub fn filter(&self, constraints: &ConstraintSet) -> Vec<usize> {
        (0..self.recipes.len())
            .filter(|&i| constraints.matches_text(&self.ingredients_lower[i], self.recipes[i].cook_time))
            .collect()
    }

    /// Top `top_n` recipes by cosine similarity among those passing `constraints`.
    /// When nothing passes, the whole corpus is ranked instead.
    pub fn search(&self, query: &str, constraints: &ConstraintSet, top_n: usize) -> Vec<RankedRecipe> {
        let scores = self.index.scores(query);

        let mut candidates = self.filter(constraints);
        if candidates.is_empty() && !self.recipes.is_empty() {
            tracing::warn!(?constraints, "no recipe satisfies the constraints, ranking the whole corpus");
            candidates = (0..self.recipes.len()).collect();
        }

        let mut scored: Vec<(usize, f32)> = candidates.into_iter().map(|i| (i, scores[i])).collect();
        // stable: equal scores keep corpus order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        tracing::debug!(query, candidates = scored.len(), top_n, "ranked recipes");

        scored
            .into_iter()
            .take(top_n)
            .map(|(i, score)| RankedRecipe { recipe: self.recipes[i].clone(), match_score: score.clamp(0.0, 1.0) })
            .collect()
    }
}
