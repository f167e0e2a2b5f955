use crate::constraints::ConstraintSet;
use crate::index::Weighting;
use crate::interpreter::{EntityRecognizer, Intent, LexiconRecognizer, ParsedQuery, QueryInterpreter};
use crate::ranker::{RankedRecipe, RecipeRanker, DEFAULT_TOP_N};
use crate::recipe::Recipe;
use crate::tokenizer::TokenizerOptions;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub top_n: usize,
    pub weighting: Weighting,
    pub tokenizer: TokenizerOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N, weighting: Weighting::default(), tokenizer: TokenizerOptions::default() }
    }
}

/// Everything learned while answering one query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub intent: Intent,
    pub search_query: String,
    pub constraints: ConstraintSet,
    pub recipes: Vec<RankedRecipe>,
    #[serde(skip)]
    pub parsed: ParsedQuery,
}

/// Interpreter and ranker over one immutable corpus. Share it by reference or `Arc`.
pub struct RecipeService {
    interpreter: QueryInterpreter,
    ranker: RecipeRanker,
    top_n: usize,
}

impl RecipeService {
    pub fn new(recipes: Vec<Recipe>, config: EngineConfig) -> Self {
        Self {
            interpreter: QueryInterpreter::new(),
            ranker: RecipeRanker::with_options(recipes, config.weighting, config.tokenizer),
            top_n: config.top_n,
        }
    }

    pub fn with_recognizer(mut self, recognizer: Box<dyn EntityRecognizer>) -> Self {
        self.interpreter = QueryInterpreter::with_recognizer(recognizer);
        self
    }

    /// Recognize any ingredient already present in the corpus as a required ingredient.
    pub fn with_corpus_lexicon(self) -> Self {
        let lexicon = LexiconRecognizer::from_recipes(self.ranker.recipes());
        tracing::info!(terms = lexicon.len(), "ingredient lexicon enabled");
        self.with_recognizer(Box::new(lexicon))
    }

    pub fn interpreter(&self) -> &QueryInterpreter { &self.interpreter }

    pub fn ranker(&self) -> &RecipeRanker { &self.ranker }

    pub fn top_n(&self) -> usize { self.top_n }

    pub fn answer(&self, text: &str) -> SearchOutcome {
        self.answer_top(text, self.top_n)
    }

    pub fn answer_top(&self, text: &str, top_n: usize) -> SearchOutcome {
        let parsed = self.interpreter.parse(text);
        let (search_query, constraints) = parsed.to_query();
        let recipes = self.ranker.search(&search_query, &constraints, top_n);
        tracing::debug!(search_query = %search_query, hits = recipes.len(), "answered query");
        SearchOutcome { intent: parsed.intent, search_query, constraints, recipes, parsed }
    }
}
