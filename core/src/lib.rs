pub mod constraints;
pub mod index;
pub mod interpreter;
pub mod persist;
pub mod ranker;
pub mod recipe;
pub mod sample;
pub mod service;
pub mod tokenizer;

pub use constraints::{ConstraintSet, Difficulty};
pub use index::{DocId, Posting, TermId, TfIdfIndex, Weighting};
pub use interpreter::{Entity, EntityRecognizer, Intent, LexiconRecognizer, NoopRecognizer, ParsedQuery, QueryInterpreter, TimeHint};
pub use ranker::{RankedRecipe, RecipeRanker, DEFAULT_TOP_N};
pub use recipe::{RawField, Recipe};
pub use service::{EngineConfig, RecipeService, SearchOutcome};
