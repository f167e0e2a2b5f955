use recipe_core::sample::sample_recipes;
use recipe_core::{ConstraintSet, RecipeRanker};

fn names(out: &[recipe_core::RankedRecipe]) -> Vec<&str> {
    out.iter().map(|r| r.recipe.name.as_str()).collect()
}

#[test]
fn search_is_deterministic() {
    let ranker = RecipeRanker::new(sample_recipes());
    let c = ConstraintSet { max_time: Some(40), ..Default::default() };
    let first = ranker.search("garlic chicken soup", &c, 5);
    for _ in 0..5 {
        assert_eq!(ranker.search("garlic chicken soup", &c, 5), first);
    }
}

#[test]
fn long_queries_score_bit_identically() {
    let query = "vegetable broth carrots celery onions potatoes tomatoes peas garlic herbs";
    let bits = |ranker: &RecipeRanker| {
        ranker
            .search(query, &ConstraintSet::default(), 20)
            .iter()
            .map(|r| (r.recipe.name.clone(), r.match_score.to_bits()))
            .collect::<Vec<_>>()
    };
    let ranker = RecipeRanker::new(sample_recipes());
    let expected = bits(&ranker);
    for _ in 0..200 {
        assert_eq!(bits(&ranker), expected);
    }
    for _ in 0..20 {
        assert_eq!(bits(&RecipeRanker::new(sample_recipes())), expected);
    }
}

#[test]
fn exclusions_hold_in_results() {
    let ranker = RecipeRanker::new(sample_recipes());
    let mut c = ConstraintSet::default();
    c.exclude("Cheese");
    let out = ranker.search("pasta with cheese", &c, 20);
    assert!(!out.is_empty());
    for r in &out {
        assert!(!r.recipe.ingredient_text().to_lowercase().contains("cheese"), "{}", r.recipe.name);
    }
}

#[test]
fn unsatisfiable_constraints_fall_back_to_corpus() {
    let ranker = RecipeRanker::new(sample_recipes());
    let mut c = ConstraintSet::default();
    c.include("dragonfruit");
    let out = ranker.search("beef", &c, 3);
    assert_eq!(out.len(), 3);
    assert!(names(&out).contains(&"Beef Stew"));
    assert!(names(&out).contains(&"Beef Tacos"));
}

#[test]
fn results_sorted_descending_with_stable_ties() {
    let ranker = RecipeRanker::new(sample_recipes());
    let out = ranker.search("tomato soup", &ConstraintSet::default(), 20);
    assert_eq!(out.len(), 20);
    for pair in out.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    // zero-score tail keeps corpus order
    let corpus: Vec<String> = sample_recipes().into_iter().map(|r| r.name).collect();
    let tail: Vec<usize> = out
        .iter()
        .filter(|r| r.match_score == 0.0)
        .map(|r| corpus.iter().position(|n| *n == r.recipe.name).unwrap())
        .collect();
    assert!(!tail.is_empty());
    assert!(tail.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn scores_stay_within_unit_interval() {
    let ranker = RecipeRanker::new(sample_recipes());
    for r in ranker.search("Mushroom Risotto arborio rice mushrooms", &ConstraintSet::default(), 20) {
        assert!((0.0..=1.0).contains(&r.match_score), "{} {}", r.recipe.name, r.match_score);
    }
}

#[test]
fn out_of_vocabulary_query_scores_zero() {
    let ranker = RecipeRanker::new(sample_recipes());
    let out = ranker.search("xylophone", &ConstraintSet::default(), 3);
    assert_eq!(names(&out), vec!["Spaghetti Carbonara", "Vegetable Stir Fry", "Chocolate Chip Cookies"]);
    assert!(out.iter().all(|r| r.match_score == 0.0));
}
