//! Text rendering for terminal output.

use recipe_core::{Intent, RankedRecipe, SearchOutcome};
use std::fmt::Write;

const RULE_WIDTH: usize = 50;

/// Boxed block for one recipe: name, score, cook time, numbered ingredients and steps.
pub fn format_recipe(hit: &RankedRecipe) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let recipe = &hit.recipe;
    let mut out = String::new();
    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "{}", recipe.name.to_uppercase());
    let _ = writeln!(out, "{rule}\n");
    let _ = writeln!(out, "Match Score: {:.2}", hit.match_score);
    if recipe.cook_time > 0 {
        let _ = writeln!(out, "Cook Time: {} minutes", recipe.cook_time);
    }

    let _ = writeln!(out, "\nINGREDIENTS:");
    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, ingredient);
    }

    let _ = writeln!(out, "\nINSTRUCTIONS:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }
    out
}

/// What the interpreter understood, one line per fact.
pub fn describe_request(outcome: &SearchOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    if outcome.intent == Intent::RequestRecipe {
        lines.push(format!("Looking for recipes related to: {}", outcome.search_query));
    }
    let c = &outcome.constraints;
    if !c.include_ingredients.is_empty() {
        lines.push(format!("Must include: {}", c.include_ingredients.join(", ")));
    }
    if !c.exclude_ingredients.is_empty() {
        lines.push(format!("Must exclude: {}", c.exclude_ingredients.join(", ")));
    }
    if let Some(max) = c.max_time {
        lines.push(format!("Maximum cooking time: {max} minutes"));
    }
    lines
}

/// Full answer as printed by the `ask` command and the REPL.
pub fn render_outcome(outcome: &SearchOutcome) -> String {
    let mut out = String::new();
    for line in describe_request(outcome) {
        let _ = writeln!(out, "{line}");
    }
    if outcome.recipes.is_empty() {
        let _ = writeln!(
            out,
            "\nI couldn't find any recipes matching your criteria. Could you try with different ingredients or preferences?"
        );
        return out;
    }
    let _ = writeln!(out, "\nI found {} recipes that match your request:", outcome.recipes.len());
    for hit in &outcome.recipes {
        out.push_str(&format_recipe(hit));
    }
    out
}

pub fn is_exit_command(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "exit" | "quit" | "bye")
}
