use recipe_core::persist::{load_or_sample, load_recipes, save_csv, save_recipes, write_sample};
use recipe_core::Recipe;
use recipe_core::sample::sample_recipes;
use std::fs;
use tempfile::tempdir;

#[test]
fn sample_survives_a_csv_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data/recipes.csv");
    write_sample(&path).unwrap();
    assert_eq!(load_recipes(&path).unwrap(), sample_recipes());
}

#[test]
fn csv_with_encoded_lists_and_bad_times() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.csv");
    fs::write(
        &path,
        "recipe_name,ingredients,instructions,cook_time\n\
         Toast,\"['bread', 'butter']\",\"Toast bread.\nSpread butter.\",5.0\n\
         Tea,\"water, tea leaves\",Steep,\n\
         Soup,broth,\"['Heat', 'Serve']\",later\n",
    )
    .unwrap();
    let recipes = load_recipes(&path).unwrap();
    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[0].ingredients, vec!["bread", "butter"]);
    assert_eq!(recipes[0].instructions, vec!["Toast bread.", "Spread butter."]);
    assert_eq!(recipes[0].cook_time, 5);
    assert_eq!(recipes[1].ingredients, vec!["water", "tea leaves"]);
    assert_eq!(recipes[1].cook_time, 0);
    assert_eq!(recipes[2].instructions, vec!["Heat", "Serve"]);
    assert_eq!(recipes[2].cook_time, 0);
}

#[test]
fn json_and_jsonl_sources() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("recipes.json");
    fs::write(
        &json,
        r#"[{"recipe_name": "Toast", "ingredients": ["bread", "butter"], "instructions": "Toast. Butter.", "cook_time": 5},
            {"name": "Tea", "ingredients": "water, tea"}]"#,
    )
    .unwrap();
    let recipes = load_recipes(&json).unwrap();
    assert_eq!(recipes[0].instructions, vec!["Toast.", "Butter."]);
    assert_eq!(recipes[1].name, "Tea");
    assert_eq!(recipes[1].cook_time, 0);

    let jsonl = dir.path().join("recipes.jsonl");
    fs::write(&jsonl, "{\"recipe_name\": \"A\", \"cook_time\": \"12\"}\n\nnot json\n{\"recipe_name\": \"B\"}\n").unwrap();
    let recipes = load_recipes(&jsonl).unwrap();
    let names: Vec<_> = recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(recipes[0].cook_time, 12);
}

#[test]
fn missing_source_materializes_sample() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested/recipes.csv");
    let recipes = load_or_sample(&path);
    assert_eq!(recipes, sample_recipes());
    assert!(path.exists());
    assert_eq!(load_recipes(&path).unwrap().len(), 20);
}

#[test]
fn unusable_source_is_not_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("recipes.csv");
    fs::write(&path, "title,body\nx,y\n").unwrap();
    assert_eq!(load_or_sample(&path).len(), 20);
    assert_eq!(fs::read_to_string(&path).unwrap(), "title,body\nx,y\n");
}

#[test]
fn save_then_load_custom_recipes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mine.csv");
    let mut recipes = sample_recipes();
    recipes.truncate(2);
    save_csv(&path, &recipes).unwrap();
    assert_eq!(load_recipes(&path).unwrap(), recipes);
}

#[test]
fn csv_keeps_commas_inside_items_and_step_boundaries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.csv");
    let recipes = vec![Recipe::new(
        "Broth",
        vec!["salt, to taste".into(), "water".into()],
        vec!["Heat".into(), "Serve".into()],
        10,
    )];
    save_csv(&path, &recipes).unwrap();
    let back = load_recipes(&path).unwrap();
    assert_eq!(back, recipes);
    assert_eq!(back[0].ingredients, vec!["salt, to taste", "water"]);
    assert_eq!(back[0].instructions, vec!["Heat", "Serve"]);
}

#[test]
fn saving_follows_the_extension() {
    let dir = tempdir().unwrap();
    let recipes = vec![
        Recipe::new("Broth", vec!["salt, to taste".into()], vec!["Heat".into(), "Serve".into()], 10),
        Recipe::new("Ice", vec![], vec![], 0),
    ];
    for name in ["r.json", "r.jsonl", "r.csv"] {
        let path = dir.path().join(name);
        save_recipes(&path, &recipes).unwrap();
        assert_eq!(load_recipes(&path).unwrap(), recipes, "{name}");
    }
}

#[test]
fn missing_json_source_gets_a_readable_sample() {
    let dir = tempdir().unwrap();
    for name in ["recipes.json", "recipes.jsonl"] {
        let path = dir.path().join(name);
        assert_eq!(load_or_sample(&path), sample_recipes());
        assert!(!fs::read_to_string(&path).unwrap().starts_with("recipe_name,"));
        assert_eq!(load_recipes(&path).unwrap(), sample_recipes(), "{name}");
    }
}
