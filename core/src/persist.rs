use crate::recipe::{RawField, Recipe};
use crate::sample::sample_recipes;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Tabular row: `recipe_name, ingredients, instructions, cook_time`.
#[derive(Debug, Deserialize, Serialize)]
struct CsvRow {
    recipe_name: String,
    #[serde(default)]
    ingredients: String,
    #[serde(default)]
    instructions: String,
    #[serde(default)]
    cook_time: Option<String>,
}

/// JSON row; list fields may be real arrays or encoded strings.
#[derive(Debug, Deserialize)]
struct JsonRow {
    #[serde(alias = "name")]
    recipe_name: String,
    #[serde(default)]
    ingredients: RawField,
    #[serde(default)]
    instructions: RawField,
    #[serde(default)]
    cook_time: Option<serde_json::Value>,
}

impl From<CsvRow> for Recipe {
    fn from(row: CsvRow) -> Self {
        Recipe {
            name: row.recipe_name,
            ingredients: RawField::Text(row.ingredients).into_ingredients(),
            instructions: RawField::Text(row.instructions).into_instructions(),
            cook_time: row.cook_time.as_deref().map(parse_minutes).unwrap_or(0),
        }
    }
}

impl From<JsonRow> for Recipe {
    fn from(row: JsonRow) -> Self {
        let cook_time = match row.cook_time {
            Some(serde_json::Value::Number(n)) => n.as_f64().map(minutes_from_f64).unwrap_or(0),
            Some(serde_json::Value::String(s)) => parse_minutes(&s),
            _ => 0,
        };
        Recipe {
            name: row.recipe_name,
            ingredients: row.ingredients.into_ingredients(),
            instructions: row.instructions.into_instructions(),
            cook_time,
        }
    }
}

/// Lenient minutes: "20", "20.0" and " 20 " all work; anything else is 0.
fn parse_minutes(raw: &str) -> u32 {
    raw.trim().parse::<f64>().map(minutes_from_f64).unwrap_or(0)
}

fn minutes_from_f64(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 { v.min(u32::MAX as f64) as u32 } else { 0 }
}

/// Load recipes from a `.csv`, `.json` (array or single object) or `.jsonl` file.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let path = path.as_ref();
    let recipes = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => load_json(path)?,
        Some("jsonl") => load_jsonl(path)?,
        _ => load_csv(path)?,
    };
    if recipes.is_empty() {
        bail!("no recipes in {}", path.display());
    }
    tracing::info!(path = %path.display(), recipes = recipes.len(), "loaded recipes");
    Ok(recipes)
}

fn load_csv(path: &Path) -> Result<Vec<Recipe>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers = rdr.headers()?.clone();
    if !headers.iter().any(|h| h == "recipe_name") {
        bail!("{} has no recipe_name column", path.display());
    }
    let mut out = Vec::new();
    for (line, row) in rdr.deserialize::<CsvRow>().enumerate() {
        match row {
            Ok(row) => out.push(Recipe::from(row)),
            Err(e) => tracing::warn!(row = line + 1, error = %e, "skipping malformed recipe row"),
        }
    }
    Ok(out)
}

fn load_json(path: &Path) -> Result<Vec<Recipe>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(f))?;
    let values = match json {
        serde_json::Value::Array(arr) => arr,
        obj @ serde_json::Value::Object(_) => vec![obj],
        _ => bail!("{} is neither an array nor an object", path.display()),
    };
    let mut out = Vec::new();
    for v in values {
        match serde_json::from_value::<JsonRow>(v) {
            Ok(row) => out.push(Recipe::from(row)),
            Err(e) => tracing::warn!(error = %e, "skipping malformed recipe"),
        }
    }
    Ok(out)
}

fn load_jsonl(path: &Path) -> Result<Vec<Recipe>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (n, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        match serde_json::from_str::<JsonRow>(&line) {
            Ok(row) => out.push(Recipe::from(row)),
            Err(e) => tracing::warn!(line = n + 1, error = %e, "skipping malformed recipe"),
        }
    }
    Ok(out)
}

/// Write recipes as CSV. List fields are stored as JSON arrays so items keep
/// their commas and step boundaries.
pub fn save_csv<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let mut wtr = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for r in recipes {
        wtr.serialize(CsvRow {
            recipe_name: r.name.clone(),
            ingredients: serde_json::to_string(&r.ingredients)?,
            instructions: serde_json::to_string(&r.instructions)?,
            cook_time: Some(r.cook_time.to_string()),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write recipes in the format implied by the extension: `.json`, `.jsonl`, otherwise CSV.
pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => {
            ensure_parent(path)?;
            let f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, recipes)?;
            w.flush()?;
        }
        Some("jsonl") => {
            ensure_parent(path)?;
            let f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut w = BufWriter::new(f);
            for r in recipes {
                serde_json::to_writer(&mut w, r)?;
                w.write_all(b"\n")?;
            }
            w.flush()?;
        }
        _ => save_csv(path, recipes)?,
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir)?;
    }
    Ok(())
}

pub fn write_sample<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let recipes = sample_recipes();
    save_recipes(&path, &recipes)?;
    Ok(recipes)
}

/// Load the corpus, or fall back to the built-in sample when the source is unusable.
/// The sample is also written to `path` when possible so later runs read it back.
pub fn load_or_sample<P: AsRef<Path>>(path: P) -> Vec<Recipe> {
    let path = path.as_ref();
    match load_recipes(path) {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not load recipes, using sample dataset");
            if !path.exists() {
                if let Err(e) = save_recipes(path, &sample_recipes()) {
                    tracing::warn!(error = %e, "could not write sample dataset");
                }
            }
            sample_recipes()
        }
    }
}
