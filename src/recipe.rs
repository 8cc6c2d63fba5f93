//! Recipe transfer objects as exchanged with the recipe API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Recipe identifier as the API reports it.
///
/// The server uses integer ids, but older records carry strings, so both JSON
/// forms are accepted and kept as text. The client only ever puts it in a URL.
/// A missing or `null` id is empty; such a recipe still renders but has no
/// page to link to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for RecipeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawId>::deserialize(deserializer)? {
            None => Self::default(),
            Some(RawId::Int(n)) => Self(n.to_string()),
            Some(RawId::Float(n)) => Self(n.to_string()),
            Some(RawId::Text(s)) => Self(s),
        })
    }
}

/// A recipe as listed by `GET /api/recipes`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: RecipeId,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    /// Image URL; the server substitutes a placeholder when none was given.
    #[serde(default, deserialize_with = "nullable_string")]
    pub image: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub category: String,
    #[serde(default, deserialize_with = "ingredient_list")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub instructions: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub health: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub tips: String,
    #[serde(default)]
    pub owner: Option<String>,
}

/// `null` reads as an empty string.
fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIngredients {
    List(Vec<String>),
    Text(String),
}

/// Ingredients arrive either as a list or as one newline-separated string.
fn ingredient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw: Option<RawIngredients> = Option::deserialize(deserializer)?;
    let items = match raw {
        None => Vec::new(),
        Some(RawIngredients::List(items)) => items,
        Some(RawIngredients::Text(text)) => text.lines().map(str::to_string).collect(),
    };
    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}

/// Text fields posted to `POST /api/recipes`.
///
/// Field order matches the form; `image` is the URL field and is left out of
/// multipart bodies, which carry the uploaded file instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewRecipe {
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub health: String,
    pub tips: String,
}

impl NewRecipe {
    /// Text parts of a multipart body, in the order they are appended.
    pub fn multipart_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("title", &self.title),
            ("category", &self.category),
            ("description", &self.description),
            ("ingredients", &self.ingredients),
            ("instructions", &self.instructions),
            ("health", &self.health),
            ("tips", &self.tips),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_with_numeric_id() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 7, "title": "Dal", "description": "Lentils", "image": "/static/dal.jpg"}"#,
        )
        .unwrap();
        assert_eq!(recipe.id.as_str(), "7");
        assert_eq!(recipe.title, "Dal");
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.owner, None);
    }

    #[test]
    fn test_recipe_with_string_id() {
        let recipe: Recipe = serde_json::from_str(r#"{"id": "pbj", "title": "PB&J"}"#).unwrap();
        assert_eq!(recipe.id, RecipeId::new("pbj"));
        assert_eq!(recipe.description, "");
    }

    #[test]
    fn test_recipe_without_id_has_empty_id() {
        let recipe: Recipe = serde_json::from_str(r#"{"title": "Nameless"}"#).unwrap();
        assert_eq!(recipe.id.as_str(), "");

        let recipe: Recipe = serde_json::from_str(r#"{"id": null, "title": "Null"}"#).unwrap();
        assert_eq!(recipe.id, RecipeId::default());
    }

    #[test]
    fn test_null_text_fields_read_as_empty() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 2, "title": "Odd", "description": null, "image": null, "tips": null}"#,
        )
        .unwrap();
        assert_eq!(recipe.title, "Odd");
        assert_eq!(recipe.description, "");
        assert_eq!(recipe.image, "");
        assert_eq!(recipe.tips, "");
    }

    #[test]
    fn test_ingredients_from_list() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id": 1, "ingredients": ["rice ", "", " salt"]}"#).unwrap();
        assert_eq!(recipe.ingredients, vec!["rice", "salt"]);
    }

    #[test]
    fn test_ingredients_from_text() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id": 1, "ingredients": "2 eggs\n\n1 cup milk\n"}"#).unwrap();
        assert_eq!(recipe.ingredients, vec!["2 eggs", "1 cup milk"]);
    }

    #[test]
    fn test_ingredients_null() {
        let recipe: Recipe = serde_json::from_str(r#"{"id": 1, "ingredients": null}"#).unwrap();
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_new_recipe_json_shape() {
        let recipe = NewRecipe {
            title: "Soup".to_string(),
            category: "Dinner".to_string(),
            description: "Warm".to_string(),
            ..NewRecipe::default()
        };
        let value = serde_json::to_value(&recipe).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 8);
        assert_eq!(object["image"], "");
        assert_eq!(object["title"], "Soup");
    }

    #[test]
    fn test_multipart_fields_skip_image_url() {
        let recipe = NewRecipe {
            image: "http://example.com/a.png".to_string(),
            ..NewRecipe::default()
        };
        let names: Vec<&str> = recipe.multipart_fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec![
                "title",
                "category",
                "description",
                "ingredients",
                "instructions",
                "health",
                "tips"
            ]
        );
    }
}
