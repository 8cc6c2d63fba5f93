//! Interpretation of recipe API responses.
//!
//! Transport lives in the browser crate; it hands over the status flag and
//! the body text, and everything that depends on their content is decided
//! here.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::recipe::{Recipe, RecipeId};
use crate::routes::recipe_page;

pub const SAVE_FAILED: &str = "Failed to save recipe";
pub const FAVORITE_FAILED: &str = "Failed to update favorite";
pub const DELETE_FAILED: &str = "Failed to delete recipe";

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status,
            body: body.into(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Message from a failed response's `{"error": ...}` body.
///
/// An unparsable body, a missing field or an empty message all fall back to
/// `fallback`.
pub fn rejection_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn reject_unless_ok(reply: &Reply, fallback: &str) -> Result<(), ClientError> {
    if reply.ok {
        Ok(())
    } else {
        let message = rejection_message(&reply.body, fallback);
        log::warn!("request failed with status {}: {}", reply.status, message);
        Err(ClientError::Rejected(message))
    }
}

/// Decode the recipe listing.
///
/// The body must be a JSON array. An entry that is not a recipe is skipped
/// with a warning so the rest still render.
pub fn decode_recipes(body: &str) -> Result<Vec<Recipe>, ClientError> {
    let entries: Vec<Value> = serde_json::from_str(body)?;
    let recipes = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<Recipe>(entry) {
            Ok(recipe) => Some(recipe),
            Err(err) => {
                log::warn!("skipping recipe #{}: {}", i, err);
                None
            }
        })
        .collect();
    Ok(recipes)
}

/// What the page does after a successful add-recipe request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Go to the new recipe's page.
    Redirect(String),
    /// No id came back; acknowledge with a message instead.
    Acknowledge(&'static str),
}

/// Id from a created-recipe body, if it has a usable one.
///
/// Zero, empty strings and non-scalar values do not count.
fn created_id(created: &Value) -> Option<RecipeId> {
    match created.get("id")? {
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(RecipeId::new(n.to_string())),
        Value::String(s) if !s.is_empty() => Some(RecipeId::new(s.clone())),
        _ => None,
    }
}

/// Interpret the reply to `POST /api/recipes`.
pub fn interpret_created(reply: &Reply) -> Result<SubmitOutcome, ClientError> {
    reject_unless_ok(reply, SAVE_FAILED)?;
    let created: Value = serde_json::from_str(&reply.body)?;
    Ok(match created_id(&created) {
        Some(id) => SubmitOutcome::Redirect(recipe_page(&id)),
        None => SubmitOutcome::Acknowledge(crate::add_recipe::ADDED_MESSAGE),
    })
}

#[derive(Deserialize)]
struct FavoriteBody {
    favorited: bool,
}

/// Interpret the reply to `POST /api/recipes/<id>/favorite`; returns the new
/// favorited state.
pub fn interpret_favorite(reply: &Reply) -> Result<bool, ClientError> {
    reject_unless_ok(reply, FAVORITE_FAILED)?;
    let body: FavoriteBody = serde_json::from_str(&reply.body)?;
    Ok(body.favorited)
}

/// Interpret the reply to `DELETE /api/recipes/<id>`.
pub fn interpret_deleted(reply: &Reply) -> Result<(), ClientError> {
    reject_unless_ok(reply, DELETE_FAILED)
}
