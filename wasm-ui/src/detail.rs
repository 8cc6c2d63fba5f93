//! Favorite and delete buttons on a recipe's page.

use gloo::dialogs::{alert, confirm};
use tastetales::api::{interpret_deleted, interpret_favorite};
use tastetales::detail::{DELETE_PROMPT, favorite_label};
use tastetales::markup::{DELETE_RECIPE_BUTTON, FAVORITED_CLASS, FAVORITE_BUTTON};
use tastetales::routes::home_page;
use tastetales::{Endpoints, RecipeId};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::{dom, http};

fn recipe_id(button: &Element) -> Option<RecipeId> {
    button
        .get_attribute("data-id")
        .filter(|id| !id.is_empty())
        .map(RecipeId::new)
}

fn show_favorite(button: &Element, favorited: bool) {
    button.set_text_content(Some(favorite_label(favorited)));
    if let Err(err) = button
        .class_list()
        .toggle_with_force(FAVORITED_CLASS, favorited)
    {
        log::warn!("could not mark favorite: {}", dom::js_message(&err));
    }
}

pub fn bind_favorite(endpoints: &Endpoints) -> Option<()> {
    let button: Element = dom::by_id(FAVORITE_BUTTON)?;
    let endpoints = endpoints.clone();
    let target = button.clone();

    dom::listen(&button, "click", move |event| {
        event.prevent_default();
        let Some(id) = recipe_id(&target) else {
            log::warn!("#{} has no data-id", FAVORITE_BUTTON);
            return;
        };
        let url = endpoints.favorite(&id);
        let button = target.clone();
        spawn_local(async move {
            match http::post(&url).await.and_then(|reply| interpret_favorite(&reply)) {
                Ok(favorited) => show_favorite(&button, favorited),
                Err(err) => {
                    log::error!("Error updating favorite: {}", err);
                    alert(&err.to_string());
                }
            }
        });
    });
    Some(())
}

pub fn bind_delete(endpoints: &Endpoints) -> Option<()> {
    let button: Element = dom::by_id(DELETE_RECIPE_BUTTON)?;
    let endpoints = endpoints.clone();
    let target = button.clone();

    dom::listen(&button, "click", move |event| {
        event.prevent_default();
        let Some(id) = recipe_id(&target) else {
            log::warn!("#{} has no data-id", DELETE_RECIPE_BUTTON);
            return;
        };
        if !confirm(DELETE_PROMPT) {
            return;
        }
        let url = endpoints.recipe(&id);
        spawn_local(async move {
            match http::delete(&url).await.and_then(|reply| interpret_deleted(&reply)) {
                Ok(()) => dom::navigate(home_page()),
                Err(err) => {
                    log::error!("Error deleting recipe: {}", err);
                    alert(&err.to_string());
                }
            }
        });
    });
    Some(())
}
