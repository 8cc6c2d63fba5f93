//! Browser bindings for the TasteTales recipe site.
//!
//! Attaches handlers to the server-rendered page: smooth in-page scrolling,
//! the recipe grid, search, newsletter sign-up, the add-recipe panel and the
//! recipe page's favorite and delete buttons.

pub mod add_recipe;
pub mod components;
pub mod detail;
pub mod dom;
pub mod http;
pub mod loader;
pub mod nav;
pub mod newsletter;
pub mod search;

use gloo::utils::document;
use tastetales::{ClientConfig, Component, ConfigError, RecipeQuery};
use wasm_bindgen::prelude::*;

fn page_config() -> (ClientConfig, Vec<ConfigError>) {
    match document().body() {
        Some(body) => {
            let dataset = body.dataset();
            ClientConfig::from_dataset(|key| dataset.get(key))
        }
        None => (ClientConfig::default(), Vec::new()),
    }
}

fn bind(component: Component, config: &ClientConfig) -> Option<()> {
    let endpoints = config.endpoints();
    match component {
        Component::RecipeGrid => loader::bind(&endpoints),
        Component::Search => search::bind(config.search_debounce_ms),
        Component::Newsletter => newsletter::bind(),
        Component::AddRecipeToggle => add_recipe::bind_toggle(),
        Component::AddRecipeCancel => add_recipe::bind_cancel(),
        Component::AddRecipeSubmit => add_recipe::bind_submit(&endpoints),
        Component::Favorite => detail::bind_favorite(&endpoints),
        Component::DeleteRecipe => detail::bind_delete(&endpoints),
    }
}

/// Bind every component whose markup is on the page. Returns the names of
/// those bound.
pub fn bind_page(config: &ClientConfig) -> Vec<&'static str> {
    let anchors = nav::bind();
    log::debug!("smooth scrolling on {} anchors", anchors);

    let mut bound = Vec::new();
    for component in Component::ALL {
        if !dom::bindable(component) {
            continue;
        }
        match bind(component, config) {
            Some(()) => bound.push(component.name()),
            None => log::warn!("{} markup has unexpected element types", component.name()),
        }
    }
    bound
}

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    let (config, problems) = page_config();
    if console_log::init_with_level(config.log_level).is_err() {
        log::debug!("logger already installed");
    }
    for problem in problems {
        log::warn!("ignoring page setting: {}", problem);
    }

    let bound = bind_page(&config);
    log::info!("tastetales ready: {}", bound.join(", "));
}

/// Reload the recipe grid, optionally filtered by search text and category.
#[wasm_bindgen(js_name = loadRecipes)]
pub fn load_recipes(query: Option<String>, category: Option<String>) {
    let (config, _) = page_config();
    loader::load_recipes(
        config.endpoints(),
        RecipeQuery {
            search: query,
            category,
        },
    );
}
