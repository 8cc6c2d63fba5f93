//! Recipe loader: fetch the listing and fill the grid.
//!
//! Loads are not cancelled. If two overlap, whichever response arrives last
//! is what the grid shows.

use std::cell::RefCell;

use gloo::utils::window;
use tastetales::markup::RECIPE_GRID;
use tastetales::{ClientError, Endpoints, Recipe, RecipeQuery, api};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, UrlSearchParams};
use yew::AppHandle;

use crate::components::{RecipeGrid, RecipeGridProps};
use crate::{dom, http};

thread_local! {
    static MOUNTED: RefCell<Option<AppHandle<RecipeGrid>>> = const { RefCell::new(None) };
}

/// Replace the grid's contents with one card per recipe.
pub fn render_grid(grid: Element, recipes: Vec<Recipe>) {
    let count = recipes.len();
    MOUNTED.with(|mounted| {
        let previous = mounted.borrow_mut().take();
        if let Some(previous) = previous {
            previous.destroy();
        }
        grid.set_inner_html("");
        let handle =
            yew::Renderer::<RecipeGrid>::with_root_and_props(grid, RecipeGridProps { recipes })
                .render();
        *mounted.borrow_mut() = Some(handle);
    });
    log::debug!("rendered {} recipe cards", count);
}

async fn load(endpoints: &Endpoints, query: &RecipeQuery) -> Result<(), ClientError> {
    let reply = http::get(&endpoints.recipes(query)).await?;
    let recipes = api::decode_recipes(&reply.body)?;
    match dom::by_id::<Element>(RECIPE_GRID) {
        Some(grid) => render_grid(grid, recipes),
        None => log::warn!("#{} disappeared before recipes arrived", RECIPE_GRID),
    }
    Ok(())
}

/// Start a load in the background. Failures are logged only.
pub fn load_recipes(endpoints: Endpoints, query: RecipeQuery) {
    spawn_local(async move {
        if let Err(err) = load(&endpoints, &query).await {
            log::error!("Error loading recipes: {}", err);
        }
    });
}

/// The `q` parameter of the page URL, as the search page carries it.
fn page_query() -> Option<String> {
    let search = window().location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get("q")
}

/// Fill the grid once at start, filtered by the page's own search query.
pub fn bind(endpoints: &Endpoints) -> Option<()> {
    dom::by_id::<Element>(RECIPE_GRID)?;
    let query = RecipeQuery {
        search: page_query(),
        category: None,
    };
    load_recipes(endpoints.clone(), query);
    Some(())
}
