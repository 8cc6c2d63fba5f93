//! Recipe cards rendered into the grid.

use tastetales::Recipe;
use tastetales::markup::{RECIPE_CARD_CLASS, VIEW_RECIPE_CLASS};
use tastetales::routes::recipe_page;
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct RecipeCardProps {
    pub recipe: Recipe,
}

#[function_component(RecipeCard)]
pub fn recipe_card(props: &RecipeCardProps) -> Html {
    let recipe = &props.recipe;

    let on_view = {
        let route = (!recipe.id.as_str().is_empty()).then(|| recipe_page(&recipe.id));
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(route) = &route {
                dom::navigate(route);
            }
        })
    };

    html! {
        <div class={RECIPE_CARD_CLASS}>
            <img src={recipe.image.clone()} alt={recipe.title.clone()} />
            <h3>{ &recipe.title }</h3>
            <p>{ &recipe.description }</p>
            <a
                href="#"
                class={VIEW_RECIPE_CLASS}
                data-id={recipe.id.to_string()}
                onclick={on_view}
            >
                { "View Recipe" }
            </a>
        </div>
    }
}

/// Grid contents: one card per recipe, rendered directly into the container.
#[derive(Properties, PartialEq)]
pub struct RecipeGridProps {
    pub recipes: Vec<Recipe>,
}

#[function_component(RecipeGrid)]
pub fn recipe_grid(props: &RecipeGridProps) -> Html {
    html! {
        <>
            { for props.recipes.iter().map(|recipe| html! {
                <RecipeCard recipe={recipe.clone()} />
            })}
        </>
    }
}
