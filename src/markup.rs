//! Element ids the page markup must provide, grouped by component.
//!
//! Each component is bound only when all of its ids resolve, so a page that
//! lacks, say, the add-recipe section simply runs without that component.

use crate::error::MissingMarkup;

pub const RECIPE_GRID: &str = "recipeGrid";
pub const SEARCH_INPUT: &str = "searchInput";
pub const NEWSLETTER_FORM: &str = "newsletterForm";
pub const ADD_RECIPE_BUTTON: &str = "addRecipeBtn";
pub const ADD_RECIPE_SECTION: &str = "add-recipe";
pub const ADD_RECIPE_FORM: &str = "addRecipeForm";
pub const CANCEL_ADD_RECIPE: &str = "cancelAddRecipe";
pub const RECIPE_TITLE: &str = "recipeTitle";
pub const RECIPE_CATEGORY: &str = "recipeCategory";
pub const RECIPE_IMAGE: &str = "recipeImage";
pub const RECIPE_IMAGE_FILE: &str = "recipeImageFile";
pub const RECIPE_DESCRIPTION: &str = "recipeDescription";
pub const RECIPE_INGREDIENTS: &str = "recipeIngredients";
pub const RECIPE_INSTRUCTIONS: &str = "recipeInstructions";
pub const RECIPE_HEALTH: &str = "recipeHealth";
pub const RECIPE_TIPS: &str = "recipeTips";
pub const FAVORITE_BUTTON: &str = "favoriteBtn";
pub const DELETE_RECIPE_BUTTON: &str = "deleteRecipeBtn";

pub const VIEW_RECIPE_CLASS: &str = "view-recipe";
pub const RECIPE_CARD_CLASS: &str = "recipe-card";
pub const HIDDEN_CLASS: &str = "hidden";
pub const FAVORITED_CLASS: &str = "favorited";

/// Selector for in-page anchors that scroll instead of jumping.
pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    RecipeGrid,
    Search,
    Newsletter,
    AddRecipeToggle,
    AddRecipeCancel,
    AddRecipeSubmit,
    Favorite,
    DeleteRecipe,
}

impl Component {
    pub const ALL: [Component; 8] = [
        Component::RecipeGrid,
        Component::Search,
        Component::Newsletter,
        Component::AddRecipeToggle,
        Component::AddRecipeCancel,
        Component::AddRecipeSubmit,
        Component::Favorite,
        Component::DeleteRecipe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Component::RecipeGrid => "recipe grid",
            Component::Search => "search box",
            Component::Newsletter => "newsletter form",
            Component::AddRecipeToggle => "add-recipe toggle",
            Component::AddRecipeCancel => "add-recipe cancel",
            Component::AddRecipeSubmit => "add-recipe form",
            Component::Favorite => "favorite button",
            Component::DeleteRecipe => "delete button",
        }
    }

    pub fn required_ids(self) -> &'static [&'static str] {
        match self {
            Component::RecipeGrid => &[RECIPE_GRID],
            Component::Search => &[SEARCH_INPUT],
            Component::Newsletter => &[NEWSLETTER_FORM],
            Component::AddRecipeToggle => &[ADD_RECIPE_BUTTON, ADD_RECIPE_SECTION],
            Component::AddRecipeCancel => &[CANCEL_ADD_RECIPE, ADD_RECIPE_SECTION, ADD_RECIPE_FORM],
            Component::AddRecipeSubmit => &[
                ADD_RECIPE_FORM,
                ADD_RECIPE_SECTION,
                RECIPE_TITLE,
                RECIPE_CATEGORY,
                RECIPE_IMAGE,
                RECIPE_IMAGE_FILE,
                RECIPE_DESCRIPTION,
                RECIPE_INGREDIENTS,
                RECIPE_INSTRUCTIONS,
                RECIPE_HEALTH,
                RECIPE_TIPS,
            ],
            Component::Favorite => &[FAVORITE_BUTTON],
            Component::DeleteRecipe => &[DELETE_RECIPE_BUTTON],
        }
    }

    /// Check that every required id is present, reporting the first miss.
    pub fn check<P>(self, present: P) -> Result<(), MissingMarkup>
    where
        P: Fn(&str) -> bool,
    {
        match self.required_ids().iter().copied().find(|&id| !present(id)) {
            Some(id) => Err(MissingMarkup {
                component: self.name(),
                id,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_all_present() {
        assert!(Component::AddRecipeSubmit.check(|_| true).is_ok());
    }

    #[test]
    fn test_check_reports_first_missing() {
        let err = Component::AddRecipeToggle
            .check(|id| id != ADD_RECIPE_SECTION)
            .unwrap_err();
        assert_eq!(err.id, "add-recipe");
        assert_eq!(err.component, "add-recipe toggle");
    }

    #[test]
    fn test_components_have_ids() {
        for component in Component::ALL {
            assert!(!component.required_ids().is_empty(), "{:?}", component);
        }
    }
}
