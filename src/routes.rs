//! API endpoints and page routes.
//!
//! API endpoints hang off the configured base (empty for same origin). Page
//! routes are always site-relative; the server renders them.

use urlencoding::encode;

use crate::recipe::RecipeId;

/// Filters for the recipe listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl RecipeQuery {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn params(&self) -> Vec<(&'static str, &str)> {
        [("search", &self.search), ("category", &self.category)]
            .into_iter()
            .filter_map(|(key, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some((key, v)),
                _ => None,
            })
            .collect()
    }
}

/// Recipe API endpoints rooted at a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `GET` target for listing recipes.
    pub fn recipes(&self, query: &RecipeQuery) -> String {
        let mut url = format!("{}/api/recipes", self.base);
        for (i, (key, value)) in query.params().into_iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&encode(value));
        }
        url
    }

    /// `POST` target for creating a recipe.
    pub fn create_recipe(&self) -> String {
        format!("{}/api/recipes", self.base)
    }

    /// `DELETE` target for one recipe.
    pub fn recipe(&self, id: &RecipeId) -> String {
        format!("{}/api/recipes/{}", self.base, encode(id.as_str()))
    }

    pub fn favorite(&self, id: &RecipeId) -> String {
        format!("{}/api/recipes/{}/favorite", self.base, encode(id.as_str()))
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new("")
    }
}

pub fn home_page() -> &'static str {
    "/"
}

pub fn recipe_page(id: &RecipeId) -> String {
    format!("/recipe/{}", encode(id.as_str()))
}

pub fn search_page(query: &str) -> String {
    format!("/search?q={}", encode(query))
}

pub fn category_page(name: &str) -> String {
    format!("/category/{}", encode(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipes_without_query() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.recipes(&RecipeQuery::default()), "/api/recipes");
    }

    #[test]
    fn test_recipes_with_empty_search_is_unfiltered() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.recipes(&RecipeQuery::search("")), "/api/recipes");
    }

    #[test]
    fn test_recipes_search_is_encoded() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.recipes(&RecipeQuery::search("mac & cheese")),
            "/api/recipes?search=mac%20%26%20cheese"
        );
    }

    #[test]
    fn test_recipes_search_and_category() {
        let endpoints = Endpoints::new("https://api.example.com/");
        let query = RecipeQuery::search("soup").with_category("Main Course");
        assert_eq!(
            endpoints.recipes(&query),
            "https://api.example.com/api/recipes?search=soup&category=Main%20Course"
        );
    }

    #[test]
    fn test_recipes_category_only() {
        let endpoints = Endpoints::default();
        let query = RecipeQuery::default().with_category("Dessert");
        assert_eq!(endpoints.recipes(&query), "/api/recipes?category=Dessert");
    }

    #[test]
    fn test_detail_endpoints() {
        let endpoints = Endpoints::new("/v1");
        let id = RecipeId::from(12);
        assert_eq!(endpoints.create_recipe(), "/v1/api/recipes");
        assert_eq!(endpoints.recipe(&id), "/v1/api/recipes/12");
        assert_eq!(endpoints.favorite(&id), "/v1/api/recipes/12/favorite");
    }

    #[test]
    fn test_page_routes() {
        assert_eq!(home_page(), "/");
        assert_eq!(recipe_page(&RecipeId::from(42)), "/recipe/42");
        assert_eq!(recipe_page(&RecipeId::new("a/b")), "/recipe/a%2Fb");
        assert_eq!(search_page("pad thai"), "/search?q=pad%20thai");
        assert_eq!(search_page(""), "/search?q=");
        assert_eq!(category_page("Breakfast"), "/category/Breakfast");
    }
}
