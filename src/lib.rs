//! # tastetales
//!
//! Client logic for the TasteTales recipe site.
//!
//! The browser crate (`wasm-ui`) owns the DOM, timers and `fetch`; this crate
//! owns every decision those handlers make, so it builds and tests natively.
//!
//! ## Overview
//!
//! - **Recipes**: transfer objects read from and posted to the recipe API
//! - **Routes**: API endpoints and the page routes handlers navigate to
//! - **Search**: debounce handle and navigation targets for the search box
//! - **Add recipe**: form validation and the JSON/multipart body choice
//! - **Responses**: interpreting API replies into outcomes or errors
//!
//! ## Example
//!
//! ```
//! use tastetales::api::{Reply, SubmitOutcome, interpret_created};
//! use tastetales::add_recipe::{RecipeForm, Submission};
//!
//! let form = RecipeForm {
//!     title: "Lemon bars".to_string(),
//!     category: "Dessert".to_string(),
//!     description: "Tart and sweet".to_string(),
//!     ..RecipeForm::default()
//! };
//!
//! // No file attached, so the form is posted as JSON.
//! let submission = form.validate::<()>(None).unwrap();
//! assert!(matches!(submission, Submission::Json(_)));
//!
//! let outcome = interpret_created(&Reply::new(201, r#"{"id": 42}"#)).unwrap();
//! assert_eq!(outcome, SubmitOutcome::Redirect("/recipe/42".to_string()));
//! ```

pub mod add_recipe;
pub mod api;
pub mod config;
pub mod detail;
pub mod error;
pub mod markup;
pub mod newsletter;
pub mod panel;
pub mod recipe;
pub mod routes;
pub mod search;

pub use add_recipe::{Attachment, RecipeForm, Submission};
pub use api::{Reply, SubmitOutcome};
pub use config::ClientConfig;
pub use error::{ClientError, ConfigError, FormError, MissingMarkup};
pub use markup::Component;
pub use panel::{Panel, PanelEffect};
pub use recipe::{NewRecipe, Recipe, RecipeId};
pub use routes::{Endpoints, RecipeQuery};
pub use search::Debounce;
