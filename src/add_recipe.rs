//! Add-recipe form: validation and choice of request body.

use crate::error::FormError;
use crate::recipe::NewRecipe;

/// Image extensions the server stores; other files are still sent, but the
/// server keeps no image for them.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Shown when the server accepted the recipe but returned no id.
pub const ADDED_MESSAGE: &str = "Recipe added successfully!";

/// Raw field values as read from the form, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub description: String,
    pub ingredients: String,
    pub instructions: String,
    pub health: String,
    pub tips: String,
}

/// A file picked in the image input, with the name the browser reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment<F> {
    pub name: String,
    pub file: F,
}

impl<F> Attachment<F> {
    pub fn new(name: impl Into<String>, file: F) -> Self {
        Self {
            name: name.into(),
            file,
        }
    }

    pub fn has_allowed_extension(&self) -> bool {
        match self.name.rsplit_once('.') {
            Some((_, ext)) => ALLOWED_IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed)),
            None => false,
        }
    }
}

/// The request body for a validated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<F> {
    /// `application/json`; the image is a URL string, possibly empty.
    Json(NewRecipe),
    /// `multipart/form-data`; text parts plus the uploaded `image` file.
    Multipart {
        fields: NewRecipe,
        image: Attachment<F>,
    },
}

impl<F> Submission<F> {
    pub fn fields(&self) -> &NewRecipe {
        match self {
            Submission::Json(fields) | Submission::Multipart { fields, .. } => fields,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Json(_) => "json",
            Submission::Multipart { .. } => "multipart",
        }
    }
}

impl RecipeForm {
    /// Trim every field, check the required ones, and pick the body format.
    ///
    /// An attached file selects a multipart body; otherwise JSON is sent.
    pub fn validate<F>(self, image: Option<Attachment<F>>) -> Result<Submission<F>, FormError> {
        let fields = NewRecipe {
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            image: self.image_url.trim().to_string(),
            description: self.description.trim().to_string(),
            ingredients: self.ingredients.trim().to_string(),
            instructions: self.instructions.trim().to_string(),
            health: self.health.trim().to_string(),
            tips: self.tips.trim().to_string(),
        };

        if fields.title.is_empty() || fields.category.is_empty() || fields.description.is_empty() {
            return Err(FormError::MissingRequired);
        }

        let submission = match image {
            Some(image) => {
                if !image.has_allowed_extension() {
                    log::warn!("add recipe: server will not store image {:?}", image.name);
                }
                Submission::Multipart { fields, image }
            }
            None => Submission::Json(fields),
        };
        log::debug!("add recipe: {} submission", submission.kind());
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RecipeForm {
        RecipeForm {
            title: "  Shakshuka ".to_string(),
            category: "Breakfast".to_string(),
            image_url: " https://img.example.com/s.jpg ".to_string(),
            description: "Eggs in tomato sauce".to_string(),
            ingredients: "eggs\ntomatoes\n".to_string(),
            instructions: "Simmer, crack, cover.".to_string(),
            health: String::new(),
            tips: "Serve with bread".to_string(),
        }
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let form = RecipeForm {
            title: String::new(),
            category: "X".to_string(),
            description: "Y".to_string(),
            ..RecipeForm::default()
        };
        assert_eq!(
            form.validate::<()>(None),
            Err(FormError::MissingRequired)
        );
    }

    #[test]
    fn test_whitespace_only_required_field_is_rejected() {
        let form = RecipeForm {
            description: "   ".to_string(),
            ..filled()
        };
        assert_eq!(
            form.validate::<()>(None),
            Err(FormError::MissingRequired)
        );
    }

    #[test]
    fn test_missing_category_rejected_even_with_file() {
        let form = RecipeForm {
            category: String::new(),
            ..filled()
        };
        let result = form.validate(Some(Attachment::new("pic.png", ())));
        assert_eq!(result, Err(FormError::MissingRequired));
    }

    #[test]
    fn test_no_file_gives_json() {
        let submission = filled().validate::<()>(None).unwrap();
        match submission {
            Submission::Json(fields) => {
                assert_eq!(fields.title, "Shakshuka");
                assert_eq!(fields.image, "https://img.example.com/s.jpg");
                assert_eq!(fields.ingredients, "eggs\ntomatoes");
                assert_eq!(fields.health, "");
            }
            other => panic!("expected JSON submission, got {:?}", other),
        }
    }

    #[test]
    fn test_file_gives_multipart() {
        let submission = filled()
            .validate(Some(Attachment::new("photo.JPG", 7u8)))
            .unwrap();
        assert_eq!(submission.kind(), "multipart");
        match submission {
            Submission::Multipart { fields, image } => {
                assert_eq!(fields.title, "Shakshuka");
                assert_eq!(image.name, "photo.JPG");
                assert_eq!(image.file, 7);
            }
            other => panic!("expected multipart submission, got {:?}", other),
        }
    }

    #[test]
    fn test_any_attached_file_gives_multipart() {
        let form = RecipeForm {
            title: "T".to_string(),
            category: "X".to_string(),
            description: "Y".to_string(),
            ..RecipeForm::default()
        };
        let submission = form
            .validate(Some(Attachment::new("photo.webp", ())))
            .unwrap();
        assert_eq!(submission.kind(), "multipart");

        let submission = filled()
            .validate(Some(Attachment::new("noextension", ())))
            .unwrap();
        assert!(matches!(submission, Submission::Multipart { .. }));
    }

    #[test]
    fn test_allowed_extension_is_case_insensitive() {
        assert!(Attachment::new("a.PNG", ()).has_allowed_extension());
        assert!(Attachment::new("a.jpeg", ()).has_allowed_extension());
        assert!(!Attachment::new("a.webp", ()).has_allowed_extension());
        assert!(!Attachment::new("gif", ()).has_allowed_extension());
    }

    #[test]
    fn test_fields_accessor() {
        let submission = filled().validate::<()>(None).unwrap();
        assert_eq!(submission.fields().category, "Breakfast");
        assert_eq!(submission.kind(), "json");
    }
}
