//! Add-recipe panel: show/hide toggle, cancel, and form submission.

use gloo::dialogs::alert;
use tastetales::api::interpret_created;
use tastetales::markup::{
    ADD_RECIPE_BUTTON, ADD_RECIPE_FORM, ADD_RECIPE_SECTION, CANCEL_ADD_RECIPE, HIDDEN_CLASS,
    RECIPE_CATEGORY, RECIPE_DESCRIPTION, RECIPE_HEALTH, RECIPE_IMAGE, RECIPE_IMAGE_FILE,
    RECIPE_INGREDIENTS, RECIPE_INSTRUCTIONS, RECIPE_TIPS, RECIPE_TITLE,
};
use tastetales::{
    Attachment, ClientError, Endpoints, NewRecipe, Panel, PanelEffect, RecipeForm, Submission,
    SubmitOutcome,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, File, FormData, HtmlFormElement, HtmlInputElement};

use crate::{dom, http};

fn panel(section: &Element) -> Panel {
    Panel::from_hidden(section.class_list().contains(HIDDEN_CLASS))
}

fn apply(section: &Element, panel: Panel) {
    let classes = section.class_list();
    let result = if panel.is_hidden() {
        classes.add_1(HIDDEN_CLASS)
    } else {
        classes.remove_1(HIDDEN_CLASS)
    };
    if let Err(err) = result {
        log::warn!("could not update add-recipe section: {}", dom::js_message(&err));
    }
}

fn close(section: &Element, form: &HtmlFormElement) {
    let mut state = panel(section);
    state.close();
    apply(section, state);
    form.reset();
}

pub fn bind_toggle() -> Option<()> {
    let button: Element = dom::by_id(ADD_RECIPE_BUTTON)?;
    let section: Element = dom::by_id(ADD_RECIPE_SECTION)?;
    dom::listen(&button, "click", move |event| {
        event.prevent_default();
        let mut state = panel(&section);
        let effect = state.toggle();
        apply(&section, state);
        if effect == PanelEffect::Reveal {
            dom::scroll_smoothly(&section);
        }
    });
    Some(())
}

pub fn bind_cancel() -> Option<()> {
    let button: Element = dom::by_id(CANCEL_ADD_RECIPE)?;
    let section: Element = dom::by_id(ADD_RECIPE_SECTION)?;
    let form: HtmlFormElement = dom::by_id(ADD_RECIPE_FORM)?;
    dom::listen(&button, "click", move |_| close(&section, &form));
    Some(())
}

fn read_form() -> RecipeForm {
    RecipeForm {
        title: dom::field_value(RECIPE_TITLE),
        category: dom::field_value(RECIPE_CATEGORY),
        image_url: dom::field_value(RECIPE_IMAGE),
        description: dom::field_value(RECIPE_DESCRIPTION),
        ingredients: dom::field_value(RECIPE_INGREDIENTS),
        instructions: dom::field_value(RECIPE_INSTRUCTIONS),
        health: dom::field_value(RECIPE_HEALTH),
        tips: dom::field_value(RECIPE_TIPS),
    }
}

fn attached_image() -> Option<Attachment<File>> {
    let input: HtmlInputElement = dom::by_id(RECIPE_IMAGE_FILE)?;
    let file = input.files()?.get(0)?;
    Some(Attachment::new(file.name(), file))
}

fn browser_error(err: JsValue) -> ClientError {
    ClientError::Network(dom::js_message(&err))
}

/// Multipart body: the text parts, then the file under `image`.
pub fn multipart_body(fields: &NewRecipe, image: &Attachment<File>) -> Result<FormData, ClientError> {
    let form = FormData::new().map_err(browser_error)?;
    for (name, value) in fields.multipart_fields() {
        form.append_with_str(name, value).map_err(browser_error)?;
    }
    form.append_with_blob_and_filename("image", &image.file, &image.name)
        .map_err(browser_error)?;
    Ok(form)
}

async fn submit(
    endpoints: &Endpoints,
    submission: Submission<File>,
) -> Result<SubmitOutcome, ClientError> {
    let url = endpoints.create_recipe();
    let reply = match submission {
        Submission::Json(fields) => http::post_json(&url, &fields).await?,
        Submission::Multipart { fields, image } => {
            http::post_form(&url, multipart_body(&fields, &image)?).await?
        }
    };
    interpret_created(&reply)
}

pub fn bind_submit(endpoints: &Endpoints) -> Option<()> {
    let form: HtmlFormElement = dom::by_id(ADD_RECIPE_FORM)?;
    let section: Element = dom::by_id(ADD_RECIPE_SECTION)?;
    let endpoints = endpoints.clone();
    let target = form.clone();

    dom::listen(&form, "submit", move |event| {
        event.prevent_default();

        let submission = match read_form().validate(attached_image()) {
            Ok(submission) => submission,
            Err(err) => {
                log::debug!("add recipe blocked: {}", err);
                alert(&err.to_string());
                return;
            }
        };

        let endpoints = endpoints.clone();
        let form = target.clone();
        let section = section.clone();
        spawn_local(async move {
            match submit(&endpoints, submission).await {
                Ok(outcome) => {
                    close(&section, &form);
                    match outcome {
                        SubmitOutcome::Redirect(url) => dom::navigate(&url),
                        SubmitOutcome::Acknowledge(message) => alert(message),
                    }
                }
                Err(err) => {
                    log::error!("Error adding recipe: {}", err);
                    alert(&format!("Error adding recipe: {}", err));
                }
            }
        });
    });
    Some(())
}
