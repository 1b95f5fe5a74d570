use super::messages::Msg;
use super::state::RecipeForm;
use crate::helpers::{toast_error, toast_success};
use crate::route::Route;
use crate::services::api;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

pub fn update(form: &mut RecipeForm, ctx: &Context<RecipeForm>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateField(field, value) => {
            form.draft.set_field(field, value);
            true
        }
        Msg::UpdateIngredient(index, field, value) => {
            form.draft.set_ingredient(index, field, value);
            true
        }
        Msg::AddIngredient => {
            form.draft.add_ingredient();
            true
        }
        Msg::RemoveIngredient(index) => {
            form.draft.remove_ingredient(index);
            true
        }
        Msg::UpdateInstruction(index, description) => {
            form.draft.set_instruction(index, description);
            true
        }
        Msg::AddInstruction => {
            form.draft.add_instruction();
            true
        }
        Msg::RemoveInstruction(index) => {
            form.draft.remove_instruction(index);
            true
        }
        Msg::ImageSelected(file) => {
            form.set_image(file);
            true
        }

        Msg::Submit => {
            if form.submitting {
                return false;
            }
            let body = match api::recipe_form_data(&form.draft, form.image.as_ref()) {
                Ok(body) => body,
                Err(err) => {
                    error!(format!("could not build recipe form: {err}"));
                    toast_error("Something went wrong");
                    return false;
                }
            };

            form.submitting = true;
            let editing = ctx.props().editing_id().map(str::to_string);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match &editing {
                    Some(id) => api::update_recipe(id, body).await,
                    None => api::create_recipe(body).await,
                };
                match result {
                    Ok(_) => link.send_message(Msg::SubmitSucceeded),
                    Err(err) => link.send_message(Msg::SubmitFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SubmitSucceeded => {
            form.submitting = false;
            if ctx.props().recipe.is_some() {
                toast_success("Recipe updated!");
            } else {
                toast_success("Recipe created!");
            }
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Home);
            }
            false
        }
        Msg::SubmitFailed(reason) => {
            form.submitting = false;
            error!(format!("saving recipe failed: {reason}"));
            toast_error("Something went wrong");
            true
        }
        Msg::Cancel => {
            form.revoke_preview();
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Home);
            }
            false
        }
    }
}
