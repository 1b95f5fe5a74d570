use super::messages::Msg;
use super::state::RecipeForm;
use common::form::{DraftField, IngredientField};
use common::model::recipe::Difficulty;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(form: &RecipeForm, ctx: &Context<RecipeForm>) -> Html {
    let link = ctx.link();
    let draft = &form.draft;
    let editing = ctx.props().recipe.is_some();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let on_image = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::ImageSelected(input.files().and_then(|files| files.get(0)))
    });
    let on_difficulty = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::UpdateField(DraftField::Difficulty, select.value())
    });
    let on_description = link.callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::UpdateField(DraftField::Description, area.value())
    });

    html! {
        <form class="form" {onsubmit}>
            <h1>{ if editing { "Edit Recipe" } else { "Add Recipe" } }</h1>

            { text_input(link, "Title", DraftField::Title, &draft.title, "text", true) }

            <div class="field">
                <label>{ "Description" }</label>
                <textarea value={draft.description.clone()} oninput={on_description} />
            </div>

            <div class="grid">
                { text_input(link, "Category", DraftField::Category, &draft.category, "text", false) }
                <div class="field">
                    <label>{ "Difficulty" }</label>
                    <select onchange={on_difficulty}>
                        { for Difficulty::ALL.iter().map(|level| html! {
                            <option value={level.as_str()} selected={*level == draft.difficulty}>
                                { level.as_str() }
                            </option>
                        }) }
                    </select>
                </div>
                { text_input(link, "Servings", DraftField::Servings, &draft.servings, "number", true) }
                { text_input(link, "Cooking time (minutes)", DraftField::CookingTime, &draft.cooking_time, "number", true) }
            </div>

            <h2>{ "Ingredients" }</h2>
            { for draft.ingredients.iter().enumerate().map(|(index, ingredient)| html! {
                <div class="row">
                    { ingredient_input(link, index, IngredientField::Name, &ingredient.name, "Ingredient") }
                    { ingredient_input(link, index, IngredientField::Quantity, &ingredient.quantity, "Quantity") }
                    { ingredient_input(link, index, IngredientField::Unit, &ingredient.unit, "Unit") }
                    if draft.can_remove_ingredient() {
                        <button type="button" class="btn btn-danger"
                            onclick={link.callback(move |_: MouseEvent| Msg::RemoveIngredient(index))}>
                            { "Remove" }
                        </button>
                    }
                </div>
            }) }
            <button type="button" class="btn btn-secondary" onclick={link.callback(|_: MouseEvent| Msg::AddIngredient)}>
                { "Add Ingredient" }
            </button>

            <h2>{ "Instructions" }</h2>
            { for draft.instructions.iter().enumerate().map(|(index, instruction)| html! {
                <div class="row">
                    <span class="step-number">{ instruction.step }</span>
                    <textarea
                        required=true
                        value={instruction.description.clone()}
                        oninput={link.callback(move |e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::UpdateInstruction(index, area.value())
                        })}
                    />
                    if draft.can_remove_instruction() {
                        <button type="button" class="btn btn-danger"
                            onclick={link.callback(move |_: MouseEvent| Msg::RemoveInstruction(index))}>
                            { "Remove" }
                        </button>
                    }
                </div>
            }) }
            <button type="button" class="btn btn-secondary" onclick={link.callback(|_: MouseEvent| Msg::AddInstruction)}>
                { "Add Step" }
            </button>

            { text_input(link, "Tags (comma separated)", DraftField::Tags, &draft.tags, "text", false) }

            <div class="field">
                <label>{ "Image" }</label>
                <input type="file" accept="image/*" onchange={on_image} />
                if let Some(src) = form.preview() {
                    <img class="preview" src={src.to_string()} alt="Preview" />
                }
            </div>

            <div class="actions">
                <button type="submit" class="btn" disabled={form.submitting}>
                    { if editing { "Update Recipe" } else { "Create Recipe" } }
                </button>
                <button type="button" class="btn btn-secondary" onclick={link.callback(|_: MouseEvent| Msg::Cancel)}>
                    { "Cancel" }
                </button>
            </div>
        </form>
    }
}

fn text_input(
    link: &Scope<RecipeForm>,
    label: &'static str,
    field: DraftField,
    value: &str,
    kind: &'static str,
    required: bool,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(field, input.value())
    });
    let min = (kind == "number").then_some("1");

    html! {
        <div class="field">
            <label>{ label }</label>
            <input type={kind} value={value.to_string()} {required} {min} {oninput} />
        </div>
    }
}

fn ingredient_input(
    link: &Scope<RecipeForm>,
    index: usize,
    field: IngredientField,
    value: &str,
    placeholder: &'static str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateIngredient(index, field, input.value())
    });
    let required = field == IngredientField::Name;

    html! {
        <input type="text" {placeholder} value={value.to_string()} {required} {oninput} />
    }
}
