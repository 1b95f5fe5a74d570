use common::form::{DraftField, IngredientField};
use web_sys::File;

pub enum Msg {
    UpdateField(DraftField, String),
    UpdateIngredient(usize, IngredientField, String),
    AddIngredient,
    RemoveIngredient(usize),
    UpdateInstruction(usize, String),
    AddInstruction,
    RemoveInstruction(usize),
    ImageSelected(Option<File>),
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
    Cancel,
}
