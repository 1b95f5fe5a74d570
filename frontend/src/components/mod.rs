pub mod navbar;
pub mod recipe_card;
pub mod recipe_detail;
pub mod recipe_form;
pub mod search_bar;
pub mod spinner;
