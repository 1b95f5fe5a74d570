//! Route-level containers. Each one fetches what its route needs on first
//! render, shows a spinner meanwhile, and hands the data to a component.

pub mod add_recipe;
pub mod edit_recipe;
pub mod recipe_list;
pub mod recipe_view;
