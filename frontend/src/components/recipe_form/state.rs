use common::form::RecipeDraft;
use common::model::recipe::Recipe;
use web_sys::{File, Url};

pub struct RecipeForm {
    pub draft: RecipeDraft,
    pub image: Option<File>,
    /// Object URL for the locally selected image. Revoked whenever it is
    /// replaced and when the form is destroyed.
    pub preview_url: Option<String>,
    /// Image already stored on the server, shown until a new file is picked.
    pub current_image: Option<String>,
    pub submitting: bool,
}

impl RecipeForm {
    pub fn new(recipe: Option<&Recipe>) -> Self {
        Self {
            draft: RecipeDraft::new(recipe),
            image: None,
            preview_url: None,
            current_image: recipe.map(|recipe| recipe.image.clone()),
            submitting: false,
        }
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview_url.as_deref().or(self.current_image.as_deref())
    }

    pub fn set_image(&mut self, file: Option<File>) {
        self.revoke_preview();
        self.preview_url = file
            .as_ref()
            .and_then(|file| Url::create_object_url_with_blob(file).ok());
        self.image = file;
    }

    pub fn revoke_preview(&mut self) {
        if let Some(url) = self.preview_url.take() {
            Url::revoke_object_url(&url).ok();
        }
    }
}
