//! # Recipe API
//!
//! CRUD endpoints over the recipe store, mounted under `/api/recipes`.
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | `/api/recipes` | 200, array | 500 |
//! | GET | `/api/recipes/{id}` | 200, recipe | 404, 500 |
//! | POST | `/api/recipes` | 201, created recipe | 500 `{error, details}` |
//! | PUT | `/api/recipes/{id}` | 200, updated recipe | 404, 500 `{error, details}` |
//! | DELETE | `/api/recipes/{id}` | 200 `{msg}` | 404, 500 |
//!
//! POST and PUT take `multipart/form-data` (see `payload`) and, when the
//! request declares `application/json`, a JSON object of the same shape.

mod create;
mod delete;
mod get;
mod list;
pub mod payload;
mod update;

use crate::store::{RecipeStore, StoreError};
use actix_web::guard::{self, Guard};
use actix_web::http::header::CONTENT_TYPE;
use actix_web::web::{self, delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/recipes";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().guard(json_body()).to(create::process_json))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().guard(json_body()).to(update::process_json))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

fn json_body() -> impl Guard {
    guard::fn_guard(|ctx| {
        ctx.head()
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"))
    })
}

/// Runs a store operation on the blocking thread pool.
async fn blocking<T, F>(store: &RecipeStore, op: F) -> Result<T, StoreError>
where
    F: FnOnce(&RecipeStore) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let store = store.clone();
    web::block(move || op(&store))
        .await
        .map_err(|_| StoreError::Canceled)?
}

#[cfg(test)]
mod tests {
    use crate::config::DEFAULT_PLACEHOLDER_IMAGE;
    use crate::services;
    use crate::state::{AppState, UploadSettings};
    use crate::store::RecipeStore;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::form::{DraftField, IngredientField, RecipeDraft};
    use common::model::recipe::{Difficulty, Recipe};
    use serde_json::{json, Value};
    use std::fs;

    const BOUNDARY: &str = "recipe-test-boundary";

    macro_rules! test_app {
        ($dir:expr) => {{
            let state = AppState {
                store: RecipeStore::open(":memory:").unwrap(),
                uploads: UploadSettings {
                    dir: $dir.to_path_buf(),
                    placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
                },
            };
            let dir = $dir.to_path_buf();
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .configure(move |cfg| services::configure(cfg, &dir)),
            )
            .await
        }};
    }

    struct Part<'a> {
        name: &'a str,
        filename: Option<&'a str>,
        content: &'a [u8],
    }

    fn text<'a>(name: &'a str, value: &'a str) -> Part<'a> {
        Part {
            name,
            filename: None,
            content: value.as_bytes(),
        }
    }

    fn file<'a>(filename: &'a str, content: &'a [u8]) -> Part<'a> {
        Part {
            name: "image",
            filename: Some(filename),
            content,
        }
    }

    fn multipart(parts: &[Part<'_>]) -> (String, Vec<u8>) {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part.filename {
                Some(filename) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        part.name, filename
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.name)
                        .as_bytes(),
                ),
            }
            body.extend_from_slice(part.content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        (format!("multipart/form-data; boundary={BOUNDARY}"), body)
    }

    fn recipe_parts<'a>(title: &'a str, tags: &'a str) -> Vec<Part<'a>> {
        vec![
            text("title", title),
            text("description", "A test dish"),
            text("category", "Dinner"),
            text("difficulty", "Medium"),
            text("servings", "4"),
            text("cookingTime", "30"),
            text("ingredients", r#"[{"name":"rice","quantity":"1","unit":"cup"}]"#),
            text("instructions", r#"[{"step":1,"description":"cook"}]"#),
            text("tags", tags),
        ]
    }

    fn upload_count(dir: &std::path::Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    fn multipart_request(method: test::TestRequest, uri: &str, parts: &[Part<'_>]) -> test::TestRequest {
        let (content_type, body) = multipart(parts);
        method
            .uri(uri)
            .insert_header((CONTENT_TYPE, content_type))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn create_without_image_uses_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());

        let req = multipart_request(test::TestRequest::post(), "/api/recipes", &recipe_parts("Rice", "[]"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let recipe: Recipe = test::read_body_json(resp).await;
        assert!(!recipe.id.is_empty());
        assert_eq!(recipe.image, DEFAULT_PLACEHOLDER_IMAGE);
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.ingredients[0].unit, "cup");
    }

    #[actix_web::test]
    async fn uploaded_image_is_served_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());
        let bytes: Vec<u8> = (0u8..=255).cycle().take(4096).collect();

        let mut parts = recipe_parts("Pizza", "[]");
        parts.push(file("pizza.png", &bytes));
        let req = multipart_request(test::TestRequest::post(), "/api/recipes", &parts).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let recipe: Recipe = test::read_body_json(resp).await;
        assert!(recipe.image.starts_with("/uploads/"));
        assert!(recipe.image.ends_with(".png"));

        let filename = recipe.image.trim_start_matches("/uploads/");
        assert_eq!(fs::read(dir.path().join(filename)).unwrap(), bytes);

        let req = test::TestRequest::get().uri(&recipe.image).to_request();
        let served = test::call_and_read_body(&app, req).await;
        assert_eq!(served.as_ref(), bytes.as_slice());
    }

    #[actix_web::test]
    async fn update_keeps_image_unless_a_new_one_is_sent() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());

        let mut parts = recipe_parts("Curry", "[]");
        parts.push(file("curry.png", b"first image"));
        let req = multipart_request(test::TestRequest::post(), "/api/recipes", &parts).to_request();
        let created: Recipe = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/recipes/{}", created.id);

        let req = multipart_request(test::TestRequest::put(), &uri, &recipe_parts("Red curry", "[]"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let kept: Recipe = test::read_body_json(resp).await;
        assert_eq!(kept.title, "Red curry");
        assert_eq!(kept.image, created.image);

        let mut parts = recipe_parts("Red curry", "[]");
        parts.push(file("curry.jpg", b"second image"));
        let req = multipart_request(test::TestRequest::put(), &uri, &parts).to_request();
        let replaced: Recipe = test::call_and_read_body_json(&app, req).await;
        assert_ne!(replaced.image, created.image);
        assert!(replaced.image.ends_with(".jpg"));
        assert_eq!(replaced.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn update_clears_omitted_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());

        let req = multipart_request(
            test::TestRequest::post(),
            "/api/recipes",
            &recipe_parts("Soup", r#"["warm"]"#),
        )
        .to_request();
        let created: Recipe = test::call_and_read_body_json(&app, req).await;

        let parts = vec![
            text("title", "Soup"),
            text("difficulty", "Easy"),
            text("servings", "2"),
            text("cookingTime", "20"),
        ];
        let req = multipart_request(test::TestRequest::put(), &format!("/api/recipes/{}", created.id), &parts)
            .to_request();
        let updated: Recipe = test::call_and_read_body_json(&app, req).await;

        assert_eq!(updated.description, None);
        assert_eq!(updated.category, None);
        assert!(updated.tags.is_empty());
        assert!(updated.ingredients.is_empty());
    }

    #[actix_web::test]
    async fn deleted_recipe_is_gone() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());

        let req = multipart_request(test::TestRequest::post(), "/api/recipes", &recipe_parts("Stew", "[]"))
            .to_request();
        let created: Recipe = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/recipes/{}", created.id);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "msg": "Recipe removed" }));

        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "msg": "Recipe not found" }));
    }

    #[actix_web::test]
    async fn unknown_and_malformed_ids_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());
        let unknown = format!("/api/recipes/{}", uuid::Uuid::new_v4());

        for uri in ["/api/recipes/not-a-valid-id", unknown.as_str()] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);

            let resp = test::call_service(&app, test::TestRequest::delete().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);

            let req = multipart_request(test::TestRequest::put(), uri, &recipe_parts("Ghost", "[]")).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);

            let partial = [text("title", "Ghost"), file("ghost.png", b"unused")];
            let req = multipart_request(test::TestRequest::put(), uri, &partial).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "msg": "Recipe not found" }));

            let req = test::TestRequest::put()
                .uri(uri)
                .set_json(json!({ "title": "Ghost" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        }

        assert_eq!(upload_count(dir.path()), 0);
    }

    #[actix_web::test]
    async fn failed_writes_leave_no_upload_behind() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());

        let parts = [text("title", "Half done"), file("half.png", b"orphan")];
        let req = multipart_request(test::TestRequest::post(), "/api/recipes", &parts).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(upload_count(dir.path()), 0);

        let req = multipart_request(test::TestRequest::post(), "/api/recipes", &recipe_parts("Kept", "[]"))
            .to_request();
        let created: Recipe = test::call_and_read_body_json(&app, req).await;

        let parts = [text("title", "Kept"), file("kept.jpg", b"orphan")];
        let req = multipart_request(test::TestRequest::put(), &format!("/api/recipes/{}", created.id), &parts)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Server error while updating recipe");
        assert_eq!(upload_count(dir.path()), 0);
    }

    #[actix_web::test]
    async fn list_is_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());

        for title in ["one", "two", "three"] {
            let req = multipart_request(test::TestRequest::post(), "/api/recipes", &recipe_parts(title, "[]"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let recipes: Vec<Recipe> =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/recipes").to_request()).await;
        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["three", "two", "one"]);
    }

    #[actix_web::test]
    async fn tags_are_persisted_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());

        let req = multipart_request(
            test::TestRequest::post(),
            "/api/recipes",
            &recipe_parts("Tacos", r#"["spicy","quick","dinner"]"#),
        )
        .to_request();
        let created: Recipe = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/recipes/{}", created.id))
            .to_request();
        let loaded: Recipe = test::call_and_read_body_json(&app, req).await;
        assert_eq!(loaded.tags, vec!["spicy", "quick", "dinner"]);
    }

    #[actix_web::test]
    async fn form_draft_tags_round_trip_through_create() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());

        let mut draft = RecipeDraft::new(None);
        draft.set_field(DraftField::Title, "Chili".into());
        draft.set_field(DraftField::Servings, "6".into());
        draft.set_field(DraftField::CookingTime, "45".into());
        draft.set_field(DraftField::Tags, "spicy, quick , dinner".into());
        draft.set_ingredient(0, IngredientField::Name, "beans".into());
        draft.set_instruction(0, "simmer".into());
        draft.add_instruction();
        draft.set_instruction(1, "serve".into());

        let fields = draft.form_fields();
        let parts: Vec<Part<'_>> = fields.iter().map(|(name, value)| text(name, value)).collect();
        let req = multipart_request(test::TestRequest::post(), "/api/recipes", &parts).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Recipe = test::read_body_json(resp).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/recipes/{}", created.id))
            .to_request();
        let loaded: Recipe = test::call_and_read_body_json(&app, req).await;
        assert_eq!(loaded.tags, vec!["spicy", "quick", "dinner"]);
        assert_eq!(loaded.difficulty, Difficulty::Medium);
        assert_eq!(loaded.description, None);
        assert_eq!(loaded.ingredients[0].name, "beans");
        let steps: Vec<u32> = loaded.instructions.iter().map(|i| i.step).collect();
        assert_eq!(steps, vec![1, 2]);
    }

    #[actix_web::test]
    async fn invalid_submission_reports_error_and_details() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());

        let parts = vec![text("difficulty", "Easy"), text("servings", "2"), text("cookingTime", "5")];
        let req = multipart_request(test::TestRequest::post(), "/api/recipes", &parts).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Server error while creating recipe");
        assert!(body["details"].as_str().unwrap().contains("title"));

        let mut parts = recipe_parts("Broken", "[]");
        parts[6] = text("ingredients", "[{not json");
        let req = multipart_request(test::TestRequest::post(), "/api/recipes", &parts).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn json_body_is_accepted_for_writes() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app!(dir.path());

        let req = test::TestRequest::post()
            .uri("/api/recipes")
            .set_json(json!({
                "title": "Toast",
                "difficulty": "Easy",
                "servings": 1,
                "cookingTime": 3,
                "ingredients": [{ "name": "bread", "quantity": "2", "unit": "slices" }],
                "instructions": [{ "step": 1, "description": "toast it" }],
                "tags": ["breakfast"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Recipe = test::read_body_json(resp).await;
        assert_eq!(created.ingredients[0].name, "bread");
        assert_eq!(created.image, DEFAULT_PLACEHOLDER_IMAGE);

        let req = test::TestRequest::put()
            .uri(&format!("/api/recipes/{}", created.id))
            .set_json(json!({
                "title": "Cheese toast",
                "difficulty": "Medium",
                "servings": "1",
                "cookingTime": "5",
                "tags": "[\"breakfast\",\"cheese\"]"
            }))
            .to_request();
        let updated: Recipe = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.title, "Cheese toast");
        assert_eq!(updated.tags, vec!["breakfast", "cheese"]);
    }
}
