//! # Recipe Store
//!
//! Persistent collection of recipe documents backed by a single SQLite table.
//! The store owns identity and timestamps: callers hand in the editable fields
//! and get back a full `common::model::recipe::Recipe`.
//!
//! ## Layout
//!
//! - Scalar fields map to columns.
//! - `ingredients`, `instructions` and `tags` are stored as JSON text.
//! - `seq` is an autoincrement key that breaks `created_at` ties, so that
//!   documents created within the same clock tick still list newest first.
//!
//! ## Lifecycle
//!
//! `RecipeStore::open` creates the schema and returns a clonable handle that is
//! shared with the HTTP layer as application data. `RecipeStore::close` flushes
//! and closes the connection at shutdown. All methods are blocking and are
//! expected to run on actix-web's blocking pool (`web::block`).

use chrono::{DateTime, Utc};
use common::model::recipe::{Difficulty, Ingredient, Instruction, Recipe};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS recipes (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    description TEXT,
    category TEXT,
    difficulty TEXT NOT NULL,
    servings INTEGER NOT NULL,
    cooking_time INTEGER NOT NULL,
    ingredients TEXT NOT NULL,
    instructions TEXT NOT NULL,
    tags TEXT NOT NULL,
    image TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

const SELECT_COLUMNS: &str = "SELECT id, title, description, category, difficulty, servings, \
     cooking_time, ingredients, instructions, tags, image, created_at, updated_at FROM recipes";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not encode document field: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("store connection lock poisoned")]
    Poisoned,
    #[error("store operation was canceled")]
    Canceled,
}

/// The editable part of a recipe, as written by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeFields {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Difficulty,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    pub tags: Vec<String>,
}

#[derive(Clone)]
pub struct RecipeStore {
    conn: Arc<Mutex<Connection>>,
}

impl RecipeStore {
    /// Opens (or creates) the store at `path`. `:memory:` opens a private
    /// in-memory database.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Closes the underlying connection. Returns `false` when other handles
    /// are still alive, in which case the connection closes with the last one.
    pub fn close(self) -> Result<bool, StoreError> {
        match Arc::try_unwrap(self.conn) {
            Ok(mutex) => {
                let conn = mutex.into_inner().map_err(|_| StoreError::Poisoned)?;
                conn.close().map_err(|(_, e)| StoreError::Sqlite(e))?;
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// All recipes, newest first.
    pub fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at DESC, seq DESC"
        ))?;
        let recipes = stmt
            .query_map([], recipe_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(recipes)
    }

    /// Returns `None` for unknown ids, including ids that are not UUIDs.
    pub fn get(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        let Some(id) = normalize_id(id) else {
            return Ok(None);
        };
        let conn = self.lock()?;
        find(&conn, &id)
    }

    /// Whether a document with this id is stored. Malformed ids never are.
    pub fn exists(&self, id: &str) -> Result<bool, StoreError> {
        let Some(id) = normalize_id(id) else {
            return Ok(false);
        };
        let conn = self.lock()?;
        let found = conn
            .query_row("SELECT 1 FROM recipes WHERE id = ?1", params![id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    pub fn insert(&self, fields: RecipeFields, image: String) -> Result<Recipe, StoreError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO recipes (id, title, description, category, difficulty, servings, \
             cooking_time, ingredients, instructions, tags, image, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)",
            params![
                id,
                fields.title,
                fields.description,
                fields.category,
                fields.difficulty.as_str(),
                fields.servings,
                fields.cooking_time,
                serde_json::to_string(&fields.ingredients)?,
                serde_json::to_string(&fields.instructions)?,
                serde_json::to_string(&fields.tags)?,
                image,
                now,
            ],
        )?;

        Ok(Recipe {
            id,
            title: fields.title,
            description: fields.description,
            category: fields.category,
            difficulty: fields.difficulty,
            servings: fields.servings,
            cooking_time: fields.cooking_time,
            ingredients: fields.ingredients,
            instructions: fields.instructions,
            tags: fields.tags,
            image,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces every editable field. `image` is only written when `Some`.
    /// Returns `None` when no document has this id.
    pub fn update(
        &self,
        id: &str,
        fields: RecipeFields,
        image: Option<String>,
    ) -> Result<Option<Recipe>, StoreError> {
        let Some(id) = normalize_id(id) else {
            return Ok(None);
        };
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE recipes SET title = ?2, description = ?3, category = ?4, difficulty = ?5, \
             servings = ?6, cooking_time = ?7, ingredients = ?8, instructions = ?9, tags = ?10, \
             image = COALESCE(?11, image), updated_at = ?12 WHERE id = ?1",
            params![
                id,
                fields.title,
                fields.description,
                fields.category,
                fields.difficulty.as_str(),
                fields.servings,
                fields.cooking_time,
                serde_json::to_string(&fields.ingredients)?,
                serde_json::to_string(&fields.instructions)?,
                serde_json::to_string(&fields.tags)?,
                image,
                Utc::now(),
            ],
        )?;

        if changed == 0 {
            return Ok(None);
        }
        find(&conn, &id)
    }

    /// Hard delete. Returns `false` when no document has this id.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let Some(id) = normalize_id(id) else {
            return Ok(false);
        };
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM recipes WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}

fn normalize_id(id: &str) -> Option<String> {
    Uuid::parse_str(id.trim()).ok().map(|uuid| uuid.to_string())
}

fn find(conn: &Connection, id: &str) -> Result<Option<Recipe>, StoreError> {
    let recipe = conn
        .query_row(
            &format!("{SELECT_COLUMNS} WHERE id = ?1"),
            params![id],
            recipe_from_row,
        )
        .optional()?;
    Ok(recipe)
}

fn recipe_from_row(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    let difficulty: String = row.get(4)?;
    Ok(Recipe {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        difficulty: difficulty
            .parse()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?,
        servings: row.get(5)?,
        cooking_time: row.get(6)?,
        ingredients: json_column(row, 7)?,
        instructions: json_column(row, 8)?,
        tags: json_column(row, 9)?,
        image: row.get(10)?,
        created_at: row.get::<_, DateTime<Utc>>(11)?,
        updated_at: row.get::<_, DateTime<Utc>>(12)?,
    })
}

fn json_column<T: serde::de::DeserializeOwned>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T> {
    let text: String = row.get(idx)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str) -> RecipeFields {
        RecipeFields {
            title: title.to_string(),
            description: Some("tasty".into()),
            category: Some("Dinner".into()),
            difficulty: Difficulty::Easy,
            servings: 2,
            cooking_time: 15,
            ingredients: vec![Ingredient {
                name: "rice".into(),
                quantity: "1".into(),
                unit: "cup".into(),
            }],
            instructions: vec![Instruction {
                step: 1,
                description: "boil".into(),
            }],
            tags: vec!["quick".into()],
        }
    }

    #[test]
    fn insert_assigns_id_and_timestamps() {
        let store = RecipeStore::open(":memory:").unwrap();
        let recipe = store.insert(fields("Rice"), "/uploads/1.png".into()).unwrap();

        assert!(Uuid::parse_str(&recipe.id).is_ok());
        assert_eq!(recipe.created_at, recipe.updated_at);

        let loaded = store.get(&recipe.id).unwrap().unwrap();
        assert_eq!(loaded.title, "Rice");
        assert_eq!(loaded.ingredients, recipe.ingredients);
        assert_eq!(loaded.tags, vec!["quick"]);
        assert_eq!(loaded.image, "/uploads/1.png");
    }

    #[test]
    fn list_is_newest_first() {
        let store = RecipeStore::open(":memory:").unwrap();
        for title in ["first", "second", "third"] {
            store.insert(fields(title), String::new()).unwrap();
        }

        let titles: Vec<String> = store.list().unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[test]
    fn malformed_and_unknown_ids_are_not_found() {
        let store = RecipeStore::open(":memory:").unwrap();
        let unknown = Uuid::new_v4().to_string();

        assert!(store.get("not-an-id").unwrap().is_none());
        assert!(!store.exists("not-an-id").unwrap());
        assert!(!store.exists(&unknown).unwrap());
        assert!(store.get(&unknown).unwrap().is_none());
        assert!(store.update("nope", fields("x"), None).unwrap().is_none());
        assert!(!store.delete(&unknown).unwrap());
    }

    #[test]
    fn update_replaces_fields_and_keeps_image_when_absent() {
        let store = RecipeStore::open(":memory:").unwrap();
        let created = store.insert(fields("Rice"), "/uploads/old.png".into()).unwrap();

        let mut changed = fields("Fried rice");
        changed.description = None;
        changed.tags = vec![];
        let updated = store.update(&created.id, changed, None).unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Fried rice");
        assert_eq!(updated.description, None);
        assert!(updated.tags.is_empty());
        assert_eq!(updated.image, "/uploads/old.png");
        assert_eq!(updated.created_at, created.created_at);

        let replaced = store
            .update(&created.id, fields("Fried rice"), Some("/uploads/new.png".into()))
            .unwrap()
            .unwrap();
        assert_eq!(replaced.image, "/uploads/new.png");
    }

    #[test]
    fn delete_removes_document() {
        let store = RecipeStore::open(":memory:").unwrap();
        let created = store.insert(fields("Rice"), String::new()).unwrap();

        assert!(store.exists(&created.id).unwrap());
        assert!(store.delete(&created.id).unwrap());
        assert!(store.get(&created.id).unwrap().is_none());
        assert!(!store.exists(&created.id).unwrap());
        assert!(!store.delete(&created.id).unwrap());
    }

    #[test]
    fn close_reports_shared_handles() {
        let store = RecipeStore::open(":memory:").unwrap();
        let other = store.clone();
        assert!(!store.close().unwrap());
        assert!(other.close().unwrap());
    }
}
