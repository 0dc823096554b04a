//! The storage backend contract.
//!
//! [`StoreBackend`] is the complete capability set any storage backend must
//! provide, decoupling domain code from the concrete storage technology.
//! Only one implementation exists today ([`crate::sqlite::SqliteStore`]),
//! but call sites never name it directly.

use meso_market_catalog::types::*;
use thiserror::Error;

use crate::config::ConfigError;
use crate::schema::SchemaError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A name reference (item game/category/rarity, blog category) does not
    /// match any existing entity.
    #[error("unknown {field} reference '{value}'")]
    UnknownReference { field: &'static str, value: String },
    /// An update targeted an id that does not exist.
    #[error("{entity} not found: '{id}'")]
    NotFound { entity: &'static str, id: String },
}

/// Contract every storage backend implements.
///
/// Conventions, uniform across entities:
/// - `list_*` returns every row; ordering is backend-defined except for
///   items, which are always `is_featured DESC, sort_order DESC,
///   created_at DESC`.
/// - `get_*` returns `Ok(None)` when the id (or name) is absent; any other
///   failure is an `Err`. Callers rely on this to distinguish "absent" from
///   "broken".
/// - `create_*` assigns id and timestamps; name references are validated
///   and a dangling one is rejected with [`StoreError::UnknownReference`].
/// - `update_*` applies patch semantics: only `Some` fields change, and a
///   missing id is [`StoreError::NotFound`].
/// - `delete_*` is an idempotent no-op when the id is already gone.
pub trait StoreBackend {
    /// One-time first-run setup. For the embedded backend this seeds the
    /// default rarities and social contacts; guarded so repeat calls are
    /// no-ops.
    fn initialize_base_data(&self) -> Result<(), StoreError>;

    // Items
    fn list_items(&self) -> Result<Vec<Item>, StoreError>;
    fn get_item(&self, id: &str) -> Result<Option<Item>, StoreError>;
    fn create_item(&self, item: &NewItem) -> Result<Item, StoreError>;
    fn update_item(&self, id: &str, patch: &ItemPatch) -> Result<Item, StoreError>;
    fn delete_item(&self, id: &str) -> Result<(), StoreError>;

    // Games
    fn list_games(&self) -> Result<Vec<Game>, StoreError>;
    fn get_game(&self, id: &str) -> Result<Option<Game>, StoreError>;
    fn get_game_by_name(&self, name: &str) -> Result<Option<Game>, StoreError>;
    fn create_game(&self, game: &NewGame) -> Result<Game, StoreError>;
    fn update_game(&self, id: &str, patch: &GamePatch) -> Result<Game, StoreError>;
    fn delete_game(&self, id: &str) -> Result<(), StoreError>;

    // Categories (global)
    fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
    fn get_category(&self, id: &str) -> Result<Option<Category>, StoreError>;
    fn get_category_by_name(&self, name: &str) -> Result<Option<Category>, StoreError>;
    fn create_category(&self, category: &NewCategory) -> Result<Category, StoreError>;
    fn update_category(&self, id: &str, patch: &CategoryPatch) -> Result<Category, StoreError>;
    fn delete_category(&self, id: &str) -> Result<(), StoreError>;

    // Game categories (per-game)
    fn list_game_categories(&self, game_id: Option<&str>)
        -> Result<Vec<GameCategory>, StoreError>;
    fn get_game_category(&self, id: &str) -> Result<Option<GameCategory>, StoreError>;
    fn create_game_category(&self, category: &NewGameCategory)
        -> Result<GameCategory, StoreError>;
    fn update_game_category(
        &self,
        id: &str,
        patch: &GameCategoryPatch,
    ) -> Result<GameCategory, StoreError>;
    fn delete_game_category(&self, id: &str) -> Result<(), StoreError>;

    // Rarities
    fn list_rarities(&self) -> Result<Vec<Rarity>, StoreError>;
    fn get_rarity(&self, id: &str) -> Result<Option<Rarity>, StoreError>;
    fn get_rarity_by_name(&self, name: &str) -> Result<Option<Rarity>, StoreError>;
    fn create_rarity(&self, rarity: &NewRarity) -> Result<Rarity, StoreError>;
    fn update_rarity(&self, id: &str, patch: &RarityPatch) -> Result<Rarity, StoreError>;
    fn delete_rarity(&self, id: &str) -> Result<(), StoreError>;

    // Blog posts
    fn list_blog_posts(&self) -> Result<Vec<BlogPost>, StoreError>;
    fn get_blog_post(&self, id: &str) -> Result<Option<BlogPost>, StoreError>;
    fn create_blog_post(&self, post: &NewBlogPost) -> Result<BlogPost, StoreError>;
    fn update_blog_post(&self, id: &str, patch: &BlogPostPatch) -> Result<BlogPost, StoreError>;
    fn delete_blog_post(&self, id: &str) -> Result<(), StoreError>;
    /// Bump the view counter for a post that was just read.
    fn increment_blog_post_views(&self, id: &str) -> Result<(), StoreError>;

    // Blog categories
    fn list_blog_categories(&self) -> Result<Vec<BlogCategory>, StoreError>;
    fn get_blog_category(&self, id: &str) -> Result<Option<BlogCategory>, StoreError>;
    fn create_blog_category(&self, category: &NewBlogCategory)
        -> Result<BlogCategory, StoreError>;
    fn update_blog_category(
        &self,
        id: &str,
        patch: &BlogCategoryPatch,
    ) -> Result<BlogCategory, StoreError>;
    fn delete_blog_category(&self, id: &str) -> Result<(), StoreError>;

    // Social contacts
    fn list_social_contacts(&self) -> Result<Vec<SocialContact>, StoreError>;
    /// Active contacts only, in sort order — the public-site query shape.
    fn list_active_social_contacts(&self) -> Result<Vec<SocialContact>, StoreError>;
    fn get_social_contact(&self, id: &str) -> Result<Option<SocialContact>, StoreError>;
    fn create_social_contact(&self, contact: &NewSocialContact)
        -> Result<SocialContact, StoreError>;
    fn update_social_contact(
        &self,
        id: &str,
        patch: &SocialContactPatch,
    ) -> Result<SocialContact, StoreError>;
    fn delete_social_contact(&self, id: &str) -> Result<(), StoreError>;
}
