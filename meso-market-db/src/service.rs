//! Storefront service facade.
//!
//! [`Storefront`] wraps a [`StoreBackend`] with the error policy the site
//! frontend expects: read failures are logged and degrade to an empty result
//! so public pages render with nothing rather than crash, while write
//! failures are logged and propagated so admin tooling can surface them.
//!
//! Construction runs [`StoreBackend::initialize_base_data`] before the value
//! is handed out, so a `Storefront` in scope is always fully initialized.

use meso_market_catalog::types::*;

use crate::config::StoreConfig;
use crate::sqlite::SqliteStore;
use crate::store::{StoreBackend, StoreError};

pub struct Storefront<S: StoreBackend> {
    backend: S,
}

impl Storefront<SqliteStore> {
    /// Open the embedded store described by `config` and seed base data.
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        Self::with_backend(SqliteStore::open(&config.db_path)?)
    }
}

impl<S: StoreBackend> Storefront<S> {
    /// Wrap an already-constructed backend, seeding base data first.
    pub fn with_backend(backend: S) -> Result<Self, StoreError> {
        backend.initialize_base_data()?;
        Ok(Self { backend })
    }

    /// The wrapped backend, for operations outside the facade's error policy.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn read_list<T>(result: Result<Vec<T>, StoreError>, what: &str) -> Vec<T> {
        result.unwrap_or_else(|e| {
            log::error!("failed to load {what}: {e}");
            Vec::new()
        })
    }

    fn read_one<T>(result: Result<Option<T>, StoreError>, what: &str) -> Option<T> {
        result.unwrap_or_else(|e| {
            log::error!("failed to load {what}: {e}");
            None
        })
    }

    fn write<T>(result: Result<T, StoreError>, what: &str) -> Result<T, StoreError> {
        result.inspect_err(|e| log::error!("failed to {what}: {e}"))
    }

    // ── Items ───────────────────────────────────────────────────────────────

    pub fn items(&self) -> Vec<Item> {
        Self::read_list(self.backend.list_items(), "items")
    }

    pub fn item(&self, id: &str) -> Option<Item> {
        Self::read_one(self.backend.get_item(id), "item")
    }

    pub fn create_item(&self, item: &NewItem) -> Result<Item, StoreError> {
        Self::write(self.backend.create_item(item), "create item")
    }

    pub fn update_item(&self, id: &str, patch: &ItemPatch) -> Result<Item, StoreError> {
        Self::write(self.backend.update_item(id, patch), "update item")
    }

    pub fn delete_item(&self, id: &str) -> Result<(), StoreError> {
        Self::write(self.backend.delete_item(id), "delete item")
    }

    // ── Games ───────────────────────────────────────────────────────────────

    pub fn games(&self) -> Vec<Game> {
        Self::read_list(self.backend.list_games(), "games")
    }

    pub fn game(&self, id: &str) -> Option<Game> {
        Self::read_one(self.backend.get_game(id), "game")
    }

    pub fn game_by_name(&self, name: &str) -> Option<Game> {
        Self::read_one(self.backend.get_game_by_name(name), "game")
    }

    pub fn create_game(&self, game: &NewGame) -> Result<Game, StoreError> {
        Self::write(self.backend.create_game(game), "create game")
    }

    pub fn update_game(&self, id: &str, patch: &GamePatch) -> Result<Game, StoreError> {
        Self::write(self.backend.update_game(id, patch), "update game")
    }

    pub fn delete_game(&self, id: &str) -> Result<(), StoreError> {
        Self::write(self.backend.delete_game(id), "delete game")
    }

    // ── Categories ──────────────────────────────────────────────────────────

    pub fn categories(&self) -> Vec<Category> {
        Self::read_list(self.backend.list_categories(), "categories")
    }

    pub fn category(&self, id: &str) -> Option<Category> {
        Self::read_one(self.backend.get_category(id), "category")
    }

    pub fn category_by_name(&self, name: &str) -> Option<Category> {
        Self::read_one(self.backend.get_category_by_name(name), "category")
    }

    pub fn create_category(&self, category: &NewCategory) -> Result<Category, StoreError> {
        Self::write(self.backend.create_category(category), "create category")
    }

    pub fn update_category(
        &self,
        id: &str,
        patch: &CategoryPatch,
    ) -> Result<Category, StoreError> {
        Self::write(self.backend.update_category(id, patch), "update category")
    }

    pub fn delete_category(&self, id: &str) -> Result<(), StoreError> {
        Self::write(self.backend.delete_category(id), "delete category")
    }

    // ── Game Categories ─────────────────────────────────────────────────────

    pub fn game_categories(&self, game_id: Option<&str>) -> Vec<GameCategory> {
        Self::read_list(
            self.backend.list_game_categories(game_id),
            "game categories",
        )
    }

    pub fn game_category(&self, id: &str) -> Option<GameCategory> {
        Self::read_one(self.backend.get_game_category(id), "game category")
    }

    pub fn create_game_category(
        &self,
        category: &NewGameCategory,
    ) -> Result<GameCategory, StoreError> {
        Self::write(
            self.backend.create_game_category(category),
            "create game category",
        )
    }

    pub fn update_game_category(
        &self,
        id: &str,
        patch: &GameCategoryPatch,
    ) -> Result<GameCategory, StoreError> {
        Self::write(
            self.backend.update_game_category(id, patch),
            "update game category",
        )
    }

    pub fn delete_game_category(&self, id: &str) -> Result<(), StoreError> {
        Self::write(
            self.backend.delete_game_category(id),
            "delete game category",
        )
    }

    // ── Rarities ────────────────────────────────────────────────────────────

    pub fn rarities(&self) -> Vec<Rarity> {
        Self::read_list(self.backend.list_rarities(), "rarities")
    }

    pub fn rarity(&self, id: &str) -> Option<Rarity> {
        Self::read_one(self.backend.get_rarity(id), "rarity")
    }

    pub fn rarity_by_name(&self, name: &str) -> Option<Rarity> {
        Self::read_one(self.backend.get_rarity_by_name(name), "rarity")
    }

    pub fn create_rarity(&self, rarity: &NewRarity) -> Result<Rarity, StoreError> {
        Self::write(self.backend.create_rarity(rarity), "create rarity")
    }

    pub fn update_rarity(&self, id: &str, patch: &RarityPatch) -> Result<Rarity, StoreError> {
        Self::write(self.backend.update_rarity(id, patch), "update rarity")
    }

    pub fn delete_rarity(&self, id: &str) -> Result<(), StoreError> {
        Self::write(self.backend.delete_rarity(id), "delete rarity")
    }

    // ── Blog ────────────────────────────────────────────────────────────────

    pub fn blog_posts(&self) -> Vec<BlogPost> {
        Self::read_list(self.backend.list_blog_posts(), "blog posts")
    }

    pub fn blog_post(&self, id: &str) -> Option<BlogPost> {
        Self::read_one(self.backend.get_blog_post(id), "blog post")
    }

    /// Fetch a post for display, bumping its view counter. The bump is
    /// best-effort; a failure there doesn't cost the reader the post.
    pub fn read_blog_post(&self, id: &str) -> Option<BlogPost> {
        let post = Self::read_one(self.backend.get_blog_post(id), "blog post")?;
        if let Err(e) = self.backend.increment_blog_post_views(&post.id) {
            log::error!("failed to bump views for blog post {}: {e}", post.id);
        }
        Some(post)
    }

    pub fn create_blog_post(&self, post: &NewBlogPost) -> Result<BlogPost, StoreError> {
        Self::write(self.backend.create_blog_post(post), "create blog post")
    }

    pub fn update_blog_post(
        &self,
        id: &str,
        patch: &BlogPostPatch,
    ) -> Result<BlogPost, StoreError> {
        Self::write(self.backend.update_blog_post(id, patch), "update blog post")
    }

    pub fn delete_blog_post(&self, id: &str) -> Result<(), StoreError> {
        Self::write(self.backend.delete_blog_post(id), "delete blog post")
    }

    pub fn blog_categories(&self) -> Vec<BlogCategory> {
        Self::read_list(self.backend.list_blog_categories(), "blog categories")
    }

    pub fn blog_category(&self, id: &str) -> Option<BlogCategory> {
        Self::read_one(self.backend.get_blog_category(id), "blog category")
    }

    pub fn create_blog_category(
        &self,
        category: &NewBlogCategory,
    ) -> Result<BlogCategory, StoreError> {
        Self::write(
            self.backend.create_blog_category(category),
            "create blog category",
        )
    }

    pub fn update_blog_category(
        &self,
        id: &str,
        patch: &BlogCategoryPatch,
    ) -> Result<BlogCategory, StoreError> {
        Self::write(
            self.backend.update_blog_category(id, patch),
            "update blog category",
        )
    }

    pub fn delete_blog_category(&self, id: &str) -> Result<(), StoreError> {
        Self::write(
            self.backend.delete_blog_category(id),
            "delete blog category",
        )
    }

    // ── Social Contacts ─────────────────────────────────────────────────────

    pub fn social_contacts(&self) -> Vec<SocialContact> {
        Self::read_list(self.backend.list_social_contacts(), "social contacts")
    }

    /// Active contacts only, for the public site footer.
    pub fn active_social_contacts(&self) -> Vec<SocialContact> {
        Self::read_list(
            self.backend.list_active_social_contacts(),
            "social contacts",
        )
    }

    pub fn social_contact(&self, id: &str) -> Option<SocialContact> {
        Self::read_one(self.backend.get_social_contact(id), "social contact")
    }

    pub fn create_social_contact(
        &self,
        contact: &NewSocialContact,
    ) -> Result<SocialContact, StoreError> {
        Self::write(
            self.backend.create_social_contact(contact),
            "create social contact",
        )
    }

    pub fn update_social_contact(
        &self,
        id: &str,
        patch: &SocialContactPatch,
    ) -> Result<SocialContact, StoreError> {
        Self::write(
            self.backend.update_social_contact(id, patch),
            "update social contact",
        )
    }

    pub fn delete_social_contact(&self, id: &str) -> Result<(), StoreError> {
        Self::write(
            self.backend.delete_social_contact(id),
            "delete social contact",
        )
    }
}
