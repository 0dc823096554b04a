//! Embedded SQLite implementation of [`StoreBackend`].
//!
//! Rows are stored in a table per entity; ids are UUID v4 strings and
//! timestamps are ISO-8601 with millisecond precision, both assigned here.
//! Name references (item game/category/rarity, blog post category) are
//! validated on write and flattened back to plain names on read.

use chrono::Utc;
use meso_market_catalog::platform::{join_platforms, split_platforms};
use meso_market_catalog::types::*;
use rusqlite::types::ToSql;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::schema;
use crate::store::{StoreBackend, StoreError};

/// Marker key in `store_meta` set once base data has been seeded.
const SEED_MARKER: &str = "base_data_seeded";

/// Rarity tiers seeded on first run: (name, display_name, color).
const DEFAULT_RARITIES: &[(&str, &str, &str)] = &[
    ("common", "Common", "#9ca3af"),
    ("rare", "Rare", "#3b82f6"),
    ("epic", "Epic", "#a855f7"),
    ("legendary", "Legendary", "#f59e0b"),
];

/// Social channels seeded on first run: (platform, username, url, sort_order).
const DEFAULT_CONTACTS: &[(&str, &str, &str, i64)] = &[
    ("telegram", "@treasurehunter", "https://t.me/treasurehunter", 1),
    ("discord", "treasurehunter", "https://discord.gg/treasurehunter", 2),
    ("whatsapp", "+1234567890", "https://wa.me/1234567890", 3),
    (
        "email",
        "contact@treasurehunter.com",
        "mailto:contact@treasurehunter.com",
        4,
    ),
];

const ITEM_COLUMNS: &str = "id, name, game, category, platform, price, quantity, gold_price, \
     image, rarity, description, url, is_featured, sort_order, created_at, updated_at";

const BLOG_POST_COLUMNS: &str = "bp.id, bp.title, bp.excerpt, bp.content, bp.author, \
     COALESCE(bc.name, ''), bp.tags, bp.image, bp.published, bp.created_at, bp.updated_at, \
     bp.views, bp.reading_time";

/// SQLite-backed store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: &std::path::Path) -> Result<Self, StoreError> {
        Ok(Self {
            conn: schema::open_database(path)?,
        })
    }

    /// Open an in-memory store with the full schema. Useful for testing.
    pub fn open_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: schema::open_memory()?,
        })
    }

    /// The underlying connection, for raw queries.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    fn now() -> String {
        Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    /// Reject a non-empty name that doesn't match any row in `table`.
    /// Empty string means "no reference" and always passes.
    fn ensure_named_reference(
        &self,
        table: &str,
        field: &'static str,
        name: &str,
    ) -> Result<(), StoreError> {
        if name.is_empty() {
            return Ok(());
        }
        let exists: bool = self.conn.query_row(
            &format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE name = ?1)"),
            params![name],
            |row| row.get(0),
        )?;
        if exists {
            Ok(())
        } else {
            Err(StoreError::UnknownReference {
                field,
                value: name.to_string(),
            })
        }
    }

    fn check_item_references(
        &self,
        game: Option<&str>,
        category: Option<&str>,
        rarity: Option<&str>,
    ) -> Result<(), StoreError> {
        if let Some(game) = game {
            self.ensure_named_reference("games", "game", game)?;
        }
        if let Some(category) = category {
            self.ensure_named_reference("categories", "category", category)?;
        }
        if let Some(rarity) = rarity {
            self.ensure_named_reference("rarities", "rarity", rarity)?;
        }
        Ok(())
    }

    /// Resolve a blog category name to its id. Empty string resolves to
    /// `None` (no category); an unknown non-empty name is rejected.
    fn resolve_blog_category(&self, name: &str) -> Result<Option<String>, StoreError> {
        if name.is_empty() {
            return Ok(None);
        }
        let result = self.conn.query_row(
            "SELECT id FROM blog_categories WHERE name = ?1",
            params![name],
            |row| row.get::<_, String>(0),
        );
        match result {
            Ok(id) => Ok(Some(id)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(StoreError::UnknownReference {
                field: "blog category",
                value: name.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn reread<T>(
        &self,
        entity: &'static str,
        id: &str,
        get: impl Fn(&Self, &str) -> Result<Option<T>, StoreError>,
    ) -> Result<T, StoreError> {
        get(self, id)?.ok_or_else(|| StoreError::NotFound {
            entity,
            id: id.to_string(),
        })
    }
}

/// Collects `column = ?n` assignments for the fields actually present in a
/// patch, so absent fields are never written and zero/false/empty-string
/// updates are applied like any other value.
struct PatchBuilder {
    assignments: Vec<String>,
    values: Vec<Box<dyn ToSql>>,
}

impl PatchBuilder {
    fn new() -> Self {
        Self {
            assignments: Vec::new(),
            values: Vec::new(),
        }
    }

    fn set<T: ToSql + 'static>(&mut self, column: &str, value: T) {
        self.values.push(Box::new(value));
        self.assignments
            .push(format!("{column} = ?{}", self.values.len()));
    }

    /// Run the UPDATE against `table`, returning the number of rows changed.
    ///
    /// An all-absent patch performs no write but still reports whether the
    /// row exists, so the caller's not-found handling stays uniform.
    fn apply(mut self, conn: &Connection, table: &str, id: &str) -> rusqlite::Result<usize> {
        if self.assignments.is_empty() {
            let exists: bool = conn.query_row(
                &format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?1)"),
                params![id],
                |row| row.get(0),
            )?;
            return Ok(usize::from(exists));
        }
        self.values.push(Box::new(id.to_string()));
        let sql = format!(
            "UPDATE {table} SET {} WHERE id = ?{}",
            self.assignments.join(", "),
            self.values.len()
        );
        let bound: Vec<&dyn ToSql> = self.values.iter().map(|v| v.as_ref()).collect();
        conn.execute(&sql, bound.as_slice())
    }
}

impl StoreBackend for SqliteStore {
    fn initialize_base_data(&self) -> Result<(), StoreError> {
        let seeded: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM store_meta WHERE key = ?1)",
            params![SEED_MARKER],
            |row| row.get(0),
        )?;
        if seeded {
            log::debug!("base data already seeded");
            return Ok(());
        }

        for (name, display_name, color) in DEFAULT_RARITIES {
            self.conn.execute(
                "INSERT OR IGNORE INTO rarities (id, name, display_name, color, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![Self::new_id(), name, display_name, color, Self::now()],
            )?;
        }
        for (platform, username, url, sort_order) in DEFAULT_CONTACTS {
            let now = Self::now();
            self.conn.execute(
                "INSERT INTO social_contacts
                     (id, platform, username, url, is_active, sort_order, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, 1, ?5, ?6, ?6)",
                params![Self::new_id(), platform, username, url, sort_order, now],
            )?;
        }
        self.conn.execute(
            "INSERT INTO store_meta (key, value) VALUES (?1, ?2)",
            params![SEED_MARKER, Self::now()],
        )?;
        log::info!(
            "seeded base data: {} rarities, {} social contacts",
            DEFAULT_RARITIES.len(),
            DEFAULT_CONTACTS.len()
        );
        Ok(())
    }

    // ── Items ───────────────────────────────────────────────────────────────

    fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ITEM_COLUMNS} FROM items
             ORDER BY is_featured DESC, sort_order DESC, created_at DESC"
        ))?;
        let rows = stmt.query_map([], row_to_item)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn get_item(&self, id: &str) -> Result<Option<Item>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1"))?;
        match stmt.query_row(params![id], row_to_item) {
            Ok(item) => Ok(Some(item)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_item(&self, item: &NewItem) -> Result<Item, StoreError> {
        self.check_item_references(
            Some(&item.game),
            Some(&item.category),
            Some(&item.rarity),
        )?;
        let id = Self::new_id();
        let now = Self::now();
        self.conn.execute(
            "INSERT INTO items (id, name, game, category, platform, price, quantity,
                 gold_price, image, rarity, description, url, is_featured, sort_order,
                 created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?15)",
            params![
                id,
                item.name,
                item.game,
                item.category,
                item.platform,
                item.price,
                item.quantity,
                item.gold_price,
                item.image,
                item.rarity,
                item.description,
                item.url,
                item.is_featured,
                item.sort_order,
                now,
            ],
        )?;
        self.reread("item", &id, Self::get_item)
    }

    fn update_item(&self, id: &str, patch: &ItemPatch) -> Result<Item, StoreError> {
        self.check_item_references(
            patch.game.as_deref(),
            patch.category.as_deref(),
            patch.rarity.as_deref(),
        )?;
        let mut update = PatchBuilder::new();
        if let Some(v) = &patch.name {
            update.set("name", v.clone());
        }
        if let Some(v) = &patch.game {
            update.set("game", v.clone());
        }
        if let Some(v) = &patch.category {
            update.set("category", v.clone());
        }
        if let Some(v) = &patch.platform {
            update.set("platform", v.clone());
        }
        if let Some(v) = patch.price {
            update.set("price", v);
        }
        if let Some(v) = patch.quantity {
            update.set("quantity", v);
        }
        if let Some(v) = &patch.gold_price {
            update.set("gold_price", v.clone());
        }
        if let Some(v) = &patch.image {
            update.set("image", v.clone());
        }
        if let Some(v) = &patch.rarity {
            update.set("rarity", v.clone());
        }
        if let Some(v) = &patch.description {
            update.set("description", v.clone());
        }
        if let Some(v) = &patch.url {
            update.set("url", v.clone());
        }
        if let Some(v) = patch.is_featured {
            update.set("is_featured", v);
        }
        if let Some(v) = patch.sort_order {
            update.set("sort_order", v);
        }
        update.set("updated_at", Self::now());
        let changed = update.apply(&self.conn, "items", id)?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "item",
                id: id.to_string(),
            });
        }
        self.reread("item", id, Self::get_item)
    }

    fn delete_item(&self, id: &str) -> Result<(), StoreError> {
        // Deleting a missing id is a no-op.
        self.conn
            .execute("DELETE FROM items WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ── Games ───────────────────────────────────────────────────────────────

    fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, display_name, gold_rate, supported_platforms, created_at
             FROM games ORDER BY created_at ASC",
        )?;
        let rows = stmt.query_map([], row_to_game)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn get_game(&self, id: &str) -> Result<Option<Game>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, display_name, gold_rate, supported_platforms, created_at
             FROM games WHERE id = ?1",
        )?;
        match stmt.query_row(params![id], row_to_game) {
            Ok(game) => Ok(Some(game)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn get_game_by_name(&self, name: &str) -> Result<Option<Game>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, display_name, gold_rate, supported_platforms, created_at
             FROM games WHERE name = ?1",
        )?;
        match stmt.query_row(params![name], row_to_game) {
            Ok(game) => Ok(Some(game)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_game(&self, game: &NewGame) -> Result<Game, StoreError> {
        let id = Self::new_id();
        self.conn.execute(
            "INSERT INTO games (id, name, display_name, gold_rate, supported_platforms, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id,
                game.name,
                game.display_name,
                game.gold_rate,
                join_platforms(&game.supported_platforms),
                Self::now(),
            ],
        )?;
        self.reread("game", &id, Self::get_game)
    }

    fn update_game(&self, id: &str, patch: &GamePatch) -> Result<Game, StoreError> {
        let mut update = PatchBuilder::new();
        if let Some(v) = &patch.name {
            update.set("name", v.clone());
        }
        if let Some(v) = &patch.display_name {
            update.set("display_name", v.clone());
        }
        if let Some(v) = patch.gold_rate {
            update.set("gold_rate", v);
        }
        if let Some(v) = &patch.supported_platforms {
            update.set("supported_platforms", join_platforms(v));
        }
        let changed = update.apply(&self.conn, "games", id)?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "game",
                id: id.to_string(),
            });
        }
        self.reread("game", id, Self::get_game)
    }

    fn delete_game(&self, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM games WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ── Categories ──────────────────────────────────────────────────────────

    fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, display_name, description, created_at
             FROM categories ORDER BY created_at ASC",
        )?;
        let rows = stmt.query_map([], row_to_category)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn get_category(&self, id: &str) -> Result<Option<Category>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, display_name, description, created_at
             FROM categories WHERE id = ?1",
        )?;
        match stmt.query_row(params![id], row_to_category) {
            Ok(category) => Ok(Some(category)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn get_category_by_name(&self, name: &str) -> Result<Option<Category>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, display_name, description, created_at
             FROM categories WHERE name = ?1",
        )?;
        match stmt.query_row(params![name], row_to_category) {
            Ok(category) => Ok(Some(category)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_category(&self, category: &NewCategory) -> Result<Category, StoreError> {
        let id = Self::new_id();
        self.conn.execute(
            "INSERT INTO categories (id, name, display_name, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                category.name,
                category.display_name,
                category.description,
                Self::now(),
            ],
        )?;
        self.reread("category", &id, Self::get_category)
    }

    fn update_category(&self, id: &str, patch: &CategoryPatch) -> Result<Category, StoreError> {
        let mut update = PatchBuilder::new();
        if let Some(v) = &patch.name {
            update.set("name", v.clone());
        }
        if let Some(v) = &patch.display_name {
            update.set("display_name", v.clone());
        }
        if let Some(v) = &patch.description {
            update.set("description", v.clone());
        }
        let changed = update.apply(&self.conn, "categories", id)?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "category",
                id: id.to_string(),
            });
        }
        self.reread("category", id, Self::get_category)
    }

    fn delete_category(&self, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM categories WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ── Game Categories ─────────────────────────────────────────────────────

    fn list_game_categories(
        &self,
        game_id: Option<&str>,
    ) -> Result<Vec<GameCategory>, StoreError> {
        let rows = match game_id {
            Some(game_id) => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, game_id, name, display_name, description, sort_order, created_at
                     FROM game_categories WHERE game_id = ?1 ORDER BY sort_order ASC",
                )?;
                let rows = stmt.query_map(params![game_id], row_to_game_category)?;
                rows.collect::<Result<Vec<_>, _>>()
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, game_id, name, display_name, description, sort_order, created_at
                     FROM game_categories ORDER BY sort_order ASC",
                )?;
                let rows = stmt.query_map([], row_to_game_category)?;
                rows.collect::<Result<Vec<_>, _>>()
            }
        };
        rows.map_err(Into::into)
    }

    fn get_game_category(&self, id: &str) -> Result<Option<GameCategory>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, game_id, name, display_name, description, sort_order, created_at
             FROM game_categories WHERE id = ?1",
        )?;
        match stmt.query_row(params![id], row_to_game_category) {
            Ok(category) => Ok(Some(category)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_game_category(
        &self,
        category: &NewGameCategory,
    ) -> Result<GameCategory, StoreError> {
        let id = Self::new_id();
        self.conn.execute(
            "INSERT INTO game_categories
                 (id, game_id, name, display_name, description, sort_order, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                id,
                category.game_id,
                category.name,
                category.display_name,
                category.description,
                category.sort_order,
                Self::now(),
            ],
        )?;
        self.reread("game category", &id, Self::get_game_category)
    }

    fn update_game_category(
        &self,
        id: &str,
        patch: &GameCategoryPatch,
    ) -> Result<GameCategory, StoreError> {
        let mut update = PatchBuilder::new();
        if let Some(v) = &patch.game_id {
            update.set("game_id", v.clone());
        }
        if let Some(v) = &patch.name {
            update.set("name", v.clone());
        }
        if let Some(v) = &patch.display_name {
            update.set("display_name", v.clone());
        }
        if let Some(v) = &patch.description {
            update.set("description", v.clone());
        }
        if let Some(v) = patch.sort_order {
            update.set("sort_order", v);
        }
        let changed = update.apply(&self.conn, "game_categories", id)?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "game category",
                id: id.to_string(),
            });
        }
        self.reread("game category", id, Self::get_game_category)
    }

    fn delete_game_category(&self, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM game_categories WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ── Rarities ────────────────────────────────────────────────────────────

    fn list_rarities(&self) -> Result<Vec<Rarity>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, display_name, color, created_at
             FROM rarities ORDER BY created_at ASC",
        )?;
        let rows = stmt.query_map([], row_to_rarity)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn get_rarity(&self, id: &str) -> Result<Option<Rarity>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, display_name, color, created_at FROM rarities WHERE id = ?1",
        )?;
        match stmt.query_row(params![id], row_to_rarity) {
            Ok(rarity) => Ok(Some(rarity)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn get_rarity_by_name(&self, name: &str) -> Result<Option<Rarity>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, display_name, color, created_at FROM rarities WHERE name = ?1",
        )?;
        match stmt.query_row(params![name], row_to_rarity) {
            Ok(rarity) => Ok(Some(rarity)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_rarity(&self, rarity: &NewRarity) -> Result<Rarity, StoreError> {
        let id = Self::new_id();
        self.conn.execute(
            "INSERT INTO rarities (id, name, display_name, color, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                rarity.name,
                rarity.display_name,
                rarity.color,
                Self::now()
            ],
        )?;
        self.reread("rarity", &id, Self::get_rarity)
    }

    fn update_rarity(&self, id: &str, patch: &RarityPatch) -> Result<Rarity, StoreError> {
        let mut update = PatchBuilder::new();
        if let Some(v) = &patch.name {
            update.set("name", v.clone());
        }
        if let Some(v) = &patch.display_name {
            update.set("display_name", v.clone());
        }
        if let Some(v) = &patch.color {
            update.set("color", v.clone());
        }
        let changed = update.apply(&self.conn, "rarities", id)?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "rarity",
                id: id.to_string(),
            });
        }
        self.reread("rarity", id, Self::get_rarity)
    }

    fn delete_rarity(&self, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM rarities WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ── Blog Posts ──────────────────────────────────────────────────────────

    fn list_blog_posts(&self) -> Result<Vec<BlogPost>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {BLOG_POST_COLUMNS} FROM blog_posts bp
             LEFT JOIN blog_categories bc ON bc.id = bp.category_id
             ORDER BY bp.created_at DESC"
        ))?;
        let rows = stmt.query_map([], row_to_blog_post)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn get_blog_post(&self, id: &str) -> Result<Option<BlogPost>, StoreError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {BLOG_POST_COLUMNS} FROM blog_posts bp
             LEFT JOIN blog_categories bc ON bc.id = bp.category_id
             WHERE bp.id = ?1"
        ))?;
        match stmt.query_row(params![id], row_to_blog_post) {
            Ok(post) => Ok(Some(post)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_blog_post(&self, post: &NewBlogPost) -> Result<BlogPost, StoreError> {
        let category_id = self.resolve_blog_category(&post.category)?;
        let id = Self::new_id();
        let now = Self::now();
        let tags = serde_json::to_string(&post.tags).unwrap_or_else(|_| "[]".to_string());
        self.conn.execute(
            "INSERT INTO blog_posts (id, title, excerpt, content, author, category_id,
                 tags, image, published, views, reading_time, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)",
            params![
                id,
                post.title,
                post.excerpt,
                post.content,
                post.author,
                category_id,
                tags,
                post.image,
                post.published,
                post.views,
                post.reading_time,
                now,
            ],
        )?;
        self.reread("blog post", &id, Self::get_blog_post)
    }

    fn update_blog_post(&self, id: &str, patch: &BlogPostPatch) -> Result<BlogPost, StoreError> {
        let mut update = PatchBuilder::new();
        if let Some(v) = &patch.title {
            update.set("title", v.clone());
        }
        if let Some(v) = &patch.excerpt {
            update.set("excerpt", v.clone());
        }
        if let Some(v) = &patch.content {
            update.set("content", v.clone());
        }
        if let Some(v) = &patch.author {
            update.set("author", v.clone());
        }
        if let Some(v) = &patch.category {
            // Empty string clears the category relation.
            update.set("category_id", self.resolve_blog_category(v)?);
        }
        if let Some(v) = &patch.tags {
            update.set(
                "tags",
                serde_json::to_string(v).unwrap_or_else(|_| "[]".to_string()),
            );
        }
        if let Some(v) = &patch.image {
            update.set("image", v.clone());
        }
        if let Some(v) = patch.published {
            update.set("published", v);
        }
        if let Some(v) = patch.views {
            update.set("views", v);
        }
        if let Some(v) = patch.reading_time {
            update.set("reading_time", v);
        }
        update.set("updated_at", Self::now());
        let changed = update.apply(&self.conn, "blog_posts", id)?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "blog post",
                id: id.to_string(),
            });
        }
        self.reread("blog post", id, Self::get_blog_post)
    }

    fn delete_blog_post(&self, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM blog_posts WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn increment_blog_post_views(&self, id: &str) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE blog_posts SET views = views + 1 WHERE id = ?1",
            params![id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "blog post",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    // ── Blog Categories ─────────────────────────────────────────────────────

    fn list_blog_categories(&self) -> Result<Vec<BlogCategory>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, display_name, description, created_at
             FROM blog_categories ORDER BY created_at ASC",
        )?;
        let rows = stmt.query_map([], row_to_blog_category)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn get_blog_category(&self, id: &str) -> Result<Option<BlogCategory>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, display_name, description, created_at
             FROM blog_categories WHERE id = ?1",
        )?;
        match stmt.query_row(params![id], row_to_blog_category) {
            Ok(category) => Ok(Some(category)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_blog_category(
        &self,
        category: &NewBlogCategory,
    ) -> Result<BlogCategory, StoreError> {
        let id = Self::new_id();
        self.conn.execute(
            "INSERT INTO blog_categories (id, name, display_name, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                category.name,
                category.display_name,
                category.description,
                Self::now(),
            ],
        )?;
        self.reread("blog category", &id, Self::get_blog_category)
    }

    fn update_blog_category(
        &self,
        id: &str,
        patch: &BlogCategoryPatch,
    ) -> Result<BlogCategory, StoreError> {
        let mut update = PatchBuilder::new();
        if let Some(v) = &patch.name {
            update.set("name", v.clone());
        }
        if let Some(v) = &patch.display_name {
            update.set("display_name", v.clone());
        }
        if let Some(v) = &patch.description {
            update.set("description", v.clone());
        }
        let changed = update.apply(&self.conn, "blog_categories", id)?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "blog category",
                id: id.to_string(),
            });
        }
        self.reread("blog category", id, Self::get_blog_category)
    }

    fn delete_blog_category(&self, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM blog_categories WHERE id = ?1", params![id])?;
        Ok(())
    }

    // ── Social Contacts ─────────────────────────────────────────────────────

    fn list_social_contacts(&self) -> Result<Vec<SocialContact>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, platform, username, url, is_active, sort_order, created_at, updated_at
             FROM social_contacts ORDER BY sort_order ASC",
        )?;
        let rows = stmt.query_map([], row_to_social_contact)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn list_active_social_contacts(&self) -> Result<Vec<SocialContact>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, platform, username, url, is_active, sort_order, created_at, updated_at
             FROM social_contacts WHERE is_active = 1 ORDER BY sort_order ASC",
        )?;
        let rows = stmt.query_map([], row_to_social_contact)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn get_social_contact(&self, id: &str) -> Result<Option<SocialContact>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, platform, username, url, is_active, sort_order, created_at, updated_at
             FROM social_contacts WHERE id = ?1",
        )?;
        match stmt.query_row(params![id], row_to_social_contact) {
            Ok(contact) => Ok(Some(contact)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_social_contact(
        &self,
        contact: &NewSocialContact,
    ) -> Result<SocialContact, StoreError> {
        let id = Self::new_id();
        let now = Self::now();
        self.conn.execute(
            "INSERT INTO social_contacts
                 (id, platform, username, url, is_active, sort_order, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            params![
                id,
                contact.platform,
                contact.username,
                contact.url,
                contact.is_active,
                contact.sort_order,
                now,
            ],
        )?;
        self.reread("social contact", &id, Self::get_social_contact)
    }

    fn update_social_contact(
        &self,
        id: &str,
        patch: &SocialContactPatch,
    ) -> Result<SocialContact, StoreError> {
        let mut update = PatchBuilder::new();
        if let Some(v) = &patch.platform {
            update.set("platform", v.clone());
        }
        if let Some(v) = &patch.username {
            update.set("username", v.clone());
        }
        if let Some(v) = &patch.url {
            update.set("url", v.clone());
        }
        if let Some(v) = patch.is_active {
            update.set("is_active", v);
        }
        if let Some(v) = patch.sort_order {
            update.set("sort_order", v);
        }
        update.set("updated_at", Self::now());
        let changed = update.apply(&self.conn, "social_contacts", id)?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "social contact",
                id: id.to_string(),
            });
        }
        self.reread("social contact", id, Self::get_social_contact)
    }

    fn delete_social_contact(&self, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM social_contacts WHERE id = ?1", params![id])?;
        Ok(())
    }
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    let platform: String = row.get(4)?;
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        game: row.get(2)?,
        category: row.get(3)?,
        // An item with no platform list defaults to PC for display.
        platform: if platform.is_empty() {
            "PC".to_string()
        } else {
            platform
        },
        price: row.get(5)?,
        quantity: row.get(6)?,
        gold_price: row.get(7)?,
        image: row.get(8)?,
        rarity: row.get(9)?,
        description: row.get(10)?,
        url: row.get(11)?,
        is_featured: row.get(12)?,
        sort_order: row.get(13)?,
        created_at: row.get(14)?,
        updated_at: row.get(15)?,
    })
}

fn row_to_game(row: &rusqlite::Row<'_>) -> rusqlite::Result<Game> {
    let platforms: String = row.get(4)?;
    Ok(Game {
        id: row.get(0)?,
        name: row.get(1)?,
        display_name: row.get(2)?,
        gold_rate: row.get(3)?,
        supported_platforms: split_platforms(&platforms),
        created_at: row.get(5)?,
    })
}

fn row_to_category(row: &rusqlite::Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        display_name: row.get(2)?,
        description: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn row_to_game_category(row: &rusqlite::Row<'_>) -> rusqlite::Result<GameCategory> {
    Ok(GameCategory {
        id: row.get(0)?,
        game_id: row.get(1)?,
        name: row.get(2)?,
        display_name: row.get(3)?,
        description: row.get(4)?,
        sort_order: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn row_to_rarity(row: &rusqlite::Row<'_>) -> rusqlite::Result<Rarity> {
    Ok(Rarity {
        id: row.get(0)?,
        name: row.get(1)?,
        display_name: row.get(2)?,
        color: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn row_to_blog_post(row: &rusqlite::Row<'_>) -> rusqlite::Result<BlogPost> {
    let tags: String = row.get(6)?;
    Ok(BlogPost {
        id: row.get(0)?,
        title: row.get(1)?,
        excerpt: row.get(2)?,
        content: row.get(3)?,
        author: row.get(4)?,
        category: row.get(5)?,
        tags: serde_json::from_str(&tags).unwrap_or_default(),
        image: row.get(7)?,
        published: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
        views: row.get(11)?,
        reading_time: row.get(12)?,
    })
}

fn row_to_blog_category(row: &rusqlite::Row<'_>) -> rusqlite::Result<BlogCategory> {
    Ok(BlogCategory {
        id: row.get(0)?,
        name: row.get(1)?,
        display_name: row.get(2)?,
        description: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn row_to_social_contact(row: &rusqlite::Row<'_>) -> rusqlite::Result<SocialContact> {
    Ok(SocialContact {
        id: row.get(0)?,
        platform: row.get(1)?,
        username: row.get(2)?,
        url: row.get(3)?,
        is_active: row.get(4)?,
        sort_order: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}
