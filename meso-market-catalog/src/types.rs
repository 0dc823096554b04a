//! Data model types for the item storefront.
//!
//! These types represent the persistent store schema: items, games,
//! categories, rarities, blog content, and social contacts. Each entity comes
//! in three shapes: the full entity (as read back from the store), a `New*`
//! input (everything the caller supplies on create; the store assigns id and
//! timestamps), and a `*Patch` (partial update where every field is an
//! explicit-presence slot — `Some(0)`, `Some(false)`, and `Some("")` are real
//! updates, not omissions).

use serde::{Deserialize, Serialize};

// ── Item ────────────────────────────────────────────────────────────────────

/// A tradable virtual item listed in the storefront.
///
/// `game`, `category`, and `rarity` are name references into the matching
/// entities; empty string means the relation is absent. `platform` is the
/// raw comma-joined platform string (e.g. `"PC,Xbox"`) and is never
/// decomposed by the data layer — see [`crate::platform`] for the
/// presentation-side helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub game: String,
    pub category: String,
    pub platform: String,
    pub price: f64,
    pub quantity: i64,
    pub gold_price: String,
    /// Emoji literal, URL, or base64 data-URI.
    pub image: String,
    pub rarity: String,
    pub description: String,
    /// URL slug, derived from `name` (see [`crate::slug::slugify`]).
    /// Not guaranteed globally unique by the model.
    pub url: String,
    pub is_featured: bool,
    /// Higher sorts earlier.
    pub sort_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Item fields supplied on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub game: String,
    pub category: String,
    pub platform: String,
    pub price: f64,
    pub quantity: i64,
    pub gold_price: String,
    pub image: String,
    pub rarity: String,
    pub description: String,
    pub url: String,
    pub is_featured: bool,
    pub sort_order: i64,
}

/// Partial item update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub game: Option<String>,
    pub category: Option<String>,
    pub platform: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub gold_price: Option<String>,
    pub image: Option<String>,
    pub rarity: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i64>,
}

// ── Game ────────────────────────────────────────────────────────────────────

/// A supported game, keyed by an internal lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub display_name: String,
    /// Legacy exchange-rate field; kept for the storage shape, no longer
    /// surfaced in the UI.
    pub gold_rate: f64,
    /// Canonical list of platform tokens. Serialized as a comma-joined
    /// string only at the persistence edge.
    pub supported_platforms: Vec<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGame {
    pub name: String,
    pub display_name: String,
    pub gold_rate: f64,
    pub supported_platforms: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamePatch {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub gold_rate: Option<f64>,
    pub supported_platforms: Option<Vec<String>>,
}

// ── Category ────────────────────────────────────────────────────────────────

/// A global item category, independent of any game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
}

// ── Game Category ───────────────────────────────────────────────────────────

/// A per-game category namespace, owned by a [`Game`] via `game_id`.
///
/// Distinct from the global [`Category`] entity; the two are intentionally
/// not unified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameCategory {
    pub id: String,
    pub game_id: String,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub sort_order: i64,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameCategory {
    pub game_id: String,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub sort_order: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameCategoryPatch {
    pub game_id: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
}

// ── Rarity ──────────────────────────────────────────────────────────────────

/// An item rarity tier with a display color hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rarity {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub color: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRarity {
    pub name: String,
    pub display_name: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RarityPatch {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub color: Option<String>,
}

// ── Blog ────────────────────────────────────────────────────────────────────

/// A blog post. `category` is the flat blog-category name, empty when the
/// relation is absent. `views` is incremented on read; `reading_time` is
/// precomputed minutes, not derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub published: bool,
    pub created_at: String,
    pub updated_at: String,
    pub views: i64,
    pub reading_time: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub published: bool,
    pub views: i64,
    pub reading_time: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    pub published: Option<bool>,
    pub views: Option<i64>,
    pub reading_time: Option<i64>,
}

/// A blog post category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlogCategory {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogCategoryPatch {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
}

// ── Social Contact ──────────────────────────────────────────────────────────

/// A social channel shown on the storefront (telegram, discord, whatsapp,
/// email, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialContact {
    pub id: String,
    pub platform: String,
    pub username: String,
    pub url: String,
    pub is_active: bool,
    pub sort_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSocialContact {
    pub platform: String,
    pub username: String,
    pub url: String,
    pub is_active: bool,
    pub sort_order: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialContactPatch {
    pub platform: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}
