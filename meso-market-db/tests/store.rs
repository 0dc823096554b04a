use meso_market_catalog::slug::slugify;
use meso_market_catalog::types::*;
use meso_market_db::{SqliteStore, StoreBackend, StoreError};

fn store() -> SqliteStore {
    SqliteStore::open_memory().unwrap()
}

fn test_item(name: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        game: String::new(),
        category: String::new(),
        platform: "PC,Xbox".to_string(),
        price: 19.99,
        quantity: 1,
        gold_price: String::new(),
        image: String::new(),
        rarity: String::new(),
        description: String::new(),
        url: slugify(name),
        is_featured: false,
        sort_order: 0,
    }
}

fn test_game(name: &str) -> NewGame {
    NewGame {
        name: name.to_string(),
        display_name: name.to_string(),
        gold_rate: 0.0,
        supported_platforms: vec!["PC".to_string()],
    }
}

fn test_post(title: &str, category: &str) -> NewBlogPost {
    NewBlogPost {
        title: title.to_string(),
        excerpt: String::new(),
        content: "body".to_string(),
        author: "admin".to_string(),
        category: category.to_string(),
        tags: vec!["news".to_string()],
        image: String::new(),
        published: true,
        views: 0,
        reading_time: 3,
    }
}

// ── Lookups ─────────────────────────────────────────────────────────────────

#[test]
fn absent_ids_read_as_none() {
    let store = store();
    assert!(store.get_item("nope").unwrap().is_none());
    assert!(store.get_game("nope").unwrap().is_none());
    assert!(store.get_game_by_name("nope").unwrap().is_none());
    assert!(store.get_category("nope").unwrap().is_none());
    assert!(store.get_rarity_by_name("nope").unwrap().is_none());
    assert!(store.get_blog_post("nope").unwrap().is_none());
    assert!(store.get_social_contact("nope").unwrap().is_none());
}

// ── Items ───────────────────────────────────────────────────────────────────

#[test]
fn create_assigns_id_and_timestamps() {
    let store = store();
    let item = store.create_item(&test_item("Fire Sword")).unwrap();
    assert!(!item.id.is_empty());
    assert!(!item.created_at.is_empty());
    assert_eq!(item.created_at, item.updated_at);
    assert_eq!(item.name, "Fire Sword");
    assert_eq!(item.url, "fire-sword");
}

#[test]
fn listing_orders_featured_then_sort_then_recency() {
    let store = store();
    let plain = store.create_item(&test_item("plain")).unwrap();
    let featured = store
        .create_item(&NewItem {
            is_featured: true,
            ..test_item("featured")
        })
        .unwrap();
    let high_sort = store
        .create_item(&NewItem {
            sort_order: 5,
            ..test_item("high sort")
        })
        .unwrap();
    let newer = store.create_item(&test_item("newer")).unwrap();

    // Pin created_at so the recency tiebreak is deterministic.
    store
        .connection()
        .execute(
            "UPDATE items SET created_at = '2026-01-01T00:00:00.000Z' WHERE id = ?1",
            [&plain.id],
        )
        .unwrap();
    store
        .connection()
        .execute(
            "UPDATE items SET created_at = '2026-02-01T00:00:00.000Z' WHERE id = ?1",
            [&newer.id],
        )
        .unwrap();

    let names: Vec<String> = store.list_items().unwrap().into_iter().map(|i| i.name).collect();
    assert_eq!(names, ["featured", "high sort", "newer", "plain"]);
    assert_eq!(featured.name, "featured");
    assert_eq!(high_sort.sort_order, 5);
}

#[test]
fn featured_beats_sort_order_beats_recency() {
    let store = store();
    // (featured, sort_order, created_at): an unfeatured item with a higher
    // sort_order must still rank below both featured items, and recency only
    // breaks the tie between the two otherwise-equal featured ones.
    let specs = [
        ("older featured", true, 5, "2026-01-01T00:00:00.000Z"),
        ("high sort", false, 9, "2026-01-02T00:00:00.000Z"),
        ("newer featured", true, 5, "2026-01-03T00:00:00.000Z"),
    ];
    for (name, is_featured, sort_order, created_at) in specs {
        let item = store
            .create_item(&NewItem {
                is_featured,
                sort_order,
                ..test_item(name)
            })
            .unwrap();
        store
            .connection()
            .execute(
                "UPDATE items SET created_at = ?1 WHERE id = ?2",
                [created_at, item.id.as_str()],
            )
            .unwrap();
    }

    let names: Vec<String> = store.list_items().unwrap().into_iter().map(|i| i.name).collect();
    assert_eq!(names, ["newer featured", "older featured", "high sort"]);
}

#[test]
fn update_writes_only_present_fields() {
    let store = store();
    let item = store.create_item(&test_item("Fire Sword")).unwrap();

    let updated = store
        .update_item(
            &item.id,
            &ItemPatch {
                price: Some(25.0),
                ..ItemPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.price, 25.0);
    assert_eq!(updated.name, "Fire Sword");
    assert_eq!(updated.platform, "PC,Xbox");
    assert_eq!(updated.quantity, 1);
    assert_eq!(updated.created_at, item.created_at);
}

#[test]
fn zero_false_and_empty_are_real_updates() {
    let store = store();
    let item = store
        .create_item(&NewItem {
            is_featured: true,
            sort_order: 9,
            description: "old".to_string(),
            ..test_item("Fire Sword")
        })
        .unwrap();

    let updated = store
        .update_item(
            &item.id,
            &ItemPatch {
                price: Some(0.0),
                quantity: Some(0),
                is_featured: Some(false),
                description: Some(String::new()),
                ..ItemPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.price, 0.0);
    assert_eq!(updated.quantity, 0);
    assert!(!updated.is_featured);
    assert_eq!(updated.description, "");
}

#[test]
fn update_missing_item_is_not_found() {
    let store = store();
    let err = store
        .update_item("ghost", &ItemPatch::default())
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "item", .. }));
}

#[test]
fn delete_is_an_idempotent_no_op() {
    let store = store();
    let item = store.create_item(&test_item("Fire Sword")).unwrap();
    store.delete_item(&item.id).unwrap();
    assert!(store.get_item(&item.id).unwrap().is_none());
    // Deleting again succeeds silently.
    store.delete_item(&item.id).unwrap();
    store.delete_item("never-existed").unwrap();
}

#[test]
fn dangling_name_references_are_rejected() {
    let store = store();
    let err = store
        .create_item(&NewItem {
            game: "no-such-game".to_string(),
            ..test_item("Fire Sword")
        })
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::UnknownReference { field: "game", .. }
    ));

    let item = store.create_item(&test_item("Fire Sword")).unwrap();
    let err = store
        .update_item(
            &item.id,
            &ItemPatch {
                rarity: Some("mythic".to_string()),
                ..ItemPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::UnknownReference { field: "rarity", .. }
    ));
}

#[test]
fn empty_references_mean_no_relation() {
    let store = store();
    // All three reference fields empty: valid, nothing to check.
    let item = store.create_item(&test_item("Fire Sword")).unwrap();
    assert_eq!(item.game, "");
    assert_eq!(item.category, "");
    assert_eq!(item.rarity, "");
}

#[test]
fn empty_platform_reads_as_pc() {
    let store = store();
    let item = store
        .create_item(&NewItem {
            platform: String::new(),
            ..test_item("Fire Sword")
        })
        .unwrap();
    assert_eq!(item.platform, "PC");
}

// ── Games ───────────────────────────────────────────────────────────────────

#[test]
fn game_platforms_round_trip_as_a_list() {
    let store = store();
    let game = store
        .create_game(&NewGame {
            supported_platforms: vec!["PC".to_string(), "Xbox".to_string(), "PS5".to_string()],
            ..test_game("maplestory")
        })
        .unwrap();
    assert_eq!(game.supported_platforms, ["PC", "Xbox", "PS5"]);

    let raw: String = store
        .connection()
        .query_row(
            "SELECT supported_platforms FROM games WHERE id = ?1",
            [&game.id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(raw, "PC,Xbox,PS5");

    let updated = store
        .update_game(
            &game.id,
            &GamePatch {
                supported_platforms: Some(vec!["NS".to_string()]),
                ..GamePatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.supported_platforms, ["NS"]);
    assert_eq!(updated.name, "maplestory");
}

#[test]
fn game_lookup_by_name() {
    let store = store();
    store.create_game(&test_game("maplestory")).unwrap();
    let found = store.get_game_by_name("maplestory").unwrap().unwrap();
    assert_eq!(found.display_name, "maplestory");
    assert!(store.get_game_by_name("wow").unwrap().is_none());
}

// ── Game Categories ─────────────────────────────────────────────────────────

#[test]
fn game_categories_scope_to_their_game() {
    let store = store();
    let maple = store.create_game(&test_game("maplestory")).unwrap();
    let dungeon = store.create_game(&test_game("dungeonfighter")).unwrap();

    for (game_id, name, sort_order) in [
        (&maple.id, "weapons", 2),
        (&maple.id, "armor", 1),
        (&dungeon.id, "avatars", 1),
    ] {
        store
            .create_game_category(&NewGameCategory {
                game_id: game_id.clone(),
                name: name.to_string(),
                display_name: name.to_string(),
                description: None,
                sort_order,
            })
            .unwrap();
    }

    let maple_cats: Vec<String> = store
        .list_game_categories(Some(&maple.id))
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(maple_cats, ["armor", "weapons"]);

    let all = store.list_game_categories(None).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn game_category_requires_existing_game() {
    let store = store();
    let err = store
        .create_game_category(&NewGameCategory {
            game_id: "no-such-game".to_string(),
            name: "weapons".to_string(),
            display_name: "Weapons".to_string(),
            description: None,
            sort_order: 0,
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Sqlite(_)));
}

// ── Blog ────────────────────────────────────────────────────────────────────

#[test]
fn blog_post_carries_its_category_name() {
    let store = store();
    store
        .create_blog_category(&NewBlogCategory {
            name: "guides".to_string(),
            display_name: "Guides".to_string(),
            description: None,
        })
        .unwrap();

    let post = store.create_blog_post(&test_post("Boss guide", "guides")).unwrap();
    assert_eq!(post.category, "guides");
    assert_eq!(post.tags, ["news"]);

    // No category is a valid state and reads back as an empty name.
    let uncategorized = store.create_blog_post(&test_post("Patch notes", "")).unwrap();
    assert_eq!(uncategorized.category, "");

    // An unknown category name is rejected rather than silently dropped.
    let err = store
        .create_blog_post(&test_post("Lost", "no-such-category"))
        .unwrap_err();
    assert!(matches!(err, StoreError::UnknownReference { .. }));
}

#[test]
fn blog_post_category_can_be_cleared() {
    let store = store();
    store
        .create_blog_category(&NewBlogCategory {
            name: "guides".to_string(),
            display_name: "Guides".to_string(),
            description: None,
        })
        .unwrap();
    let post = store.create_blog_post(&test_post("Boss guide", "guides")).unwrap();

    let updated = store
        .update_blog_post(
            &post.id,
            &BlogPostPatch {
                category: Some(String::new()),
                ..BlogPostPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.category, "");
    assert_eq!(updated.title, "Boss guide");
}

#[test]
fn blog_posts_list_newest_first() {
    let store = store();
    let old = store.create_blog_post(&test_post("old", "")).unwrap();
    let new = store.create_blog_post(&test_post("new", "")).unwrap();
    store
        .connection()
        .execute(
            "UPDATE blog_posts SET created_at = '2026-01-01T00:00:00.000Z' WHERE id = ?1",
            [&old.id],
        )
        .unwrap();
    store
        .connection()
        .execute(
            "UPDATE blog_posts SET created_at = '2026-02-01T00:00:00.000Z' WHERE id = ?1",
            [&new.id],
        )
        .unwrap();

    let titles: Vec<String> = store
        .list_blog_posts()
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, ["new", "old"]);
}

#[test]
fn view_counter_increments() {
    let store = store();
    let post = store.create_blog_post(&test_post("Boss guide", "")).unwrap();
    assert_eq!(post.views, 0);

    store.increment_blog_post_views(&post.id).unwrap();
    store.increment_blog_post_views(&post.id).unwrap();
    let read = store.get_blog_post(&post.id).unwrap().unwrap();
    assert_eq!(read.views, 2);

    let err = store.increment_blog_post_views("ghost").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

// ── Social Contacts ─────────────────────────────────────────────────────────

#[test]
fn active_contacts_filter_and_order() {
    let store = store();
    for (platform, is_active, sort_order) in [
        ("discord", true, 2),
        ("telegram", true, 1),
        ("twitter", false, 3),
    ] {
        store
            .create_social_contact(&NewSocialContact {
                platform: platform.to_string(),
                username: platform.to_string(),
                url: String::new(),
                is_active,
                sort_order,
            })
            .unwrap();
    }

    let active: Vec<String> = store
        .list_active_social_contacts()
        .unwrap()
        .into_iter()
        .map(|c| c.platform)
        .collect();
    assert_eq!(active, ["telegram", "discord"]);

    let all = store.list_social_contacts().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].platform, "twitter");
}

// ── Base Data ───────────────────────────────────────────────────────────────

#[test]
fn base_data_seeds_exactly_once() {
    let store = store();
    store.initialize_base_data().unwrap();

    let rarities: Vec<String> = store
        .list_rarities()
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(rarities.len(), 4);
    assert!(rarities.contains(&"common".to_string()));
    assert!(rarities.contains(&"legendary".to_string()));

    let contacts = store.list_social_contacts().unwrap();
    assert_eq!(contacts.len(), 4);
    assert_eq!(contacts[0].platform, "telegram");

    // Second run must not duplicate anything.
    store.initialize_base_data().unwrap();
    assert_eq!(store.list_rarities().unwrap().len(), 4);
    assert_eq!(store.list_social_contacts().unwrap().len(), 4);
}

#[test]
fn seeded_rarities_keep_their_colors() {
    let store = store();
    store.initialize_base_data().unwrap();
    let rare = store.get_rarity_by_name("rare").unwrap().unwrap();
    assert_eq!(rare.color, "#3b82f6");
    assert_eq!(rare.display_name, "Rare");
}

// ── End to End ──────────────────────────────────────────────────────────────

#[test]
fn storefront_listing_flow() {
    let store = store();
    store.initialize_base_data().unwrap();

    store
        .create_game(&NewGame {
            name: "maplestory".to_string(),
            display_name: "MapleStory".to_string(),
            gold_rate: 0.0,
            supported_platforms: vec!["PC".to_string(), "Android".to_string()],
        })
        .unwrap();
    store
        .create_category(&NewCategory {
            name: "weapon".to_string(),
            display_name: "Weapon".to_string(),
            description: None,
        })
        .unwrap();

    let sword = store
        .create_item(&NewItem {
            name: "Fire Sword".to_string(),
            game: "maplestory".to_string(),
            category: "weapon".to_string(),
            platform: "PC,Android".to_string(),
            price: 9.99,
            quantity: 1,
            gold_price: String::new(),
            image: "⚔️".to_string(),
            rarity: "rare".to_string(),
            description: String::new(),
            url: "fire-sword".to_string(),
            is_featured: false,
            sort_order: 0,
        })
        .unwrap();

    let listing = store.list_items().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].id, sword.id);
    assert_eq!(listing[0].game, "maplestory");
    // The platform string is stored and returned verbatim, never split.
    assert_eq!(listing[0].platform, "PC,Android");
    assert_eq!(listing[0].rarity, "rare");

    let discounted = store
        .update_item(
            &sword.id,
            &ItemPatch {
                price: Some(7.99),
                ..ItemPatch::default()
            },
        )
        .unwrap();
    assert_eq!(discounted.price, 7.99);
    assert_eq!(discounted.platform, "PC,Android");

    store.delete_item(&sword.id).unwrap();
    assert!(store.list_items().unwrap().is_empty());
}
