use meso_market_catalog::slugify;

#[test]
fn basic_name() {
    assert_eq!(slugify("Fire Sword"), "fire-sword");
}

#[test]
fn strips_special_characters() {
    assert_eq!(slugify("Dragon's Claw +7!"), "dragons-claw-7");
}

#[test]
fn collapses_whitespace() {
    assert_eq!(slugify("  Ancient   Bow  "), "ancient-bow");
}

#[test]
fn non_ascii_letters_are_dropped() {
    assert_eq!(slugify("枫叶 Maple Leaf"), "maple-leaf");
}

#[test]
fn empty_name_gives_empty_slug() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("!!!"), "");
}

#[test]
fn is_deterministic() {
    assert_eq!(slugify("Fire Sword"), slugify("Fire Sword"));
}
