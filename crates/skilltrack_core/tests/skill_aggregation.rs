use skilltrack_core::{
    category_label, group_by_category, level_label, level_tier, CategoryKey, LevelError,
    LevelTier, RecordId, Skill, UNCATEGORIZED_KEY,
};

fn skill(id: &str, category: &str, level: i64) -> Skill {
    Skill {
        id: RecordId::from(id),
        name: format!("skill {id}"),
        category: category.to_string(),
        level,
        last_updated: None,
    }
}

fn keys(skills: &[Skill]) -> Vec<String> {
    group_by_category(skills)
        .keys()
        .map(|key| key.as_str().to_string())
        .collect()
}

#[test]
fn case_and_whitespace_variants_share_one_bucket() {
    let skills = vec![
        skill("a", "Backend", 1),
        skill("b", " backend ", 2),
        skill("c", "BACKEND", 3),
    ];

    let grouped = group_by_category(&skills);

    assert_eq!(grouped.len(), 1);
    let bucket = &grouped[&CategoryKey::normalize("backend")];
    assert_eq!(
        bucket.iter().map(|s| s.id.clone()).collect::<Vec<_>>(),
        vec![RecordId::from("a"), RecordId::from("b"), RecordId::from("c")]
    );
}

#[test]
fn blank_categories_normalize_to_uncategorized() {
    assert_eq!(CategoryKey::normalize("").as_str(), UNCATEGORIZED_KEY);
    assert_eq!(CategoryKey::normalize("   ").as_str(), UNCATEGORIZED_KEY);
    assert!(CategoryKey::normalize("\t").is_uncategorized());
}

#[test]
fn keys_sort_lexically_with_uncategorized_in_natural_position() {
    let skills = vec![
        skill("1", "zoology", 1),
        skill("2", "", 1),
        skill("3", "Art", 2),
        skill("4", "web", 3),
        skill("5", "Music", 1),
    ];

    assert_eq!(
        keys(&skills),
        vec!["art", "music", "uncategorized", "web", "zoology"]
    );
}

#[test]
fn grouping_is_idempotent() {
    let skills = vec![
        skill("1", "Design", 1),
        skill("2", "design ", 2),
        skill("3", "", 3),
    ];

    assert_eq!(group_by_category(&skills), group_by_category(&skills));
}

#[test]
fn labels_title_case_original_category() {
    let key = CategoryKey::normalize("  machine LEARNING ");
    assert_eq!(category_label(&key, "  machine LEARNING "), "Machine Learning");

    let sentinel = CategoryKey::normalize("");
    assert_eq!(category_label(&sentinel, ""), "Uncategorized");
}

#[test]
fn level_labels_cover_known_levels() {
    assert_eq!(level_label(1), Ok("Beginner"));
    assert_eq!(level_label(2), Ok("Intermediate"));
    assert_eq!(level_label(3), Ok("Advanced"));
    assert_eq!(level_tier(2), Ok(LevelTier::Intermediate));
}

#[test]
fn unknown_levels_are_errors() {
    for level in [0, 4, -1] {
        assert_eq!(level_label(level), Err(LevelError::UnknownLevel(level)));
        assert_eq!(level_tier(level), Err(LevelError::UnknownLevel(level)));
    }
}
