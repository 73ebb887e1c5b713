//! Tests for the flat entity list -> entity forest conversion and the Bot API JSON shape.

use entmark::common::flat_to_nested::entities_to_tree;
use entmark::{entities_to_markdown, Entity, EntityKind, RenderOptions};

const BOT_API_ENTITIES: &str = r#"[
    {"type": "bold", "offset": 0, "length": 5},
    {"type": "text_link", "offset": 6, "length": 4, "url": "https://example.com"},
    {"type": "pre", "offset": 11, "length": 7, "language": "rust"},
    {"type": "spoiler", "offset": 19, "length": 6},
    {"type": "text_mention", "offset": 26, "length": 4, "user": {"id": 42, "is_bot": false, "first_name": "Bob"}}
]"#;

#[test]
fn test_deserializes_bot_api_entities() {
    let entities: Vec<Entity> = serde_json::from_str(BOT_API_ENTITIES).unwrap();

    assert_eq!(entities.len(), 5);
    assert_eq!(entities[0], Entity::new(EntityKind::Bold, 0, 5));
    assert_eq!(entities[1], Entity::text_link(6, 4, "https://example.com"));
    assert_eq!(entities[2], Entity::pre(11, 7, Some("rust")));
    assert_eq!(entities[3].kind, EntityKind::Other("spoiler".to_string()));
    assert_eq!(entities[4].kind, EntityKind::TextMention);
}

#[test]
fn test_serializes_back_to_bot_api_shape() {
    let entity = Entity::text_link(6, 4, "https://example.com");

    let json = serde_json::to_value(&entity).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "type": "text_link",
            "offset": 6,
            "length": 4,
            "url": "https://example.com"
        })
    );
}

#[test]
fn test_renders_deserialized_entities() {
    let entities: Vec<Entity> = serde_json::from_str(BOT_API_ENTITIES).unwrap();
    let text = "Hello docs x = 1;\n secret @bob";

    let markup = entities_to_markdown(text, &entities);

    assert_eq!(
        markup,
        "**Hello** [docs](https://example.com) ```rust\nx = 1;```\n secret [@bob](https://t.me/bob)"
    );
}

#[test]
fn test_forest_shape_for_message() {
    // "Hello brave new world": bold over everything, italic over "brave", code over "new"
    let entities = vec![
        Entity::new(EntityKind::Code, 12, 3),
        Entity::new(EntityKind::Bold, 0, 21),
        Entity::new(EntityKind::Italic, 6, 5),
    ];

    let roots =
        entities_to_tree("Hello brave new world", &entities, &RenderOptions::default()).unwrap();

    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].index, 1);
    let children: Vec<_> = roots[0]
        .children
        .iter()
        .map(|child| (child.kind().clone(), child.range.clone()))
        .collect();
    assert_eq!(
        children,
        vec![(EntityKind::Italic, 6..11), (EntityKind::Code, 12..15)]
    );
}
