//! Strict rendering: malformed entity lists are reported instead of adjusted.

use entmark::{entities_to_markdown, render, Entity, EntityKind, RenderError, RenderOptions};

fn strict(text: &str, entities: &[Entity]) -> Result<String, RenderError> {
    render(text, entities, &RenderOptions::strict()).map(|rendered| rendered.text)
}

#[test]
fn test_well_formed_input_renders_the_same() {
    let entities = vec![
        Entity::new(EntityKind::Bold, 0, 5),
        Entity::text_link(6, 5, "https://example.com"),
    ];

    assert_eq!(
        strict("Hello world", &entities).unwrap(),
        "**Hello** [world](https://example.com)"
    );
}

#[test]
fn test_reports_out_of_bounds() {
    let err = strict("abc", &[Entity::new(EntityKind::Bold, 2, 5)]).unwrap_err();

    assert_eq!(
        err,
        RenderError::OutOfBounds {
            index: 0,
            kind: EntityKind::Bold,
            offset: 2,
            end: 7,
            len: 3
        }
    );
}

#[test]
fn test_reports_split_surrogate_pair() {
    let err = strict("😀x", &[Entity::new(EntityKind::Italic, 0, 1)]).unwrap_err();

    assert_eq!(
        err,
        RenderError::SplitsCharacter {
            index: 0,
            kind: EntityKind::Italic,
            position: 1
        }
    );
}

#[test]
fn test_reports_partial_overlap() {
    let entities = vec![
        Entity::new(EntityKind::Italic, 5, 10),
        Entity::new(EntityKind::Bold, 0, 10),
    ];

    let err = strict("abcdefghijklmno", &entities).unwrap_err();

    assert_eq!(err, RenderError::PartialOverlap { outer: 1, inner: 0 });
}

#[test]
fn test_reports_empty_entity() {
    let err = strict("abc", &[Entity::new(EntityKind::Code, 1, 0)]).unwrap_err();
    assert!(matches!(err, RenderError::EmptyEntity { index: 0, .. }));
}

#[test]
fn test_reports_text_link_problems() {
    let missing = vec![Entity::new(EntityKind::TextLink, 0, 3)];
    assert_eq!(
        strict("abc", &missing).unwrap_err(),
        RenderError::MissingUrl { index: 0 }
    );

    let invalid = vec![
        Entity::new(EntityKind::Bold, 0, 1),
        Entity::text_link(0, 3, "example dot com"),
    ];
    let err = strict("abc", &invalid).unwrap_err();
    assert!(matches!(err, RenderError::InvalidUrl { index: 1, .. }));
    assert!(err.to_string().contains("example dot com"));
}

#[test]
fn test_reports_pre_language_outside_a_word() {
    let entities = vec![Entity::pre(0, 3, Some("a`b\n"))];

    let err = strict("x.y", &entities).unwrap_err();

    assert!(matches!(err, RenderError::InvalidLanguage { index: 0, .. }));
    assert_eq!(entities_to_markdown("x.y", &entities), "```\nx.y```");
}
