//! Property tests over arbitrary texts and entity lists.

use entmark::{
    entities_to_markdown, escape_common_chars, render, Entity, EntityKind, RenderOptions,
};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = EntityKind> {
    prop_oneof![
        Just(EntityKind::Bold),
        Just(EntityKind::Italic),
        Just(EntityKind::Underline),
        Just(EntityKind::Strikethrough),
        Just(EntityKind::Code),
        Just(EntityKind::Pre),
        Just(EntityKind::Mention),
        Just(EntityKind::Hashtag),
        Just(EntityKind::from("spoiler")),
    ]
}

fn entity() -> impl Strategy<Value = Entity> {
    (kind(), 0usize..40, 0usize..40)
        .prop_map(|(kind, offset, length)| Entity::new(kind, offset, length))
}

proptest! {
    #[test]
    fn no_entities_is_common_escaping(text in any::<String>()) {
        prop_assert_eq!(entities_to_markdown(&text, &[]), escape_common_chars(&text));
    }

    #[test]
    fn bold_over_everything_wraps_escaped_text(text in "[a-zA-Z0-9 _*.!()#-]{1,40}") {
        let length = text.encode_utf16().count();
        let markup = entities_to_markdown(&text, &[Entity::new(EntityKind::Bold, 0, length)]);
        prop_assert_eq!(markup, format!("**{}**", escape_common_chars(&text)));
    }

    #[test]
    fn permissive_render_never_fails(
        text in "[a-z😀é .*_\n]{0,30}",
        entities in prop::collection::vec(entity(), 0..6),
    ) {
        let rendered = render(&text, &entities, &RenderOptions::default());
        prop_assert!(rendered.is_ok());

        let rendered = rendered.unwrap();
        for span in &rendered.spans {
            prop_assert!(rendered.text.get(span.output.clone()).is_some());
            prop_assert!(text.get(span.source.clone()).is_some());
        }
    }

    #[test]
    fn output_is_deterministic(
        text in "[a-z .*]{0,20}",
        entities in prop::collection::vec(entity(), 0..4),
    ) {
        prop_assert_eq!(
            entities_to_markdown(&text, &entities),
            entities_to_markdown(&text, &entities)
        );
    }
}
