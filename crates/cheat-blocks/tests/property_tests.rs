use std::path::Path;

use cheat_blocks::{START_BLOCK, TrimRule, builtin_specs, segment};
use proptest::prelude::*;

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("--------".to_string()),
        Just("-- 1. Intro".to_string()),
        Just("-- 2. Intro".to_string()),
        Just("#### Heading".to_string()),
        Just(String::new()),
        "[a-z ]{0,12}",
    ]
}

proptest! {
    #[test]
    fn test_spans_partition_lines(lines in prop::collection::vec(line(), 0..40)) {
        for spec in builtin_specs() {
            let config = spec.compile(Path::new(".")).unwrap();
            let blocks = config.segment(&lines);

            prop_assert_eq!(blocks[0].name.as_str(), START_BLOCK);

            let mut next = 0;
            for block in &blocks {
                prop_assert_eq!(block.span.start, next);
                prop_assert!(block.span.end >= block.span.start);
                next = block.span.end;
            }
            prop_assert_eq!(next, lines.len());
        }
    }

    #[test]
    fn test_untrimmed_content_is_the_span(lines in prop::collection::vec(line(), 0..40)) {
        let heading = |_: &str, current: &str, _: &str| {
            current.strip_prefix("#### ").map(str::to_string)
        };
        let blocks = segment(&lines, &heading, &TrimRule::default());

        let rebuilt: Vec<String> = blocks.iter().flat_map(|b| b.content.clone()).collect();
        prop_assert_eq!(rebuilt, lines.clone());
        for block in &blocks {
            prop_assert_eq!(&block.content[..], &lines[block.span.clone()]);
        }
    }

    #[test]
    fn test_segment_is_deterministic(lines in prop::collection::vec(line(), 0..40)) {
        let config = builtin_specs()[0].compile(Path::new(".")).unwrap();
        prop_assert_eq!(config.segment(&lines), config.segment(&lines));
    }
}
