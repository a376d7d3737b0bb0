//! Property-based tests for the tokenizer and tree builder.

use nginx_config_parser::{parse, Block, Statement};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./:=-]{1,8}"
}

fn gap() -> impl Strategy<Value = String> {
    "[ \t\n]{1,4}"
}

fn statement_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 1..5)
}

fn leaves(statements: &[Vec<String>]) -> Block {
    Block::new(
        statements
            .iter()
            .map(|w| Statement::new(w.clone(), None))
            .collect(),
    )
}

proptest! {
    #[test]
    fn whitespace_does_not_change_the_tree(
        statements in prop::collection::vec(statement_words(), 0..6),
        gaps in prop::collection::vec(gap(), 64),
    ) {
        let mut input = String::new();
        let mut g = gaps.iter().cycle();
        for words in &statements {
            for w in words {
                input.push_str(g.next().unwrap());
                input.push_str(w);
            }
            input.push(';');
        }
        input.push_str(g.next().unwrap());

        prop_assert_eq!(parse(&input).unwrap(), leaves(&statements));
    }

    #[test]
    fn comments_are_elided(
        statements in prop::collection::vec(statement_words(), 1..6),
        comment in "[^\n]{0,20}",
    ) {
        let plain: String = statements
            .iter()
            .map(|w| format!("{};\n", w.join(" ")))
            .collect();
        let commented: String = statements
            .iter()
            .map(|w| format!("{}; #{}\n# {{ ; }} #\n", w.join(" "), comment))
            .collect();

        prop_assert_eq!(parse(&commented).unwrap(), parse(&plain).unwrap());
    }

    #[test]
    fn quoted_span_is_kept_verbatim(body in "[a-z ;{}#'\n]{0,16}") {
        let quoted = format!("\"{}\"", body);
        let cfg = parse(&format!("key {};", quoted)).unwrap();
        prop_assert_eq!(cfg.len(), 1);
        prop_assert_eq!(cfg.statements()[0].get(1), Some(quoted.as_str()));
    }

    #[test]
    fn sibling_blocks_do_not_leak(
        first in prop::collection::vec(statement_words(), 0..4),
        second in prop::collection::vec(statement_words(), 0..4),
        depth in 1usize..6,
    ) {
        let body = |statements: &[Vec<String>]| -> String {
            statements.iter().map(|w| format!("{}; ", w.join(" "))).collect()
        };
        let input = format!(
            "{}a {{ {} }} b {{ {} }}{}",
            "n { ".repeat(depth),
            body(&first[..]),
            body(&second[..]),
            " }".repeat(depth),
        );

        let mut cfg = parse(&input).unwrap();
        for _ in 0..depth {
            prop_assert_eq!(cfg.len(), 1);
            cfg = cfg.find("n").unwrap().child().unwrap().clone();
        }
        prop_assert_eq!(cfg.len(), 2);
        prop_assert_eq!(cfg.find("a").unwrap().child().unwrap(), &leaves(&first));
        prop_assert_eq!(cfg.find("b").unwrap().child().unwrap(), &leaves(&second));
    }

    #[test]
    fn unbalanced_braces_fail(opens in 0usize..5, closes in 0usize..5) {
        prop_assume!(opens != closes);
        let input = format!("{}x;{}", "b { ".repeat(opens), " }".repeat(closes));
        prop_assert!(parse(&input).is_err());
    }
}
