//! Property tests for dialogue tokenisation.
//!
//! 1. Tokens concatenate back to the source text.
//! 2. Emoji tokens only ever name known emoji.
//! 3. Text runs are never split: no two adjacent text tokens, no empty ones.
//! 4. The bundled script parses and every line tokenises.

use std::collections::HashSet;

use emberdeck_showcase::dialogue::{DialogueScript, Token, tokenize};
use proptest::prelude::*;

const KNOWN: [&str; 3] = ["sad", "win", "neutral"];

fn known() -> HashSet<&'static str> {
    KNOWN.into_iter().collect()
}

fn rebuild(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Token::Text(s) => s.clone(),
            Token::Emoji(name) => format!("{{{name}}}"),
        })
        .collect()
}

/// Text built from plain words, known and unknown references and stray braces.
fn dialogue_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-z ]{1,6}",
        Just("{sad}".to_string()),
        Just("{win}".to_string()),
        Just("{nope}".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just("{}".to_string()),
    ];
    prop::collection::vec(piece, 0..12).prop_map(|parts| parts.concat())
}

// ═════════════════════════════════════════════════════════════════════════
// 1–3. Structure
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tokens_rebuild_source(text in dialogue_text()) {
        let tokens = tokenize(&text, &known());
        prop_assert_eq!(rebuild(&tokens), text);
    }

    #[test]
    fn emoji_tokens_are_known(text in dialogue_text()) {
        let known = known();
        for token in tokenize(&text, &known) {
            if let Token::Emoji(name) = token {
                prop_assert!(known.contains(name.as_str()), "unknown emoji {}", name);
            }
        }
    }

    #[test]
    fn text_runs_are_merged(text in dialogue_text()) {
        let tokens = tokenize(&text, &known());
        for pair in tokens.windows(2) {
            let both_text = matches!(pair, [Token::Text(_), Token::Text(_)]);
            prop_assert!(!both_text, "split text run in {:?}", tokens);
        }
        for token in &tokens {
            if let Token::Text(s) = token {
                prop_assert!(!s.is_empty());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Bundled script
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn bundled_script_tokenises() {
    let script = DialogueScript::fallback().unwrap();
    let known = script.emoji_names();
    assert!(!script.dialogue.is_empty());
    let mut emoji = 0;
    for line in &script.dialogue {
        let tokens = tokenize(&line.text, &known);
        assert_eq!(rebuild(&tokens), line.text);
        emoji += tokens
            .iter()
            .filter(|t| matches!(t, Token::Emoji(_)))
            .count();
    }
    assert!(emoji > 0);
}

#[test]
fn unknown_reference_in_bundled_script_stays_literal() {
    let script = DialogueScript::fallback().unwrap();
    let known = script.emoji_names();
    let line = script
        .dialogue
        .iter()
        .find(|l| l.text.contains("{sparkle}"))
        .unwrap();
    let tokens = tokenize(&line.text, &known);
    assert_eq!(tokens, vec![Token::Text(line.text.clone())]);
}
