#![forbid(unsafe_code)]

//! Dialogue records for the Magic Words scene.
//!
//! A script is a JSON object with three arrays:
//!
//! ```json
//! {
//!   "dialogue": [{ "name": "Ada", "text": "Hello {wave}" }],
//!   "emojies":  [{ "name": "wave", "url": "https://..." }],
//!   "avatars":  [{ "name": "Ada", "url": "https://...", "position": "left" }]
//! }
//! ```
//!
//! `emojies` is spelled the way the upstream payload spells it. Lines embed
//! emoji as `{name}`; names missing from `emojies` stay literal text.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ShowcaseError;

const FALLBACK: &str = include_str!("../assets/dialogue.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DialogueLine {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Emoji {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSide {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Avatar {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub position: AvatarSide,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DialogueScript {
    pub dialogue: Vec<DialogueLine>,
    #[serde(default)]
    pub emojies: Vec<Emoji>,
    #[serde(default)]
    pub avatars: Vec<Avatar>,
}

impl DialogueScript {
    pub fn from_json(json: &str) -> Result<Self, ShowcaseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The script bundled with the binary.
    pub fn fallback() -> Result<Self, ShowcaseError> {
        Self::from_json(FALLBACK)
    }

    /// Read `path`, or the bundled script when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ShowcaseError> {
        let Some(path) = path else {
            return Self::fallback();
        };
        let json = fs::read_to_string(path).map_err(|source| ShowcaseError::DialogueFile {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            lines = script.dialogue.len(),
            "dialogue loaded"
        );
        Ok(script)
    }

    pub fn emoji_names(&self) -> HashSet<&str> {
        self.emojies.iter().map(|e| e.name.as_str()).collect()
    }

    /// Side the speaker's avatar sits on. Unknown speakers sit left.
    pub fn side_of(&self, speaker: &str) -> AvatarSide {
        self.avatars
            .iter()
            .find(|a| a.name == speaker)
            .map_or(AvatarSide::Left, |a| a.position)
    }
}

/// A run of plain text or a single emoji reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Emoji(String),
}

/// Split `text` into text and `{emoji}` tokens.
///
/// Only names in `known` become [`Token::Emoji`]; anything else, including an
/// unclosed `{`, is kept verbatim. Adjacent text is merged.
pub fn tokenize(text: &str, known: &HashSet<&str>) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pending = String::new();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = &after[..close];
        pending.push_str(&rest[..open]);
        if known.contains(name) {
            if !pending.is_empty() {
                tokens.push(Token::Text(std::mem::take(&mut pending)));
            }
            tokens.push(Token::Emoji(name.to_string()));
        } else {
            pending.push('{');
            pending.push_str(name);
            pending.push('}');
        }
        rest = &after[close + 1..];
    }

    pending.push_str(rest);
    if !pending.is_empty() {
        tokens.push(Token::Text(pending));
    }
    tokens
}

/// Terminal stand-in for an emoji image.
pub fn emoji_glyph(name: &str) -> char {
    match name {
        "sad" => '☹',
        "intrigued" => '⁈',
        "neutral" => '·',
        "satisfied" => '☺',
        "laughing" => '☻',
        "win" => '★',
        "affirmative" => '✓',
        _ => '◆',
    }
}
