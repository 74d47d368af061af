#![forbid(unsafe_code)]

//! Scene registry and construction.

pub mod ace_of_shadows;
pub mod magic_words;
pub mod menu;
pub mod phoenix_flame;

use std::sync::Arc;

use emberdeck_fire::FireConfig;

use crate::dialogue::DialogueScript;
use crate::scene::{Scene, SceneId};

pub use ace_of_shadows::{AceConfig, AceOfShadowsScene};
pub use magic_words::MagicWordsScene;
pub use menu::MenuScene;
pub use phoenix_flame::PhoenixFlameScene;

/// Display metadata for a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneMeta {
    pub id: SceneId,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SCENE_REGISTRY: &[SceneMeta] = &[
    SceneMeta {
        id: SceneId::Menu,
        title: SceneId::Menu.title(),
        blurb: "Pick a demo",
    },
    SceneMeta {
        id: SceneId::AceOfShadows,
        title: SceneId::AceOfShadows.title(),
        blurb: "A deck deals itself between two stacks",
    },
    SceneMeta {
        id: SceneId::MagicWords,
        title: SceneId::MagicWords.title(),
        blurb: "Dialogue with inline emoji",
    },
    SceneMeta {
        id: SceneId::PhoenixFlame,
        title: SceneId::PhoenixFlame.title(),
        blurb: "Cellular-automaton fire",
    },
];

pub fn meta(id: SceneId) -> &'static SceneMeta {
    SCENE_REGISTRY
        .iter()
        .find(|m| m.id == id)
        .unwrap_or(&SCENE_REGISTRY[0])
}

/// Everything scenes are built from. Shared across scene switches.
#[derive(Debug, Clone)]
pub struct SceneAssets {
    pub dialogue: Arc<DialogueScript>,
    pub fire: FireConfig,
    pub ace: AceConfig,
}

impl SceneAssets {
    pub fn new(dialogue: DialogueScript) -> Self {
        Self {
            dialogue: Arc::new(dialogue),
            fire: FireConfig::default(),
            ace: AceConfig::default(),
        }
    }
}

/// Build a fresh, not yet created, scene.
pub fn build_scene(id: SceneId, assets: &SceneAssets) -> Box<dyn Scene> {
    match id {
        SceneId::Menu => Box::new(MenuScene::new()),
        SceneId::AceOfShadows => Box::new(AceOfShadowsScene::new(assets.ace)),
        SceneId::MagicWords => Box::new(MagicWordsScene::new(Arc::clone(&assets.dialogue))),
        SceneId::PhoenixFlame => Box::new(PhoenixFlameScene::new(assets.fire)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_scene() {
        for id in SceneId::ALL {
            assert_eq!(meta(*id).id, *id);
        }
        assert_eq!(SCENE_REGISTRY.len(), SceneId::ALL.len());
    }

    #[test]
    fn build_matches_id() {
        let assets = SceneAssets::new(DialogueScript::fallback().unwrap());
        for id in SceneId::ALL {
            assert_eq!(build_scene(*id, &assets).id(), *id);
        }
    }
}
