//! Scene lifecycle through the host.
//!
//! 1. Exactly one scene's subscriptions are alive at any time.
//! 2. Leaving a scene mid-transfer or mid-animation leaves nothing behind.
//! 3. ESC twice returns to the menu; the menu quits on ESC or q.
//! 4. Headless runs end where the keys and frame budget say.

use std::time::Duration;

use emberdeck_showcase::cli::Opts;
use emberdeck_showcase::dialogue::DialogueScript;
use emberdeck_showcase::host::SceneHost;
use emberdeck_showcase::runner::run_headless;
use emberdeck_showcase::scene::{Key, SceneId};
use emberdeck_showcase::scenes::SceneAssets;
use proptest::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn assets() -> SceneAssets {
    let mut assets = SceneAssets::new(DialogueScript::fallback().unwrap());
    // A small grid keeps the property runs fast.
    assets.fire.width = 40;
    assets.fire.height = 30;
    assets
}

fn run(host: &mut SceneHost, frames: u32) {
    for _ in 0..frames {
        host.frame(FRAME);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Subscriptions
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn every_scene_releases_its_tick_on_switch() {
    for &id in SceneId::ALL {
        let mut host = SceneHost::new(assets(), id, 80, 24);
        run(&mut host, 90);
        host.change_scene(SceneId::Menu);
        let labels: Vec<_> = host.clock().labels().collect();
        assert_eq!(labels, vec!["menu"], "after leaving {id:?}");
    }
}

#[test]
fn leaving_ace_mid_transfer_leaves_nothing_behind() {
    let mut host = SceneHost::new(assets(), SceneId::AceOfShadows, 80, 24);
    // Past the first cadence tick, before the two-second flight lands.
    run(&mut host, 80);
    host.change_scene(SceneId::PhoenixFlame);
    assert_eq!(host.clock().active_subscriptions(), 1);

    // Coming back deals a fresh deck.
    host.change_scene(SceneId::AceOfShadows);
    run(&mut host, 10);
    let clock = host.shutdown();
    assert_eq!(clock.active_subscriptions(), 0);
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Up),
        Just(Key::Down),
        Just(Key::Left),
        Just(Key::Right),
        Just(Key::Enter),
        Just(Key::Escape),
        Just(Key::Char(' ')),
        Just(Key::Char('r')),
        Just(Key::Char('1')),
        Just(Key::Char('2')),
        Just(Key::Char('3')),
    ]
}

#[derive(Debug, Clone)]
enum Step {
    Key(Key),
    Frames(u8),
    Switch(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => key_strategy().prop_map(Step::Key),
        2 => (1u8..20).prop_map(Step::Frames),
        1 => (0..SceneId::ALL.len()).prop_map(Step::Switch),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn one_live_subscription_under_any_input(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let mut host = SceneHost::new(assets(), SceneId::Menu, 60, 20);
        for step in steps {
            match step {
                Step::Key(key) => host.handle_key(key),
                Step::Frames(n) => run(&mut host, u32::from(n)),
                Step::Switch(i) => host.change_scene(SceneId::ALL[i]),
            }
            prop_assert_eq!(host.clock().active_subscriptions(), 1);
        }
        let clock = host.shutdown();
        prop_assert_eq!(clock.active_subscriptions(), 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Navigation
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn menu_to_demo_and_back() {
    let mut host = SceneHost::new(assets(), SceneId::Menu, 80, 24);
    host.handle_key(Key::Down);
    host.handle_key(Key::Down);
    host.handle_key(Key::Enter);
    assert_eq!(host.current(), SceneId::PhoenixFlame);

    host.handle_key(Key::Escape);
    run(&mut host, 5);
    host.handle_key(Key::Escape);
    assert_eq!(host.current(), SceneId::Menu);

    host.handle_key(Key::Escape);
    assert!(host.should_quit());
}

#[test]
fn escape_presses_too_far_apart_stay_put() {
    let mut host = SceneHost::new(assets(), SceneId::MagicWords, 80, 24);
    host.handle_key(Key::Escape);
    run(&mut host, 60);
    host.handle_key(Key::Escape);
    assert_eq!(host.current(), SceneId::MagicWords);
    // The second press opened a new window.
    run(&mut host, 2);
    host.handle_key(Key::Escape);
    assert_eq!(host.current(), SceneId::Menu);
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Headless runner
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn headless_run_draws_last_frame() {
    let opts = Opts {
        scene: SceneId::AceOfShadows,
        headless: true,
        frames: 90,
        ..Opts::default()
    };
    let report = run_headless(&opts, assets());
    assert_eq!(report.frames, 90);
    assert_eq!(report.final_scene, SceneId::AceOfShadows);
    assert!(report.canvas.row_text(1).contains("Ace of Shadows"));
    assert!(report.canvas.row_text(2).contains("in flight 1"));
    assert!(report.canvas.row_text(0).contains("FPS: "));
}

#[test]
fn headless_words_reveals_over_time() {
    let opts = Opts {
        scene: SceneId::MagicWords,
        headless: true,
        exit_after_ms: 3_100,
        size: (100, 24),
        ..Opts::default()
    };
    let report = run_headless(&opts, assets());
    let shown = (3..20)
        .filter(|&y| !report.canvas.row_text(y).trim().is_empty())
        .count();
    assert_eq!(shown, 3);
}
