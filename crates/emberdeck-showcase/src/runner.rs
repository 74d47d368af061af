#![forbid(unsafe_code)]

//! Run loops: a fixed-step headless loop for tests and CI, and the
//! interactive terminal loop.

use std::io;
use std::time::Duration;

use web_time::Instant;

use crate::canvas::Canvas;
use crate::cli::Opts;
use crate::dialogue::DialogueScript;
use crate::error::ShowcaseError;
use crate::host::SceneHost;
use crate::scene::SceneId;
use crate::scenes::SceneAssets;
use crate::terminal::{Input, Presenter, TerminalSession};

/// Build scene assets from the command line: dialogue file, deck size and
/// fire seed.
pub fn assets_from_opts(opts: &Opts) -> Result<SceneAssets, ShowcaseError> {
    let dialogue = DialogueScript::load(opts.dialogue.as_deref())?;
    let mut assets = SceneAssets::new(dialogue);
    assets.ace.card_count = opts.cards;
    if let Some(seed) = opts.seed {
        assets.fire.seed = seed;
    }
    Ok(assets)
}

fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

/// Outcome of a headless run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub frames: u64,
    /// Simulated time.
    pub elapsed: Duration,
    pub final_scene: SceneId,
    /// The last frame drawn.
    pub canvas: Canvas,
}

/// Run `opts.frames` fixed steps (or until `opts.exit_after_ms` of simulated
/// time) without touching the terminal.
pub fn run_headless(opts: &Opts, assets: SceneAssets) -> RunReport {
    let (width, height) = opts.size;
    let mut host = SceneHost::new(assets, opts.scene, width, height);
    host.set_show_fps(opts.show_fps);
    let dt = frame_interval(opts.fps);
    let limit = Duration::from_millis(opts.exit_after_ms);

    let mut frames = 0;
    let mut elapsed = Duration::ZERO;
    while !host.should_quit() {
        if opts.exit_after_ms > 0 {
            if elapsed >= limit {
                break;
            }
        } else if frames >= opts.frames {
            break;
        }
        host.frame(dt);
        frames += 1;
        elapsed += dt;
    }

    let mut canvas = Canvas::new(width, height);
    host.draw(&mut canvas);
    let final_scene = host.current();
    let clock = host.shutdown();
    tracing::info!(
        frames,
        scene = final_scene.slug(),
        leaked = clock.active_subscriptions(),
        "headless run finished"
    );
    RunReport {
        frames,
        elapsed,
        final_scene,
        canvas,
    }
}

/// Interactive loop: poll input until the next frame is due, update, draw,
/// present.
pub fn run_terminal(opts: &Opts, assets: SceneAssets) -> Result<(), ShowcaseError> {
    let session = TerminalSession::new()?;
    let (width, height) = session.size()?;
    let mut host = SceneHost::new(assets, opts.scene, width, height);
    host.set_show_fps(opts.show_fps);
    let mut canvas = Canvas::new(width, height);
    let mut presenter = Presenter::new();
    let mut stdout = io::stdout();

    let interval = frame_interval(opts.fps);
    let started = Instant::now();
    let mut last = started;
    loop {
        let deadline = last + interval;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            match session.poll_input(timeout)? {
                Some(Input::Key(key)) => host.handle_key(key),
                Some(Input::Resize(w, h)) => {
                    host.resize(w, h);
                    presenter.invalidate();
                }
                None => {}
            }
            if host.should_quit() || Instant::now() >= deadline {
                break;
            }
        }
        if host.should_quit() {
            break;
        }
        if opts.exit_after_ms > 0
            && started.elapsed() >= Duration::from_millis(opts.exit_after_ms)
        {
            tracing::info!(ms = opts.exit_after_ms, "exit-after deadline reached");
            break;
        }

        let now = Instant::now();
        host.frame(now - last);
        last = now;
        host.draw(&mut canvas);
        presenter.present(&mut stdout, &canvas)?;
    }

    host.shutdown();
    drop(session);
    Ok(())
}
