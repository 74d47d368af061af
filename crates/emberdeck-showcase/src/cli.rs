#![forbid(unsafe_code)]

//! Command-line argument parsing for the showcase.
//!
//! Arguments are parsed by hand. Environment variables with the
//! `EMBERDECK_*` prefix override the defaults and are in turn overridden by
//! explicit flags.

use std::env;
use std::path::PathBuf;
use std::process;

use crate::error::ShowcaseError;
use crate::scene::SceneId;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
emberdeck: three small real-time demos in the terminal

USAGE:
    emberdeck [OPTIONS]

OPTIONS:
    --scene=NAME         Start scene: menu (default), ace, words, fire
    --dialogue=PATH      Dialogue JSON for Magic Words (default: bundled)
    --cards=N            Cards dealt in Ace of Shadows (default: 144)
    --seed=N             Fire RNG seed
    --fps=N              Target frame rate (default: 60)
    --no-fps             Hide the FPS counter
    --headless           Run without a terminal, at a fixed frame step
    --frames=N           Frames to run headless (default: 120)
    --size=WxH           Headless viewport size (default: 80x24)
    --exit-after-ms=N    Quit after N milliseconds of simulated time
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    up/down, j/k       Select in the menu
    enter, 1-3         Open a demo
    esc esc            Back to the menu
    q / Ctrl+C         Quit

ENVIRONMENT VARIABLES:
    EMBERDECK_SCENE           Override --scene
    EMBERDECK_DIALOGUE        Override --dialogue
    EMBERDECK_CARDS           Override --cards
    EMBERDECK_SEED            Override --seed
    EMBERDECK_FPS             Override --fps
    EMBERDECK_HEADLESS        Run headless when set to 1 or true
    EMBERDECK_FRAMES          Override --frames
    EMBERDECK_EXIT_AFTER_MS   Override --exit-after-ms
    EMBERDECK_LOG             Log filter (default: info)
    EMBERDECK_LOG_FILE        Log file (default: emberdeck.log)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Scene shown first.
    pub scene: SceneId,
    /// Dialogue file; `None` uses the bundled script.
    pub dialogue: Option<PathBuf>,
    /// Cards dealt in Ace of Shadows.
    pub cards: u32,
    /// Fire RNG seed; `None` keeps the fire's default.
    pub seed: Option<u32>,
    /// Target frames per second.
    pub fps: u32,
    pub show_fps: bool,
    /// Run without a terminal.
    pub headless: bool,
    /// Frames to run headless.
    pub frames: u64,
    /// Headless viewport `(columns, rows)`.
    pub size: (u16, u16),
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            scene: SceneId::Menu,
            dialogue: None,
            cards: 144,
            seed: None,
            fps: 60,
            show_fps: true,
            headless: false,
            frames: 120,
            size: (80, 24),
            exit_after_ms: 0,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(Opts),
    Help,
    Version,
}

fn parse_size(val: &str) -> Option<(u16, u16)> {
    let (w, h) = val.split_once(['x', 'X'])?;
    let size = (w.parse().ok()?, h.parse().ok()?);
    (size.0 > 0 && size.1 > 0).then_some(size)
}

fn invalid(flag: &'static str, value: &str) -> ShowcaseError {
    ShowcaseError::InvalidValue {
        flag,
        value: value.to_string(),
    }
}

fn value<T: std::str::FromStr>(flag: &'static str, val: &str) -> Result<T, ShowcaseError> {
    val.parse().map_err(|_| invalid(flag, val))
}

impl Opts {
    /// Apply `EMBERDECK_*` overrides. Unparseable values are ignored.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("EMBERDECK_SCENE")
            && let Some(id) = SceneId::parse(&val)
        {
            self.scene = id;
        }
        if let Some(val) = var("EMBERDECK_DIALOGUE") {
            self.dialogue = Some(PathBuf::from(val));
        }
        if let Some(val) = var("EMBERDECK_CARDS")
            && let Ok(n) = val.parse()
        {
            self.cards = n;
        }
        if let Some(val) = var("EMBERDECK_SEED")
            && let Ok(n) = val.parse()
        {
            self.seed = Some(n);
        }
        if let Some(val) = var("EMBERDECK_FPS")
            && let Ok(n) = val.parse::<u32>()
            && n > 0
        {
            self.fps = n;
        }
        if let Some(val) = var("EMBERDECK_HEADLESS") {
            self.headless = matches!(val.as_str(), "1" | "true" | "yes");
        }
        if let Some(val) = var("EMBERDECK_FRAMES")
            && let Ok(n) = val.parse()
        {
            self.frames = n;
        }
        if let Some(val) = var("EMBERDECK_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            self.exit_after_ms = n;
        }
    }

    /// Parse `args` (without the program name) on top of the environment
    /// read through `var`.
    pub fn parse_from<I, S>(
        args: I,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<CliAction, ShowcaseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = Self::default();
        opts.apply_env(var);

        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Ok(CliAction::Help),
                "--version" | "-V" => return Ok(CliAction::Version),
                "--headless" => opts.headless = true,
                "--no-fps" => opts.show_fps = false,
                other => {
                    if let Some(val) = other.strip_prefix("--scene=") {
                        opts.scene = SceneId::parse(val).ok_or_else(|| invalid("--scene", val))?;
                    } else if let Some(val) = other.strip_prefix("--dialogue=") {
                        opts.dialogue = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--cards=") {
                        opts.cards = value("--cards", val)?;
                    } else if let Some(val) = other.strip_prefix("--seed=") {
                        opts.seed = Some(value("--seed", val)?);
                    } else if let Some(val) = other.strip_prefix("--fps=") {
                        opts.fps = value("--fps", val)?;
                        if opts.fps == 0 {
                            return Err(invalid("--fps", val));
                        }
                    } else if let Some(val) = other.strip_prefix("--frames=") {
                        opts.frames = value("--frames", val)?;
                    } else if let Some(val) = other.strip_prefix("--size=") {
                        opts.size = parse_size(val).ok_or_else(|| invalid("--size", val))?;
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        opts.exit_after_ms = value("--exit-after-ms", val)?;
                    } else {
                        return Err(ShowcaseError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }
        Ok(CliAction::Run(opts))
    }

    /// Parse the process arguments and environment. Prints help or version
    /// and exits, or exits with status 1 on a bad argument.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(CliAction::Run(opts)) => opts,
            Ok(CliAction::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(CliAction::Version) => {
                println!("emberdeck {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("{err}");
                if matches!(err, ShowcaseError::UnknownArgument(_)) {
                    eprintln!("Run with --help for usage information.");
                }
                process::exit(1);
            }
        }
    }
}
