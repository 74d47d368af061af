#![forbid(unsafe_code)]

//! emberdeck binary entry point.

use std::env;

use emberdeck_showcase::cli::Opts;
use emberdeck_showcase::logging::{self, LogConfig};
use emberdeck_showcase::runner;

fn main() {
    let opts = Opts::parse();

    if let Err(e) = logging::init(&LogConfig::from_env(|key| env::var(key).ok())) {
        eprintln!("Logging disabled: {e}");
    }

    let assets = match runner::assets_from_opts(&opts) {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if opts.headless {
        let report = runner::run_headless(&opts, assets);
        for row in 0..report.canvas.height() {
            println!("{}", report.canvas.row_text(row).trim_end());
        }
        println!(
            "emberdeck: {} frames, {:.2}s simulated, ended on {}",
            report.frames,
            report.elapsed.as_secs_f64(),
            report.final_scene.title()
        );
        return;
    }

    if let Err(e) = runner::run_terminal(&opts, assets) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
