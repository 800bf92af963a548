//! Bouncy Ball entry point
//!
//! Initializes logging, loads settings and runs the window until closed.

use bouncy_ball::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bouncy Ball starting...");

    let settings = Settings::load();

    if let Err(e) = bouncy_ball::platform::run(settings) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
