//! Headless Earth Defender session.
//!
//! Runs a single-player session with the log-backed presenter until the
//! planet's health is exhausted.

use defender_app::collaborators::LogPresenter;
use defender_app::{Session, SessionConfig};

fn main() {
    env_logger::init();

    let mut session = match Session::new(SessionConfig::default()) {
        Ok(session) => session,
        Err(err) => {
            log::error!("session setup failed: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "starting session: {} hazards, {} health",
        session.config().max_hazards,
        session.config().max_health
    );

    session.start(Box::new(LogPresenter), None);
    session.join();
}
