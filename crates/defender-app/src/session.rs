//! Session construction and the command surface.
//!
//! A `Session` validates its configuration, owns the frame scheduler,
//! and translates keyboard and server input into engine commands.

use thiserror::Error;

use defender_core::constants::{DEFAULT_MAX_HAZARDS, DEFAULT_MAX_HEALTH, DEFAULT_MAX_PLAYERS};
use defender_core::state::GameStateSnapshot;
use defender_sim::engine::SimConfig;

use crate::collaborators::{Presenter, ServerMessage, Transport};
use crate::input::{command_for_key, KeyCode};
use crate::scheduler::FrameScheduler;

/// Options recognized at session construction.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Hazard count spawned at session start.
    pub max_hazards: usize,
    /// Starting (and maximum) planet health.
    pub max_health: i32,
    /// Advisory multiplayer headcount cap.
    pub max_players: u32,
    /// Whether to attach the network collaborator at all.
    pub is_multiplayer: bool,
    /// Game server endpoints. Required when `is_multiplayer` is set.
    pub servers: Vec<String>,
    /// RNG seed for the spawn layout.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_hazards: DEFAULT_MAX_HAZARDS,
            max_health: DEFAULT_MAX_HEALTH,
            max_players: DEFAULT_MAX_PLAYERS,
            is_multiplayer: false,
            servers: Vec::new(),
            seed: 42,
        }
    }
}

/// Fatal session-setup failures.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Multiplayer was requested without any transport endpoint.
    #[error("a default server should be provided for multiplayer sessions")]
    NoServerConfigured,
}

/// A configured game session.
pub struct Session {
    config: SessionConfig,
    scheduler: FrameScheduler,
}

impl Session {
    /// Validate the configuration and build the session. Fails when
    /// multiplayer is requested without server endpoints.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        if config.is_multiplayer && config.servers.is_empty() {
            return Err(SessionError::NoServerConfigured);
        }
        Ok(Self {
            config,
            scheduler: FrameScheduler::new(),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Start the session. In single-player mode the transport is not
    /// attached even if one is supplied.
    pub fn start(&mut self, presenter: Box<dyn Presenter>, transport: Option<Box<dyn Transport>>) {
        let transport = if self.config.is_multiplayer {
            transport
        } else {
            None
        };
        self.scheduler.start(self.sim_config(), presenter, transport);
    }

    pub fn pause(&self) {
        self.scheduler.pause();
    }

    pub fn resume(&self) {
        self.scheduler.resume();
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Block until the session ends on its own (game over).
    pub fn join(&mut self) {
        self.scheduler.join();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Forward a key press to the engine.
    pub fn press_key(&self, key: KeyCode) {
        self.scheduler.send(command_for_key(key));
    }

    /// Forward a raw browser key code; unbound codes are ignored.
    pub fn press_raw_key(&self, code: u32) {
        if let Some(key) = KeyCode::from_raw(code) {
            self.press_key(key);
        }
    }

    /// Apply an inbound server advisory.
    pub fn apply_server_message(&self, message: ServerMessage) {
        self.scheduler.send(message.into_command());
    }

    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.scheduler.latest_snapshot()
    }

    fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.config.seed,
            max_hazards: self.config.max_hazards,
            max_health: self.config.max_health,
            max_players: self.config.max_players,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.max_hazards, 200);
        assert_eq!(config.max_health, 1000);
        assert_eq!(config.max_players, 10);
        assert!(!config.is_multiplayer);
    }

    #[test]
    fn test_multiplayer_requires_servers() {
        let result = Session::new(SessionConfig {
            is_multiplayer: true,
            servers: Vec::new(),
            ..Default::default()
        });
        assert!(matches!(result, Err(SessionError::NoServerConfigured)));
    }

    #[test]
    fn test_multiplayer_with_server_constructs() {
        let result = Session::new(SessionConfig {
            is_multiplayer: true,
            servers: vec!["ws://localhost:8888".to_string()],
            ..Default::default()
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_single_player_needs_no_servers() {
        let session = Session::new(SessionConfig::default()).unwrap();
        assert!(!session.is_running());
    }
}
