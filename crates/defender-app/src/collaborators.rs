//! Collaborator seams: presentation and network transport.
//!
//! The simulation never talks to a renderer or a socket directly; it
//! emits events and the scheduler fans them out through these traits.

use serde::{Deserialize, Serialize};

use defender_core::commands::PlayerCommand;

/// Presentation surface. Receives health, headcount, and room-list
/// updates push-on-change after ticks, plus the terminal message exactly
/// once on game over.
pub trait Presenter: Send {
    fn set_health(&self, health: i32);
    fn set_players(&self, players: u32);
    fn set_rooms(&self, rooms: &[String]);
    fn set_message(&self, message: &str);
}

/// Network transport to the game server. Sends are best-effort and
/// fire-and-forget: failures are swallowed inside the implementation and
/// never surface as simulation errors.
pub trait Transport: Send {
    fn send(&self, event: &str);
}

/// Messages received out-of-band from the game server. Applied as
/// advisory state only — they never gate simulation ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    RoomList { rooms: Vec<String> },
    PlayerCount { count: u32 },
}

impl ServerMessage {
    /// Translate an inbound advisory into an engine command.
    pub fn into_command(self) -> PlayerCommand {
        match self {
            ServerMessage::RoomList { rooms } => PlayerCommand::SetRooms { rooms },
            ServerMessage::PlayerCount { count } => PlayerCommand::SetPlayers { count },
        }
    }
}

/// Log-backed presenter for headless runs.
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn set_health(&self, health: i32) {
        log::info!("health: {health}");
    }

    fn set_players(&self, players: u32) {
        log::info!("players: {players}");
    }

    fn set_rooms(&self, rooms: &[String]) {
        log::debug!("rooms: {rooms:?}");
    }

    fn set_message(&self, message: &str) {
        log::warn!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_to_command() {
        let cmd = ServerMessage::PlayerCount { count: 5 }.into_command();
        assert!(matches!(cmd, PlayerCommand::SetPlayers { count: 5 }));

        let cmd = ServerMessage::RoomList {
            rooms: vec!["alpha".to_string()],
        }
        .into_command();
        match cmd {
            PlayerCommand::SetRooms { rooms } => assert_eq!(rooms, vec!["alpha"]),
            other => panic!("Expected SetRooms, got {other:?}"),
        }
    }

    #[test]
    fn test_server_message_serde() {
        let messages = vec![
            ServerMessage::RoomList {
                rooms: vec!["a".to_string(), "b".to_string()],
            },
            ServerMessage::PlayerCount { count: 2 },
        ];
        for msg in &messages {
            let json = serde_json::to_string(msg).unwrap();
            let _back: ServerMessage = serde_json::from_str(&json).unwrap();
        }
    }
}
