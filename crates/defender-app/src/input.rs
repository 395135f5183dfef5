//! Fixed keyboard bindings.
//!
//! Six directional keys on the numpad move the craft by fixed per-axis
//! deltas; space fires. Bindings are not configurable.

use defender_core::commands::PlayerCommand;
use defender_core::enums::SteerDirection;

/// The keys the game recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Numpad8,
    Numpad2,
    Numpad6,
    Numpad4,
    Numpad1,
    Numpad3,
    Space,
}

impl KeyCode {
    /// Map a raw browser key code to a recognized key.
    pub fn from_raw(code: u32) -> Option<KeyCode> {
        match code {
            104 => Some(KeyCode::Numpad8),
            98 => Some(KeyCode::Numpad2),
            102 => Some(KeyCode::Numpad6),
            100 => Some(KeyCode::Numpad4),
            97 => Some(KeyCode::Numpad1),
            99 => Some(KeyCode::Numpad3),
            32 => Some(KeyCode::Space),
            _ => None,
        }
    }
}

/// Translate a key press into an engine command.
pub fn command_for_key(key: KeyCode) -> PlayerCommand {
    match key {
        KeyCode::Numpad8 => PlayerCommand::Steer {
            direction: SteerDirection::Up,
        },
        KeyCode::Numpad2 => PlayerCommand::Steer {
            direction: SteerDirection::Down,
        },
        KeyCode::Numpad6 => PlayerCommand::Steer {
            direction: SteerDirection::Right,
        },
        KeyCode::Numpad4 => PlayerCommand::Steer {
            direction: SteerDirection::Left,
        },
        KeyCode::Numpad1 => PlayerCommand::Steer {
            direction: SteerDirection::Forward,
        },
        KeyCode::Numpad3 => PlayerCommand::Steer {
            direction: SteerDirection::Backward,
        },
        KeyCode::Space => PlayerCommand::Fire,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_code_mapping() {
        assert_eq!(KeyCode::from_raw(104), Some(KeyCode::Numpad8));
        assert_eq!(KeyCode::from_raw(98), Some(KeyCode::Numpad2));
        assert_eq!(KeyCode::from_raw(102), Some(KeyCode::Numpad6));
        assert_eq!(KeyCode::from_raw(100), Some(KeyCode::Numpad4));
        assert_eq!(KeyCode::from_raw(97), Some(KeyCode::Numpad1));
        assert_eq!(KeyCode::from_raw(99), Some(KeyCode::Numpad3));
        assert_eq!(KeyCode::from_raw(32), Some(KeyCode::Space));
        assert_eq!(KeyCode::from_raw(65), None, "Unbound keys are ignored");
    }

    #[test]
    fn test_space_fires() {
        assert!(matches!(
            command_for_key(KeyCode::Space),
            PlayerCommand::Fire
        ));
    }

    #[test]
    fn test_directional_keys_steer() {
        let directional = [
            (KeyCode::Numpad8, SteerDirection::Up),
            (KeyCode::Numpad2, SteerDirection::Down),
            (KeyCode::Numpad6, SteerDirection::Right),
            (KeyCode::Numpad4, SteerDirection::Left),
            (KeyCode::Numpad1, SteerDirection::Forward),
            (KeyCode::Numpad3, SteerDirection::Backward),
        ];
        for (key, expected) in directional {
            match command_for_key(key) {
                PlayerCommand::Steer { direction } => assert_eq!(direction, expected),
                other => panic!("Expected Steer for {key:?}, got {other:?}"),
            }
        }
    }
}
