use std::collections::HashSet;

use log::debug;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::engine::components::CameraMovement;

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Applied every frame while the key is held
    Move(CameraMovement),
    ToggleFan,
    ToggleOrbit,
    Exit,
}

pub fn key_binding(key_code: KeyCode) -> Option<KeyAction> {
    let action = match key_code {
        KeyCode::KeyW => KeyAction::Move(CameraMovement::Forward),
        KeyCode::KeyS => KeyAction::Move(CameraMovement::Backward),
        KeyCode::KeyA => KeyAction::Move(CameraMovement::Left),
        KeyCode::KeyD => KeyAction::Move(CameraMovement::Right),
        KeyCode::KeyE => KeyAction::Move(CameraMovement::Up),
        KeyCode::KeyR => KeyAction::Move(CameraMovement::Down),
        KeyCode::KeyX => KeyAction::Move(CameraMovement::PitchUp),
        KeyCode::KeyC => KeyAction::Move(CameraMovement::PitchDown),
        KeyCode::KeyY => KeyAction::Move(CameraMovement::YawLeft),
        KeyCode::KeyV => KeyAction::Move(CameraMovement::YawRight),
        KeyCode::KeyZ => KeyAction::Move(CameraMovement::RollLeft),
        KeyCode::KeyQ => KeyAction::Move(CameraMovement::RollRight),
        KeyCode::KeyG => KeyAction::ToggleFan,
        KeyCode::KeyF => KeyAction::ToggleOrbit,
        KeyCode::Escape => KeyAction::Exit,
        _ => {
            return None;
        }
    };
    Some(action)
}

/// Tracks held keys so movement can be polled once per frame.
#[derive(Debug, Default)]
pub struct KeyboardInputSystem {
    pressed_keys: HashSet<KeyCode>,
}

impl KeyboardInputSystem {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
        }
    }

    /// Record a key transition. Returns the one-shot action (toggle, exit) for a
    /// fresh press; auto-repeat and movement keys yield `None`.
    pub fn receive_key_event(&mut self, key_code: KeyCode, state: ElementState) -> Option<KeyAction> {
        match state {
            ElementState::Pressed => {
                if !self.pressed_keys.insert(key_code) {
                    return None;
                }
                debug!("[INPUT] Key pressed: {:?}", key_code);
                match key_binding(key_code) {
                    Some(KeyAction::Move(_)) | None => None,
                    action => action,
                }
            }
            ElementState::Released => {
                self.pressed_keys.remove(&key_code);
                debug!("[INPUT] Key released: {:?}", key_code);
                None
            }
        }
    }

    /// Camera movements for every held movement key, in binding order.
    pub fn held_movements(&self) -> Vec<CameraMovement> {
        const MOVEMENT_KEYS: [KeyCode; 12] = [
            KeyCode::KeyW,
            KeyCode::KeyS,
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::KeyE,
            KeyCode::KeyR,
            KeyCode::KeyX,
            KeyCode::KeyC,
            KeyCode::KeyY,
            KeyCode::KeyV,
            KeyCode::KeyZ,
            KeyCode::KeyQ,
        ];

        MOVEMENT_KEYS.iter()
            .filter(|key| self.pressed_keys.contains(*key))
            .filter_map(|key| match key_binding(*key) {
                Some(KeyAction::Move(movement)) => Some(movement),
                _ => None,
            })
            .collect()
    }

    /// Forget held keys, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.pressed_keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_fire_once_per_press() {
        let mut input = KeyboardInputSystem::new();
        assert_eq!(input.receive_key_event(KeyCode::KeyG, ElementState::Pressed), Some(KeyAction::ToggleFan));
        // auto-repeat while held
        assert_eq!(input.receive_key_event(KeyCode::KeyG, ElementState::Pressed), None);
        assert_eq!(input.receive_key_event(KeyCode::KeyG, ElementState::Released), None);
        assert_eq!(input.receive_key_event(KeyCode::KeyG, ElementState::Pressed), Some(KeyAction::ToggleFan));
    }

    #[test]
    fn escape_requests_exit() {
        let mut input = KeyboardInputSystem::new();
        assert_eq!(input.receive_key_event(KeyCode::Escape, ElementState::Pressed), Some(KeyAction::Exit));
    }

    #[test]
    fn movement_keys_are_polled_not_fired() {
        let mut input = KeyboardInputSystem::new();
        assert_eq!(input.receive_key_event(KeyCode::KeyQ, ElementState::Pressed), None);
        assert_eq!(input.receive_key_event(KeyCode::KeyW, ElementState::Pressed), None);
        assert_eq!(input.receive_key_event(KeyCode::KeyP, ElementState::Pressed), None);

        assert_eq!(input.held_movements(), vec![CameraMovement::Forward, CameraMovement::RollRight]);
        assert!(input.pressed_keys.contains(&KeyCode::KeyP));

        input.receive_key_event(KeyCode::KeyW, ElementState::Released);
        assert_eq!(input.held_movements(), vec![CameraMovement::RollRight]);

        input.clear();
        assert!(input.held_movements().is_empty());
    }

    #[test]
    fn every_camera_movement_has_a_key() {
        let bound: HashSet<_> = [
            KeyCode::KeyW, KeyCode::KeyS, KeyCode::KeyA, KeyCode::KeyD, KeyCode::KeyE, KeyCode::KeyR,
            KeyCode::KeyX, KeyCode::KeyC, KeyCode::KeyY, KeyCode::KeyV, KeyCode::KeyZ, KeyCode::KeyQ,
        ]
            .into_iter()
            .filter_map(key_binding)
            .collect();
        assert_eq!(bound.len(), 12);
    }
}
