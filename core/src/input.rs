use serde::{Deserialize, Serialize};

use crate::types::{button, Intent};

/// Per-tick snapshot of one player's pressed keys, resolved to logical
/// actions. Move flags are independent; both can be held at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStates {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub attack: bool,
    pub special: bool,
}

/// Fixed per-player binding from backend key codes to logical actions. The
/// key code type is the presentation layer's; the core never names one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBindings<K> {
    pub left: K,
    pub right: K,
    pub jump: K,
    pub attack: K,
    pub special: K,
}

impl<K: PartialEq> KeyBindings<K> {
    /// Resolve the currently-pressed key codes into a logical snapshot.
    pub fn resolve(&self, pressed: &[K]) -> KeyStates {
        KeyStates {
            left: pressed.contains(&self.left),
            right: pressed.contains(&self.right),
            jump: pressed.contains(&self.jump),
            attack: pressed.contains(&self.attack),
            special: pressed.contains(&self.special),
        }
    }
}

/// HumanInput decision policy: logical key snapshot → intent bitmask.
pub fn intent_from_keys(keys: &KeyStates) -> Intent {
    let mut buttons = 0u8;
    if keys.left {
        buttons |= button::LEFT;
    }
    if keys.right {
        buttons |= button::RIGHT;
    }
    if keys.jump {
        buttons |= button::JUMP;
    }
    if keys.attack {
        buttons |= button::ATTACK;
    }
    if keys.special {
        buttons |= button::SPECIAL;
    }
    Intent { buttons }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NULL_INTENT;

    fn wasd_bindings() -> KeyBindings<char> {
        KeyBindings {
            left: 'a',
            right: 'd',
            jump: 'w',
            attack: 's',
            special: 'e',
        }
    }

    #[test]
    fn resolves_pressed_keys_to_actions() {
        let keys = wasd_bindings().resolve(&['a', 'e']);
        assert!(keys.left);
        assert!(keys.special);
        assert!(!keys.right);
        assert!(!keys.jump);
        assert!(!keys.attack);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let keys = wasd_bindings().resolve(&['x', 'q']);
        assert_eq!(keys, KeyStates::default());
    }

    #[test]
    fn empty_snapshot_is_a_noop_intent() {
        assert_eq!(intent_from_keys(&KeyStates::default()), NULL_INTENT);
    }

    #[test]
    fn move_flags_are_independent() {
        let keys = wasd_bindings().resolve(&['a', 'd']);
        let intent = intent_from_keys(&keys);
        assert_ne!(intent.buttons & button::LEFT, 0);
        assert_ne!(intent.buttons & button::RIGHT, 0);
    }

    #[test]
    fn all_actions_combine_into_one_intent() {
        let keys = wasd_bindings().resolve(&['a', 'd', 'w', 's', 'e']);
        let intent = intent_from_keys(&keys);
        assert_eq!(
            intent.buttons,
            button::LEFT | button::RIGHT | button::JUMP | button::ATTACK | button::SPECIAL
        );
    }
}
