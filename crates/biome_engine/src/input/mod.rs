//! Input bindings
//!
//! Keys are named by [`KeyCode`] so nothing outside the platform layer needs
//! GLFW types. [`MOVEMENT_BINDINGS`] maps each movement key to the axis it
//! pushes the player along.

/// Key codes the renderer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Left shift
    LeftShift,
    /// Left control
    LeftControl,
    /// Escape key
    Escape,
}

/// Direction a movement key pushes along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAxis {
    /// Look direction, including pitch
    Forward,
    /// Strafe direction
    Right,
    /// World vertical, independent of look direction
    WorldUp,
}

/// One movement key binding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementBinding {
    /// Key that activates the binding
    pub key: KeyCode,
    /// Axis to move along
    pub axis: MoveAxis,
    /// `1.0` along the axis, `-1.0` against it
    pub sign: f64,
}

impl MovementBinding {
    /// Bind `key` to move along `axis` with the given sign
    pub const fn new(key: KeyCode, axis: MoveAxis, sign: f64) -> Self {
        Self { key, axis, sign }
    }
}

/// Movement keys, evaluated independently every frame
pub const MOVEMENT_BINDINGS: [MovementBinding; 6] = [
    MovementBinding::new(KeyCode::W, MoveAxis::Forward, 1.0),
    MovementBinding::new(KeyCode::S, MoveAxis::Forward, -1.0),
    MovementBinding::new(KeyCode::D, MoveAxis::Right, 1.0),
    MovementBinding::new(KeyCode::A, MoveAxis::Right, -1.0),
    MovementBinding::new(KeyCode::LeftShift, MoveAxis::WorldUp, 1.0),
    MovementBinding::new(KeyCode::LeftControl, MoveAxis::WorldUp, -1.0),
];

/// Key that requests the window to close
pub const CLOSE_KEY: KeyCode = KeyCode::Escape;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_axis_has_an_opposing_pair() {
        for axis in [MoveAxis::Forward, MoveAxis::Right, MoveAxis::WorldUp] {
            let signs: Vec<f64> = MOVEMENT_BINDINGS
                .iter()
                .filter(|b| b.axis == axis)
                .map(|b| b.sign)
                .collect();
            assert_eq!(signs.len(), 2);
            assert_eq!(signs.iter().sum::<f64>(), 0.0);
        }
    }

    #[test]
    fn test_close_key_is_not_a_movement_key() {
        assert!(MOVEMENT_BINDINGS.iter().all(|b| b.key != CLOSE_KEY));
    }

    #[test]
    fn test_bindings_compare_by_value() {
        let forward = MovementBinding::new(KeyCode::W, MoveAxis::Forward, 1.0);
        assert_eq!(MOVEMENT_BINDINGS[0], forward);
        assert_ne!(MOVEMENT_BINDINGS[1], forward);

        let copy = forward;
        assert_eq!(copy.sign, 1.0);
    }
}
