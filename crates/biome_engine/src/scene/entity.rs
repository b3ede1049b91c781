//! Placed objects

use slotmap::new_key_type;

use crate::scene::transform::Transform;

new_key_type! {
    /// Stable reference to a model owned by a [`crate::scene::Scene`]
    pub struct ModelKey;
}

/// Index of an entity within its scene
///
/// Entities are never removed during a run, so an id stays valid for the
/// lifetime of the scene that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub(crate) usize);

/// A transform plus an optional mesh
///
/// An entity without a model is never drawn. The player is one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Placement in the world
    pub transform: Transform,
    /// Mesh drawn at the transform, if any
    pub model: Option<ModelKey>,
}

impl Entity {
    /// Entity drawn with `model`
    pub fn visual(transform: Transform, model: ModelKey) -> Self {
        Self {
            transform,
            model: Some(model),
        }
    }

    /// Entity with no mesh
    pub fn invisible(transform: Transform) -> Self {
        Self {
            transform,
            model: None,
        }
    }
}
