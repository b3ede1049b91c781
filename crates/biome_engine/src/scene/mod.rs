//! Scene management
//!
//! The [`Scene`] is the single owner of every [`Model`] and every [`Entity`].
//! Entities point at models through [`ModelKey`]s, so one uploaded mesh is
//! shared by as many entities as show it, and all GPU geometry is released
//! together when the scene drops.
//!
//! ## Layout
//!
//! ```text
//! Scene
//!  ├─ models:   SlotMap<ModelKey, Model>
//!  ├─ entities: [player, cube, cube, ...]
//!  └─ light marker -> first cube
//! ```

mod entity;
pub mod geometry;
mod transform;


pub use entity::{Entity, EntityId, ModelKey};
pub use transform::{Basis, Transform};

use std::rc::Rc;

use slotmap::SlotMap;

use crate::config::EngineConfig;
use crate::error::SetupResult;
use crate::foundation::math::Vec3;
use crate::render::backend::GraphicsDevice;
use crate::render::model::Model;

/// Registry of models and entities
pub struct Scene<D: GraphicsDevice> {
    models: SlotMap<ModelKey, Model<D>>,
    entities: Vec<Entity>,
    player: EntityId,
    light_marker: Option<EntityId>,
}

impl<D: GraphicsDevice> Scene<D> {
    /// Empty scene holding only the player, at the origin facing +X
    pub fn new() -> Self {
        Self {
            models: SlotMap::with_key(),
            entities: vec![Entity::invisible(Transform::default())],
            player: EntityId(0),
            light_marker: None,
        }
    }

    /// The cube field: a `(2n + 1)³` grid of cubes centred on the origin
    ///
    /// `n` is `grid_half_extent` and neighbouring cubes are `grid_spacing`
    /// apart. All cubes share one uploaded mesh. The first cube, at the
    /// negative corner, marks the light.
    pub fn cube_grid(device: Rc<D>, config: &EngineConfig) -> SetupResult<Self> {
        let mut scene = Self::new();
        let (vertices, normals) = geometry::cube();
        let cube = scene.add_model(Model::new(device, vertices, normals)?);

        let n = config.grid_half_extent;
        for x in -n..=n {
            for y in -n..=n {
                for z in -n..=n {
                    let offset = Vec3::new(f64::from(x), f64::from(y), f64::from(z));
                    let transform = Transform::from_position(offset * config.grid_spacing);
                    let id = scene.spawn(Entity::visual(transform, cube));
                    scene.light_marker.get_or_insert(id);
                }
            }
        }

        log::info!(
            "Scene ready: {} entities, {} models",
            scene.entities.len(),
            scene.models.len()
        );
        Ok(scene)
    }

    /// Take ownership of a model
    pub fn add_model(&mut self, model: Model<D>) -> ModelKey {
        self.models.insert(model)
    }

    /// Model behind `key`
    pub fn model(&self, key: ModelKey) -> Option<&Model<D>> {
        self.models.get(key)
    }

    /// Number of models owned
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Add an entity
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }

    /// Entity behind `id`
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    /// All entities, player first
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Player entity id
    pub fn player_id(&self) -> EntityId {
        self.player
    }

    /// The player's transform
    pub fn player(&self) -> &Transform {
        &self.entities[self.player.0].transform
    }

    /// The player's transform, mutably
    pub fn player_mut(&mut self) -> &mut Transform {
        &mut self.entities[self.player.0].transform
    }

    /// Entity that is moved onto the light every frame
    pub fn light_marker(&self) -> Option<EntityId> {
        self.light_marker
    }

    /// Move the light marker, if there is one, to `position`
    pub fn place_light_marker(&mut self, position: Vec3) {
        if let Some(id) = self.light_marker {
            if let Some(entity) = self.entities.get_mut(id.0) {
                entity.transform.position = position;
            }
        }
    }

    /// Entities that have a model, paired with it
    pub fn drawables(&self) -> impl Iterator<Item = (&Entity, &Model<D>)> {
        self.entities
            .iter()
            .filter_map(|entity| Some((entity, self.models.get(entity.model?)?)))
    }
}

impl<D: GraphicsDevice> Default for Scene<D> {
    fn default() -> Self {
        Self::new()
    }
}
