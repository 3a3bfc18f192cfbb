// src/assets/resources.rs
//
// The seam between the actor and the engine's resource system.
// Meshes and textures live on the engine side for the lifetime of the
// process; the actor only ever holds the opaque handles returned here.

use std::error::Error;
use std::path::Path;

/// Handle to a texture owned by the resource collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

/// Handle to a shared mesh owned by the resource collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u32);

pub trait SpriteResources {
    /// Look up a shared mesh by name.
    fn mesh(&mut self, name: &str) -> Result<MeshId, Box<dyn Error>>;

    /// The texture shown until a real animation frame is selected.
    fn placeholder_texture(&self) -> TextureId;

    /// Load an image file into a texture and return its handle.
    fn load_texture(&mut self, path: &Path) -> Result<TextureId, Box<dyn Error>>;
}
