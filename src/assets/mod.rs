pub mod frame_files;
pub mod resources;

pub use frame_files::{animation_folder, animation_name, frame_file_name, ANIMATIONS_DIR};
pub use resources::{MeshId, SpriteResources, TextureId};
