pub mod material;
pub mod sprite_renderer;
pub mod texture_bank;

pub use material::SpriteMaterial;
pub use sprite_renderer::SpriteRenderer;
pub use texture_bank::{AppResources, TextureBank};
