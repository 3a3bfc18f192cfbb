pub mod sprite_actor;

pub use sprite_actor::{SpriteActor, DEFAULT_TIME_PER_FRAME, IDLE_ANIMATION, SPRITE_MESH};
