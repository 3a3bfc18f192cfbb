// src/render/material.rs
//
// Drawable surface state for a sprite quad. The renderer reads this
// every frame; the actor rebinds base_texture as playback advances.

use crate::assets::TextureId;

#[derive(Debug, Clone, Copy, Default)]
pub struct SpriteMaterial {
    pub base_texture: TextureId,
    pub alpha_test: bool,
    pub no_cull: bool,
}

impl SpriteMaterial {
    pub fn new(base_texture: TextureId) -> Self {
        Self {
            base_texture,
            alpha_test: false,
            no_cull: false,
        }
    }
}
