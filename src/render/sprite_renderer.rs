// src/render/sprite_renderer.rs
//
// Draws an actor's current frame as a flat textured quad. Alpha blending
// stands in for the engine-side alpha-test pass, and a quad has no back
// face to cull, so the material flags cost nothing here.

use nannou::prelude::*;

use super::TextureBank;
use crate::actor::SpriteActor;

pub struct SpriteRenderer {
    pub sprite_width: f32,
    pub sprite_height: f32,
}

impl SpriteRenderer {
    pub fn new(sprite_width: f32, sprite_height: f32) -> Self {
        Self {
            sprite_width,
            sprite_height,
        }
    }

    /// Draw the actor at a position. Actors that were never initialized
    /// have no quad to draw on and are skipped.
    pub fn draw(&self, draw: &Draw, actor: &SpriteActor, bank: &TextureBank, position: Point2) {
        if actor.mesh().is_none() {
            return;
        }
        let Some(texture) = bank.texture(actor.material.base_texture) else {
            return;
        };

        draw.texture(texture)
            .x_y(position.x, position.y)
            .w_h(self.sprite_width, self.sprite_height);
    }
}
