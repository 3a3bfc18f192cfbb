// src/render/texture_bank.rs
//
// The nannou-backed resource store. It owns every wgpu texture loaded for
// the process lifetime and hands out index handles; the actor never touches
// a texture directly.

use nannou::image::{DynamicImage, Rgba, RgbaImage};
use nannou::prelude::*;
use std::error::Error;
use std::path::Path;

use crate::actor::SPRITE_MESH;
use crate::assets::{MeshId, SpriteResources, TextureId};

pub struct TextureBank {
    textures: Vec<wgpu::Texture>,
    meshes: Vec<String>,
    placeholder: TextureId,
}

impl TextureBank {
    pub fn new(app: &App) -> Self {
        let placeholder = wgpu::Texture::from_image(app, &placeholder_image(64, 64));

        Self {
            textures: vec![placeholder],
            meshes: vec![SPRITE_MESH.to_string()],
            placeholder: TextureId(0),
        }
    }

    pub fn texture(&self, id: TextureId) -> Option<&wgpu::Texture> {
        self.textures.get(id.0 as usize)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

/// `SpriteResources` against the bank, borrowing the app for wgpu access
/// while loading happens.
pub struct AppResources<'a> {
    pub app: &'a App,
    pub bank: &'a mut TextureBank,
}

impl SpriteResources for AppResources<'_> {
    fn mesh(&mut self, name: &str) -> Result<MeshId, Box<dyn Error>> {
        self.bank
            .meshes
            .iter()
            .position(|mesh| mesh == name)
            .map(|index| MeshId(index as u32))
            .ok_or_else(|| format!("unknown mesh '{}'", name).into())
    }

    fn placeholder_texture(&self) -> TextureId {
        self.bank.placeholder
    }

    fn load_texture(&mut self, path: &Path) -> Result<TextureId, Box<dyn Error>> {
        let texture = wgpu::Texture::from_path(self.app, path)?;
        self.bank.textures.push(texture);
        Ok(TextureId((self.bank.textures.len() - 1) as u32))
    }
}

// Magenta/black checkerboard shown wherever no frame is bound yet.
fn placeholder_image(width: u32, height: u32) -> DynamicImage {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        if ((x / 8) + (y / 8)) % 2 == 0 {
            Rgba([255, 0, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    });
    DynamicImage::ImageRgba8(image)
}
