// src/actor/sprite_actor.rs
//
// The animated sprite actor.
//
// It holds the animation table and playback state for one on-screen
// character, and provides the per-tick update that keeps the material's
// base texture in step with the clock. The engine side (meshes, textures,
// the update loop itself) stays behind the SpriteResources seam.

use log::{debug, warn};
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use crate::assets::{animation_folder, animation_name, frame_file_name};
use crate::assets::{MeshId, SpriteResources, TextureId};
use crate::render::SpriteMaterial;

pub const DEFAULT_TIME_PER_FRAME: f64 = 1.0 / 45.0;
pub const IDLE_ANIMATION: &str = "idle";
pub const SPRITE_MESH: &str = "character_plane.obj";

// A transition is always a two-step queue: play the first animation once,
// then settle into looping the second.
const TRANSITION_STEPS: usize = 2;

pub struct SpriteActor {
    // playback state
    pub time_per_frame: f64,
    pub current_frame: usize,
    pub current_animation: String,
    next_frame_time: f64,

    // animation table, name -> ordered frame handles
    animations: HashMap<String, Vec<TextureId>>,

    // transition state
    pub is_transitioning: bool,
    transition_step: usize,
    transition_animations: [String; TRANSITION_STEPS],

    // drawable state
    pub material: SpriteMaterial,
    mesh: Option<MeshId>,
}

impl SpriteActor {
    pub fn new() -> Self {
        Self {
            time_per_frame: DEFAULT_TIME_PER_FRAME,
            current_frame: 0,
            current_animation: IDLE_ANIMATION.to_string(),
            next_frame_time: 0.0,

            animations: HashMap::new(),

            is_transitioning: false,
            transition_step: 0,
            transition_animations: [String::new(), String::new()],

            material: SpriteMaterial::default(),
            mesh: None,
        }
    }

    /// Acquire the shared sprite quad and set up the material. The material
    /// shows the collaborator's placeholder texture until an animation is
    /// selected.
    pub fn init(&mut self, resources: &mut dyn SpriteResources) -> Result<(), Box<dyn Error>> {
        self.mesh = Some(resources.mesh(SPRITE_MESH)?);
        self.material = SpriteMaterial::new(resources.placeholder_texture());
        self.material.alpha_test = true;
        self.material.no_cull = true;
        Ok(())
    }

    /// Advance playback against the clock. Invoked once per tick by the
    /// update loop; `time` is the current clock reading.
    pub fn think(&mut self, time: f64) {
        if time < self.next_frame_time {
            return;
        }
        let Some(frame_count) = self.animations.get(&self.current_animation).map(Vec::len)
        else {
            return;
        };

        // Catch up on frames missed since the due time, then re-base the
        // next due time on the clock reading.
        let delta = time - self.next_frame_time;
        self.next_frame_time = time + self.time_per_frame;
        self.current_frame += 1 + (delta / self.time_per_frame).floor() as usize;

        if self.is_transitioning
            && self.current_frame >= frame_count
            && self.transition_step + 1 < TRANSITION_STEPS
        {
            self.transition_step += 1;
            let next = self.transition_animations[self.transition_step].clone();
            self.set_animation(&next);

            // The queue only ever holds two animations, so the first
            // advance already reaches the end of it.
            if self.transition_step <= TRANSITION_STEPS {
                self.is_transitioning = false;
            }
        }

        // Reset on overflow rather than a modular wrap, so a catch-up jump
        // always restarts the loop at frame 0.
        let Some(frames) = self.animations.get(&self.current_animation) else {
            return;
        };
        if self.current_frame >= frames.len() {
            self.current_frame = 0;
        }
        if let Some(&texture) = frames.get(self.current_frame) {
            self.material.base_texture = texture;
        }
    }

    /// Load every animation found in a character's folder. Animations that
    /// are already in the table are left alone. Load failures are logged
    /// and leave whatever was loaded before the failure in place.
    pub fn load_animations(
        &mut self,
        character: &str,
        texture_root: &Path,
        resources: &mut dyn SpriteResources,
    ) {
        if let Err(err) = self.scan_animation_folder(character, texture_root, resources) {
            warn!("Failed to load animations for '{}': {}", character, err);
        }
    }

    fn scan_animation_folder(
        &mut self,
        character: &str,
        texture_root: &Path,
        resources: &mut dyn SpriteResources,
    ) -> Result<(), Box<dyn Error>> {
        let folder = animation_folder(texture_root, character);

        for entry in std::fs::read_dir(&folder)? {
            let file_name = entry?.file_name();
            let Some(animation) = animation_name(&file_name.to_string_lossy()) else {
                continue;
            };
            if !self.animations.contains_key(&animation) {
                self.load_single_animation(&animation, &folder, resources)?;
            }
        }
        Ok(())
    }

    // Frames are probed sequentially from 0001; the first missing index
    // ends the sequence, so a numbering gap truncates the animation there.
    fn load_single_animation(
        &mut self,
        animation: &str,
        folder: &Path,
        resources: &mut dyn SpriteResources,
    ) -> Result<(), Box<dyn Error>> {
        let mut frames = Vec::new();
        let mut frame = 1u32;
        let mut path = folder.join(frame_file_name(animation, frame));

        while path.exists() {
            frames.push(resources.load_texture(&path)?);
            frame += 1;
            path = folder.join(frame_file_name(animation, frame));
        }

        debug!("Loaded {} frames for animation '{}'", frames.len(), animation);
        self.animations.insert(animation.to_string(), frames);
        Ok(())
    }

    /// Select an animation by name. Unknown names leave playback unchanged.
    pub fn set_animation(&mut self, name: &str) {
        if !self.animations.contains_key(name) {
            return;
        }

        self.current_animation = name.to_string();
        self.current_frame = 0;
    }

    /// Queue a two-step transition: play `from` once, then settle into
    /// looping `to`. The switch happens when `from` runs out of frames.
    pub fn set_transition_animation(&mut self, from: &str, to: &str) {
        self.transition_animations = [from.to_string(), to.to_string()];

        self.is_transitioning = true;
        self.transition_step = 0;
        self.set_animation(from);
    }

    pub fn animation_frames(&self, name: &str) -> Option<&[TextureId]> {
        self.animations.get(name).map(Vec::as_slice)
    }

    pub fn has_animation(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Loaded animation names, sorted for stable iteration.
    pub fn animation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.animations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn transition_step(&self) -> usize {
        self.transition_step
    }

    pub fn mesh(&self) -> Option<MeshId> {
        self.mesh
    }
}

impl Default for SpriteActor {
    fn default() -> Self {
        Self::new()
    }
}
