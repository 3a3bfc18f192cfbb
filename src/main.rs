// src/main.rs
use log::info;
use nannou::prelude::*;

use spritevis::{
    actor::SpriteActor,
    config::Config,
    render::{AppResources, SpriteRenderer, TextureBank},
};

struct Model {
    // Core components:
    actor: SpriteActor,
    texture_bank: TextureBank,

    // Rendering components:
    renderer: SpriteRenderer,

    // Demo controls:
    animation_cycle: Vec<String>,
    cycle_index: usize,
    idle_animation: String,
    transition_start: String,
    transition_loop: String,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create window
    app.new_window()
        .title("spritevis 0.2.1")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    // Set up the texture bank and the actor
    let mut texture_bank = TextureBank::new(app);
    let mut actor = SpriteActor::new();
    actor.time_per_frame = config.time_per_frame();

    {
        let mut resources = AppResources {
            app,
            bank: &mut texture_bank,
        };
        actor
            .init(&mut resources)
            .expect("Failed to initialize sprite actor");
        actor.load_animations(
            &config.demo.character,
            &config.resolve_texture_root(),
            &mut resources,
        );
    }
    actor.set_animation(&config.demo.idle_animation);

    let animation_cycle: Vec<String> = actor
        .animation_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    info!(
        "Loaded {} animations ({} textures) for '{}': {:?}",
        animation_cycle.len(),
        texture_bank.texture_count(),
        config.demo.character,
        animation_cycle
    );

    Model {
        actor,
        texture_bank,

        renderer: SpriteRenderer::new(config.sprite.width, config.sprite.height),

        animation_cycle,
        cycle_index: 0,
        idle_animation: config.demo.idle_animation,
        transition_start: config.demo.transition_start,
        transition_loop: config.demo.transition_loop,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // play the start animation once, then settle into the loop
        Key::Space => {
            model
                .actor
                .set_transition_animation(&model.transition_start, &model.transition_loop);
        }
        // back to idling
        Key::I => {
            model.actor.set_animation(&model.idle_animation);
        }
        // step through every loaded animation
        Key::Right => {
            if !model.animation_cycle.is_empty() {
                model.cycle_index = (model.cycle_index + 1) % model.animation_cycle.len();
                let name = model.animation_cycle[model.cycle_index].clone();
                model.actor.set_animation(&name);
            }
        }
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.actor.think(update.since_start.as_secs_f64());
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    model
        .renderer
        .draw(&draw, &model.actor, &model.texture_bank, pt2(0.0, 0.0));

    draw.to_frame(app, &frame).unwrap();
}
