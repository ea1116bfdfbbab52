use std::path::Path;
use std::sync::Arc;

use drivesim::simulation::controls::{ControlType, Intents};
use drivesim::simulation::network::Network;
use drivesim::simulation::params::Params;
use drivesim::simulation::world::World;
use macroquad::prelude::*;

mod graphics;

fn load_params() -> Params {
    match std::env::args().nth(1) {
        Some(path) => match Params::load_from_file(&path) {
            Ok(params) => params,
            Err(e) => {
                log::error!("could not load {}: {}, using defaults", path, e);
                Params::default()
            }
        },
        None => Params::default(),
    }
}

fn load_brain(params: &Params) -> Option<Arc<Network>> {
    if !Path::new(&params.brain_path).exists() {
        return None;
    }
    match Network::load_from_file(&params.brain_path) {
        Ok(network) => Some(Arc::new(network)),
        Err(e) => {
            log::warn!("ignoring saved network: {}", e);
            None
        }
    }
}

fn build_world(params: &Params) -> World {
    match World::new(params, load_brain(params)) {
        Ok(world) => world,
        Err(e) => {
            log::warn!("{}, starting with random networks", e);
            World::new(params, None).expect("default world must build")
        }
    }
}

fn keyboard_intents() -> Intents {
    Intents {
        forward: is_key_down(KeyCode::Up),
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        reverse: is_key_down(KeyCode::Down),
    }
}

#[macroquad::main("Self-Driving Car")]
async fn main() {
    env_logger::init();

    let params = load_params();
    let mut world = build_world(&params);

    log::info!("starting simulation with {:?} control", params.control_type);

    loop {
        if is_key_pressed(KeyCode::S) {
            if let Err(e) = world.save_best_brain(&params.brain_path) {
                log::error!("save failed: {}", e);
            }
        }
        if is_key_pressed(KeyCode::D) {
            if let Err(e) = std::fs::remove_file(&params.brain_path) {
                log::warn!("nothing discarded: {}", e);
            }
        }
        if is_key_pressed(KeyCode::R) {
            world = build_world(&params);
        }

        if params.control_type == ControlType::Keys {
            let intents = keyboard_intents();
            for car in &mut world.cars {
                car.controls.set_intents(intents);
            }
        }

        world.step();

        clear_background(WHITE);
        graphics::draw_world(&world);

        next_frame().await
    }
}
