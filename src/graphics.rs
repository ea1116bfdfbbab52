use drivesim::simulation;
use geo::Coord;
use macroquad::prelude::*;

const LANE_LINE_WIDTH: f32 = 5.0;
const DASH_LENGTH: f32 = 20.0;

/// World-to-screen translation keeping the followed car at 70% of the screen height.
pub struct Viewport {
    dx: f32,
    dy: f32,
}

impl Viewport {
    pub fn follow(road: &simulation::road::Road, target: Option<&simulation::car::Car>) -> Self {
        let target_y = target.map_or(0.0, |car| car.y);
        Self {
            dx: screen_width() / 2.0 - road.x,
            dy: screen_height() * 0.7 - target_y,
        }
    }
}

trait ToScreen {
    type Output;
    fn to_screen(&self, view: &Viewport) -> Self::Output;
}

impl ToScreen for Coord<f32> {
    type Output = Vec2;
    fn to_screen(&self, view: &Viewport) -> Vec2 {
        vec2(self.x + view.dx, self.y + view.dy)
    }
}

pub fn draw_road(road: &simulation::road::Road, view: &Viewport) {
    let left = road.left + view.dx;
    let right = road.right + view.dx;
    draw_rectangle(left, 0.0, right - left, screen_height(), LIGHTGRAY);

    // dashed inner lane markings, phase locked to the world so they scroll
    let phase = view.dy.rem_euclid(DASH_LENGTH * 2.0);
    for lane in 1..road.lane_count {
        let x = left + road.lane_width() * lane as f32;
        let mut y = phase - DASH_LENGTH * 2.0;
        while y < screen_height() {
            draw_line(x, y, x, y + DASH_LENGTH, LANE_LINE_WIDTH, WHITE);
            y += DASH_LENGTH * 2.0;
        }
    }

    for border in &road.borders {
        let start = border.start.to_screen(view);
        let end = border.end.to_screen(view);
        draw_line(start.x, start.y, end.x, end.y, LANE_LINE_WIDTH, WHITE);
    }
}

pub fn draw_car(car: &simulation::car::Car, view: &Viewport, color: Color) {
    let color = if car.is_damaged() { RED } else { color };
    let polygon = *car.polygon();
    let [front_right, front_left, rear_left, rear_right] =
        polygon.map(|corner| corner.to_screen(view));
    draw_triangle(front_right, front_left, rear_left, color);
    draw_triangle(front_right, rear_left, rear_right, color);
}

pub fn draw_sensor(sensor: &simulation::sensor::Sensor, view: &Viewport) {
    for (ray, reading) in sensor.rays().iter().zip(sensor.readings()) {
        let start = ray.start.to_screen(view);
        let end = ray.end.to_screen(view);
        let touch = reading.map_or(end, |touch| touch.point.to_screen(view));

        draw_line(start.x, start.y, touch.x, touch.y, 2.0, YELLOW);
        draw_line(end.x, end.y, touch.x, touch.y, 2.0, BLACK);
    }
}

pub fn draw_world(world: &simulation::world::World) {
    let best = world.best_car();
    let view = Viewport::follow(&world.road, best);

    draw_road(&world.road, &view);

    for car in &world.traffic {
        draw_car(car, &view, PURPLE);
    }

    let faded = Color::new(BLUE.r, BLUE.g, BLUE.b, 0.2);
    for car in &world.cars {
        draw_car(car, &view, faded);
    }

    if let Some(best) = best {
        draw_car(best, &view, BLUE);
        if let Some(sensor) = best.sensor() {
            draw_sensor(sensor, &view);
        }
    }

    let status = format!(
        "tick {}  alive {}/{}",
        world.tick,
        world.cars.len() - world.damaged_count(),
        world.cars.len()
    );
    draw_text(&status, 10.0, 20.0, 20.0, DARKGRAY);
}
