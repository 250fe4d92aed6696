//! SD2 demo. Sets up a game camera the way a game's start-up would.
//!
//! Usage: sd2_demo [WIDTH HEIGHT]

use sd2_engine::glam::{UVec2, Vec2, Vec3};
use sd2_engine::sd2::{Engine, Result};
use sd2_engine::sd2::camera::{Camera, CameraClearFlags};
use sd2_engine::sd2::math::Rgba;
use sd2_engine::sd2::texture::TextureKey;
use sd2_engine::{engine_bail, engine_info};

const DEFAULT_SIZE: UVec2 = UVec2::new(1280, 720);

struct Game {
    game_camera: Camera,
    ui_camera: Camera,
    /// Depth target created by the game itself; the game destroys it.
    ui_depth: TextureKey,
}

impl Game {
    fn startup(output_size: UVec2) -> Result<Self> {
        Engine::initialize()?;
        Engine::create_texture_manager(output_size)?;

        let tm_arc = Engine::texture_manager()?;
        let mut tm = Engine::lock_texture_manager(&tm_arc)?;

        // Option A: the camera creates a depth target matching its color target
        let mut game_camera = Camera::new();
        game_camera.set_color_target(None);
        game_camera.create_matching_depth_stencil_target(&mut tm, "game_depth")?;
        game_camera.set_clear_mode(CameraClearFlags::ALL, Rgba::rgb(30, 30, 40), 1.0, 0);
        game_camera.set_projection_perspective(60.0, 0.1, 100.0);
        game_camera.set_position(Vec3::new(0.0, 2.0, -10.0));
        game_camera.set_pitch_roll_yaw_rotation(10.0, 0.0, 0.0);

        // Option B: the game creates the depth target and binds it
        let ui_depth = tm.create_depth_stencil("ui_depth", output_size)?;
        let mut ui_camera = Camera::new();
        ui_camera.set_depth_stencil_target(Some(ui_depth));
        ui_camera.set_clear_mode(CameraClearFlags::DEPTH, Rgba::WHITE, 1.0, 0);
        ui_camera.set_projection_orthographic(output_size.y as f32, 0.0, 1.0);
        ui_camera.resolve_output_size(&tm)?;

        engine_info!("sd2::Demo", "Start-up complete: {} textures", tm.texture_count());

        Ok(Self { game_camera, ui_camera, ui_depth })
    }

    fn report(&self) -> Result<()> {
        let tm_arc = Engine::texture_manager()?;
        let tm = Engine::lock_texture_manager(&tm_arc)?;

        for (name, camera) in [("game", &self.game_camera), ("ui", &self.ui_camera)] {
            let pass = camera.pass_description(&tm)?;
            engine_info!("sd2::Demo", "[{}] {:?} {}x{} clears {:?}",
                name, pass.color, pass.size.x, pass.size.y, pass.clear_flags);
            engine_info!("sd2::Demo", "[{}] view {:?}", name, pass.view);
            engine_info!("sd2::Demo", "[{}] projection {:?}", name, pass.projection);
        }

        let size = self.game_camera.output_size().as_vec2();
        let center = self.game_camera.client_to_world(size * 0.5, 0.5);
        let back = self.game_camera.world_to_client(center);
        engine_info!("sd2::Demo", "Screen center at depth 0.5 -> world {:?} -> client {:?}",
            center, back);

        let corner = self.ui_camera.client_to_world(Vec2::ZERO, 0.0);
        engine_info!("sd2::Demo", "UI top-left corner in world space: {:?}", corner);

        Ok(())
    }

    fn shutdown(self) -> Result<()> {
        let tm_arc = Engine::texture_manager()?;
        Engine::lock_texture_manager(&tm_arc)?.destroy_texture(self.ui_depth);
        Engine::destroy_texture_manager()?;
        Engine::shutdown();
        Ok(())
    }
}

fn parse_size() -> Result<UVec2> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(DEFAULT_SIZE),
        [w, h] => match (w.parse::<u32>(), h.parse::<u32>()) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(UVec2::new(w, h)),
            _ => engine_bail!("sd2::Demo", InvalidParameter,
                "Expected two positive integers, got '{}' '{}'", w, h),
        },
        _ => engine_bail!("sd2::Demo", InvalidParameter, "Usage: sd2_demo [WIDTH HEIGHT]"),
    }
}

fn main() -> Result<()> {
    let size = parse_size()?;
    let game = Game::startup(size)?;
    game.report()?;
    game.shutdown()
}
