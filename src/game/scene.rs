use glam::{ Mat4, Vec3 };
use log::info;
use winit::event::{ ElementState, MouseScrollDelta };
use winit::keyboard::KeyCode;

use crate::config::AppConfig;
use crate::engine::components::{ BasicCamera, Camera };
use crate::engine::systems::{ KeyAction, KeyboardInputSystem };
use crate::engine::utils::input_utils::{ scroll_lines, MouseTracker };
use crate::engine::utils::math::{ aspect_ratio, mat4_perspective };
use crate::game::entities::axis_model;
use crate::game::globals::ScenePose;
use crate::game::{ build_frame, Frame };

/// Per-window state: cameras, scene pose and input trackers.
#[derive(Debug)]
pub struct Scene {
    pub camera: Camera,
    pub basic_camera: BasicCamera,
    pub pose: ScenePose,
    keyboard: KeyboardInputSystem,
    mouse: MouseTracker,
    fan_speed: f32,
    orbit_speed: f32,
    show_axes: bool,
}

impl Scene {
    pub fn new(config: &AppConfig) -> Self {
        let settings = &config.camera;
        let mut camera = Camera::new(Vec3::from_array(settings.position)).with_zoom(settings.zoom);
        camera.movement_speed = settings.movement_speed;
        camera.rotation_speed = settings.rotation_speed;
        camera.mouse_sensitivity = settings.mouse_sensitivity;

        Self {
            camera,
            basic_camera: BasicCamera::default(),
            pose: ScenePose::new(),
            keyboard: KeyboardInputSystem::new(),
            mouse: MouseTracker::new(),
            fan_speed: config.scene.fan_speed,
            orbit_speed: settings.orbit_speed,
            show_axes: config.scene.show_axes,
        }
    }

    /// Feed a key transition. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key_code: KeyCode, state: ElementState) -> bool {
        match self.keyboard.receive_key_event(key_code, state) {
            Some(KeyAction::ToggleFan) => {
                let on = self.pose.toggle_fan();
                info!("Fan {}", if on { "on" } else { "off" });
                false
            }
            Some(KeyAction::ToggleOrbit) => {
                let on = self.pose.toggle_rotate_around();
                info!("Orbit view {}", if on { "on" } else { "off" });
                false
            }
            Some(KeyAction::Exit) => true,
            Some(KeyAction::Move(_)) | None => false,
        }
    }

    pub fn handle_cursor(&mut self, x: f64, y: f64) {
        if let Some((dx, dy)) = self.mouse.offset(x, y) {
            self.camera.process_mouse_movement(dx, dy, true);
        }
    }

    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        self.camera.process_mouse_scroll(scroll_lines(delta));
    }

    /// Drop held keys and the last cursor position so nothing sticks after
    /// the window loses focus.
    pub fn handle_focus_lost(&mut self) {
        self.keyboard.clear();
        self.mouse.reset();
    }

    /// Advance by `delta_time` seconds: held keys, fan spin and orbit.
    pub fn update(&mut self, delta_time: f32) {
        for movement in self.keyboard.held_movements() {
            self.camera.process_keyboard(movement, delta_time);
        }

        self.pose.advance(delta_time, self.fan_speed);

        if self.pose.rotate_around {
            self.basic_camera.orbit(self.orbit_speed * delta_time);
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        if self.pose.rotate_around {
            self.basic_camera.view_matrix()
        } else {
            self.camera.view_matrix()
        }
    }

    pub fn projection_matrix(&self, width: u32, height: u32) -> Mat4 {
        mat4_perspective(self.camera.zoom(), aspect_ratio(width, height))
    }

    pub fn frame(&self, width: u32, height: u32) -> Frame {
        Frame {
            view: self.view_matrix(),
            projection: self.projection_matrix(width, height),
            parts: build_frame(&self.pose),
            axes: self.show_axes.then(|| axis_model(&self.pose)),
        }
    }
}
