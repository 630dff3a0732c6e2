use cityflight_core::assets::{
    DRONE_SPRITE_ASSET, LAYOUT_ASSET, SCENE_ASSET, Source, resolve_layout, resolve_scene,
};
use cityflight_core::{FrameInput, InputMode, Orbit, Session, SessionEvent, Tilt, glam};
#[cfg(target_arch = "wasm32")]
use macroquad::miniquad;
use macroquad::prelude::*;
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::drone::{DroneDrawConfig, draw_drone};
use crate::log::{log_info, log_warn};
use crate::overlay::{DroneOverlay, draw_hint, draw_info_panel, draw_intro};
use crate::scene_draw::{
    SKY_COLOR, draw_ground, draw_landmarks, draw_points_of_interest, draw_structures, scene_camera,
};

mod assets;
mod drone;
mod log;
mod overlay;
mod scene_draw;

static PENDING_RESET: AtomicBool = AtomicBool::new(false);
static PENDING_SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// What the embedding page reads back each frame. Strings stay owned here so the
/// pointers handed out remain valid until the next sync.
#[derive(Default)]
struct OverlayUi {
    panel_present: bool,
    panel_id: String,
    panel_title: String,
    panel_subtitle: String,
    panel_description: String,
    intro_finished: bool,
    logo_visible: bool,
    hint_visible: bool,
    loading_progress: f32,
    orbit_azimuth_deg: f32,
    orbit_polar_deg: f32,
    tilt_pitch_deg: f32,
    tilt_roll_deg: f32,
    touch_mode: bool,
}

fn overlay_ui() -> MutexGuard<'static, OverlayUi> {
    static OVERLAY_UI: OnceLock<Mutex<OverlayUi>> = OnceLock::new();
    OVERLAY_UI
        .get_or_init(|| Mutex::new(OverlayUi::default()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn str_ptr(present: bool, value: &str) -> *const u8 {
    if present && !value.is_empty() {
        value.as_ptr()
    } else {
        ptr::null()
    }
}

fn str_len(present: bool, value: &str) -> usize {
    if present { value.len() } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn info_panel_present() -> i32 {
    if overlay_ui().panel_present { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn info_panel_id_ptr() -> *const u8 {
    let ui = overlay_ui();
    str_ptr(ui.panel_present, &ui.panel_id)
}

#[unsafe(no_mangle)]
pub extern "C" fn info_panel_id_len() -> usize {
    let ui = overlay_ui();
    str_len(ui.panel_present, &ui.panel_id)
}

#[unsafe(no_mangle)]
pub extern "C" fn info_panel_title_ptr() -> *const u8 {
    let ui = overlay_ui();
    str_ptr(ui.panel_present, &ui.panel_title)
}

#[unsafe(no_mangle)]
pub extern "C" fn info_panel_title_len() -> usize {
    let ui = overlay_ui();
    str_len(ui.panel_present, &ui.panel_title)
}

#[unsafe(no_mangle)]
pub extern "C" fn info_panel_subtitle_ptr() -> *const u8 {
    let ui = overlay_ui();
    str_ptr(ui.panel_present, &ui.panel_subtitle)
}

#[unsafe(no_mangle)]
pub extern "C" fn info_panel_subtitle_len() -> usize {
    let ui = overlay_ui();
    str_len(ui.panel_present, &ui.panel_subtitle)
}

#[unsafe(no_mangle)]
pub extern "C" fn info_panel_description_ptr() -> *const u8 {
    let ui = overlay_ui();
    str_ptr(ui.panel_present, &ui.panel_description)
}

#[unsafe(no_mangle)]
pub extern "C" fn info_panel_description_len() -> usize {
    let ui = overlay_ui();
    str_len(ui.panel_present, &ui.panel_description)
}

#[unsafe(no_mangle)]
pub extern "C" fn intro_finished() -> i32 {
    if overlay_ui().intro_finished { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn intro_logo_visible() -> i32 {
    if overlay_ui().logo_visible { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn intro_loading_progress() -> f32 {
    overlay_ui().loading_progress
}

#[unsafe(no_mangle)]
pub extern "C" fn control_hint_visible() -> i32 {
    if overlay_ui().hint_visible { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn drone_overlay_azimuth_deg() -> f32 {
    overlay_ui().orbit_azimuth_deg
}

#[unsafe(no_mangle)]
pub extern "C" fn drone_overlay_polar_deg() -> f32 {
    overlay_ui().orbit_polar_deg
}

#[unsafe(no_mangle)]
pub extern "C" fn drone_overlay_pitch_deg() -> f32 {
    overlay_ui().tilt_pitch_deg
}

#[unsafe(no_mangle)]
pub extern "C" fn drone_overlay_roll_deg() -> f32 {
    overlay_ui().tilt_roll_deg
}

#[unsafe(no_mangle)]
pub extern "C" fn touch_input_active() -> i32 {
    if overlay_ui().touch_mode { 1 } else { 0 }
}

#[unsafe(no_mangle)]
pub extern "C" fn restart_scene() {
    log_info("scene: restart requested");
    PENDING_RESET.store(true, Ordering::SeqCst);
}

#[unsafe(no_mangle)]
pub extern "C" fn shutdown_scene() {
    log_info("scene: shutdown requested");
    PENDING_SHUTDOWN.store(true, Ordering::SeqCst);
}

fn take_pending_reset() -> bool {
    PENDING_RESET.swap(false, Ordering::SeqCst)
}

fn take_pending_shutdown() -> bool {
    PENDING_SHUTDOWN.swap(false, Ordering::SeqCst)
}

fn describe_source(source: Source) -> &'static str {
    match source {
        Source::Asset => "asset",
        Source::BuiltIn => "built-in",
    }
}

/// Pointer sample for one frame. Only the active input mode is read.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerSample {
    position: Option<Vec2>,
    pressed: bool,
}

fn sample_touch(touches: &[Touch]) -> PointerSample {
    let active = touches.iter().find(|touch| {
        matches!(
            touch.phase,
            TouchPhase::Started | TouchPhase::Moved | TouchPhase::Stationary
        )
    });
    PointerSample {
        position: active.map(|touch| touch.position),
        pressed: active.is_some(),
    }
}

fn sample_mouse() -> PointerSample {
    let (x, y) = mouse_position();
    PointerSample {
        position: Some(vec2(x, y)),
        pressed: is_mouse_button_down(MouseButton::Left),
    }
}

fn frame_input(now: f64, dt: f32, sample: PointerSample, screen: Vec2) -> FrameInput {
    FrameInput {
        now,
        dt,
        pointer: sample.position.map(|p| glam::vec2(p.x, p.y)),
        pressed: sample.pressed,
        screen: glam::vec2(screen.x, screen.y),
    }
}

pub struct GameState {
    session: Session,
    input_mode: InputMode,
    touch_seen: bool,
    drone_draw: DroneDrawConfig,
    drone_overlay: DroneOverlay,
}

impl GameState {
    pub async fn new() -> Self {
        let (scene, scene_source, scene_err) =
            resolve_scene(assets::load_optional_string(SCENE_ASSET).await);
        if let Some(err) = scene_err {
            log_warn(&format!("{SCENE_ASSET} rejected: {err}"));
        }
        log_info(&format!(
            "scene: {} ({} landmarks, {} points of interest)",
            describe_source(scene_source),
            scene.landmarks.len(),
            scene.points_of_interest.len()
        ));

        let (layout, layout_source, layout_err) =
            resolve_layout(assets::load_optional_string(LAYOUT_ASSET).await, &scene);
        if let Some(err) = layout_err {
            log_warn(&format!("{LAYOUT_ASSET} rejected: {err}"));
        }
        log_info(&format!(
            "layout: {} ({} structures)",
            describe_source(layout_source),
            layout.len()
        ));

        let sprite = assets::load_optional_texture(DRONE_SPRITE_ASSET).await.loaded();
        let drone_overlay = DroneOverlay::new(sprite);
        if !drone_overlay.has_sprite() {
            log_info("drone overlay: drawing vector fallback");
        }

        let session = Session::new(scene, layout)
            .with_intro_callback(Box::new(|| log_info("camera: intro finished")));

        Self {
            session,
            input_mode: InputMode::select(screen_width(), false),
            touch_seen: false,
            drone_draw: DroneDrawConfig::default(),
            drone_overlay,
        }
    }

    pub fn start(&mut self, now: f64) {
        self.session.start(now);
        self.sync_overlay_ui(now);
    }

    fn apply_pending_ui_actions(&mut self, now: f64) {
        if take_pending_shutdown() {
            self.session.shutdown();
            log_info("scene: shut down");
        }
        if take_pending_reset() {
            self.session.reset();
            self.session.start(now);
            log_info("scene: restarted");
        }
    }

    fn update_input_mode(&mut self, touches: &[Touch]) -> PointerSample {
        self.touch_seen |= !touches.is_empty();
        let mode = InputMode::select(screen_width(), self.touch_seen);
        if mode != self.input_mode {
            log_info(&format!("input: {:?}", mode));
            self.input_mode = mode;
        }
        match self.input_mode {
            InputMode::Touch => sample_touch(touches),
            InputMode::Mouse => sample_mouse(),
        }
    }

    pub fn update(&mut self, now: f64, dt: f32) {
        self.apply_pending_ui_actions(now);
        if !self.session.is_alive() {
            return;
        }

        let sample = self.update_input_mode(&touches());
        let input = frame_input(now, dt, sample, vec2(screen_width(), screen_height()));
        for event in self.session.update(&input) {
            self.log_event(event);
        }
        self.sync_overlay_ui(now);
    }

    fn log_event(&self, event: SessionEvent) {
        match event {
            SessionEvent::DroneRevealed => log_info("camera: drone revealed"),
            SessionEvent::IntroFinished => log_info("camera: interactive"),
            SessionEvent::PanelShown(index) => {
                if let Some(point) = self.session.scene().points_of_interest.get(index) {
                    log_info(&format!("panel: showing {}", point.id));
                }
            }
            SessionEvent::PanelHidden => log_info("panel: hidden"),
            SessionEvent::Intro(_) => {}
        }
    }

    fn sync_overlay_ui(&self, now: f64) {
        let mut ui = overlay_ui();
        match self.session.visible_panel() {
            Some(point) => {
                if !ui.panel_present || ui.panel_id != point.id {
                    ui.panel_id = point.id.clone();
                    ui.panel_title = point.title.clone();
                    ui.panel_subtitle = point.subtitle.clone();
                    ui.panel_description = point.description.clone();
                }
                ui.panel_present = true;
            }
            None => ui.panel_present = false,
        }

        let intro = self.session.intro();
        ui.intro_finished = self.session.camera_phase() == cityflight_core::CameraPhase::Interactive;
        ui.logo_visible = intro.logo_visible();
        ui.hint_visible = intro.hint_visible();
        ui.loading_progress = intro.loading_progress(now);

        let Orbit {
            azimuth_deg,
            polar_deg,
        } = self.session.orbit();
        ui.orbit_azimuth_deg = azimuth_deg;
        ui.orbit_polar_deg = polar_deg;
        let Tilt {
            pitch_deg,
            roll_deg,
        } = self.session.tilt();
        ui.tilt_pitch_deg = pitch_deg;
        ui.tilt_roll_deg = roll_deg;
        ui.touch_mode = self.input_mode == InputMode::Touch;
    }

    pub fn render(&self, now: f64) {
        clear_background(SKY_COLOR);

        set_camera(&scene_camera(&self.session.camera()));
        let scene = self.session.scene();
        draw_ground(scene);
        draw_landmarks(scene);
        draw_structures(self.session.layout());
        draw_points_of_interest(&scene.points_of_interest, self.session.visible_panel());
        if self.session.drone_visible() {
            draw_drone(self.session.drone(), &self.drone_draw);
        }

        set_default_camera();
        if self.session.drone_visible() {
            self.drone_overlay
                .draw(self.session.orbit(), self.session.tilt());
        }
        if let Some(point) = self.session.visible_panel() {
            draw_info_panel(point);
        }
        let intro = self.session.intro();
        draw_hint(intro, now, self.input_mode);
        draw_intro(intro, now);
    }
}

pub async fn run() {
    install_panic_hook();
    let mut game = GameState::new().await;
    game.start(get_time());

    loop {
        let now = get_time();
        game.update(now, get_frame_time());
        game.render(now);

        next_frame().await;
    }
}

#[cfg(target_arch = "wasm32")]
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if let Some(location) = info.location() {
            miniquad::error!("panic at {}:{}: {}", location.file(), location.line(), msg);
        } else {
            miniquad::error!("panic: {}", msg);
        }
    }));
}

#[cfg(not(target_arch = "wasm32"))]
fn install_panic_hook() {}
