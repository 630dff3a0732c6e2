use cityflight_core::{InputMode, IntroTimeline, Orbit, PointOfInterest, Tilt};
use d_gen_layout::palette;
use macroquad::prelude::*;

use crate::scene_draw::{SKY_COLOR, color_from_rgb};

const TITLE: &str = "cityflight";
const TITLE_FONT_SIZE: f32 = 48.0;
const LOADING_BAR_WIDTH: f32 = 240.0;
const LOADING_BAR_HEIGHT: f32 = 4.0;

const PANEL_MAX_WIDTH: f32 = 420.0;
const PANEL_MARGIN: f32 = 16.0;
const PANEL_PADDING: f32 = 16.0;
const PANEL_ALPHA: f32 = 0.85;
const PANEL_TITLE_SIZE: u16 = 28;
const PANEL_SUBTITLE_SIZE: u16 = 20;
const PANEL_BODY_SIZE: u16 = 18;
const LINE_SPACING: f32 = 1.3;

const HINT_FONT_SIZE: u16 = 20;
const NARROW_SCREEN_PX: f32 = 768.0;
const WIDGET_SIZE_PX: f32 = 160.0;
const WIDGET_SIZE_NARROW_PX: f32 = 96.0;

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, color.a * alpha.clamp(0.0, 1.0))
}

fn text_width(text: &str, font_size: u16) -> f32 {
    measure_text(text, None, font_size, 1.0).width
}

/// Greedy word wrap. A single word wider than `max_width` gets a line of its own.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_owned()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn draw_intro(intro: &IntroTimeline, now: f64) {
    if !intro.logo_visible() {
        return;
    }
    let alpha = intro.logo_opacity(now);
    let (width, height) = (screen_width(), screen_height());
    draw_rectangle(0.0, 0.0, width, height, with_alpha(SKY_COLOR, alpha));

    let accent = color_from_rgb(palette::DRONE_BODY);
    let title_width = measure_text(TITLE, None, TITLE_FONT_SIZE as u16, 1.0).width;
    draw_text(
        TITLE,
        (width - title_width) * 0.5,
        height * 0.5,
        TITLE_FONT_SIZE,
        with_alpha(WHITE, alpha),
    );

    let bar_x = (width - LOADING_BAR_WIDTH) * 0.5;
    let bar_y = height * 0.5 + TITLE_FONT_SIZE * 0.5;
    draw_rectangle(
        bar_x,
        bar_y,
        LOADING_BAR_WIDTH,
        LOADING_BAR_HEIGHT,
        with_alpha(Color::new(1.0, 1.0, 1.0, 0.15), alpha),
    );
    draw_rectangle(
        bar_x,
        bar_y,
        LOADING_BAR_WIDTH * intro.loading_progress(now),
        LOADING_BAR_HEIGHT,
        with_alpha(accent, alpha),
    );
}

pub fn hint_text(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Mouse => "Hold the mouse button to fly, move the pointer to steer",
        InputMode::Touch => "Touch and hold to fly, drag to steer",
    }
}

pub fn draw_hint(intro: &IntroTimeline, now: f64, mode: InputMode) {
    if !intro.hint_visible() {
        return;
    }
    let text = hint_text(mode);
    let width = text_width(text, HINT_FONT_SIZE);
    draw_text(
        text,
        (screen_width() - width) * 0.5,
        screen_height() - PANEL_MARGIN * 2.0,
        HINT_FONT_SIZE as f32,
        with_alpha(WHITE, intro.hint_opacity(now)),
    );
}

pub fn draw_info_panel(point: &PointOfInterest) {
    let panel_width = PANEL_MAX_WIDTH.min(screen_width() - PANEL_MARGIN * 2.0);
    let inner_width = panel_width - PANEL_PADDING * 2.0;
    let body = wrap_text(&point.description, inner_width, |line| {
        text_width(line, PANEL_BODY_SIZE)
    });

    let title_height = PANEL_TITLE_SIZE as f32 * LINE_SPACING;
    let subtitle_height = PANEL_SUBTITLE_SIZE as f32 * LINE_SPACING;
    let body_line = PANEL_BODY_SIZE as f32 * LINE_SPACING;
    let panel_height =
        PANEL_PADDING * 2.0 + title_height + subtitle_height + body_line * body.len() as f32;
    let x = PANEL_MARGIN;
    let y = screen_height() - PANEL_MARGIN - panel_height;

    draw_rectangle(
        x,
        y,
        panel_width,
        panel_height,
        with_alpha(color_from_rgb(palette::PANEL_BACKGROUND), PANEL_ALPHA),
    );
    draw_rectangle(x, y, 3.0, panel_height, color_from_rgb(palette::DRONE_BODY));

    let mut baseline = y + PANEL_PADDING + PANEL_TITLE_SIZE as f32;
    draw_text(&point.title, x + PANEL_PADDING, baseline, PANEL_TITLE_SIZE as f32, WHITE);
    baseline += subtitle_height;
    draw_text(
        &point.subtitle,
        x + PANEL_PADDING,
        baseline,
        PANEL_SUBTITLE_SIZE as f32,
        color_from_rgb(palette::DRONE_BODY),
    );
    for line in &body {
        baseline += body_line;
        draw_text(line, x + PANEL_PADDING, baseline, PANEL_BODY_SIZE as f32, LIGHTGRAY);
    }
}

/// Top-right square holding the drone overlay, smaller on narrow screens.
pub fn widget_rect(screen: Vec2) -> Rect {
    let size = if screen.x < NARROW_SCREEN_PX {
        WIDGET_SIZE_NARROW_PX
    } else {
        WIDGET_SIZE_PX
    };
    Rect::new(screen.x - size - PANEL_MARGIN, PANEL_MARGIN, size, size)
}

/// Screen rotation of the overlay model. The orbit camera circles the model, so the model
/// turns the other way on screen.
pub fn sprite_rotation(orbit: Orbit) -> f32 {
    -orbit.azimuth_deg.to_radians()
}

/// Foreshortening of the overlay model: x from roll, y from the orbit's polar angle and pitch.
pub fn sprite_scale(orbit: Orbit, tilt: Tilt) -> Vec2 {
    vec2(
        tilt.roll_deg.to_radians().cos(),
        orbit.polar_deg.to_radians().sin() * tilt.pitch_deg.to_radians().cos(),
    )
}

/// Where the nose marker points on screen for a given rotation. Screen y grows downwards.
pub fn nose_direction(rotation: f32) -> Vec2 {
    let (sin, cos) = rotation.sin_cos();
    vec2(sin, -cos)
}

pub struct DroneOverlay {
    sprite: Option<Texture2D>,
}

impl DroneOverlay {
    pub fn new(sprite: Option<Texture2D>) -> Self {
        Self { sprite }
    }

    pub fn has_sprite(&self) -> bool {
        self.sprite.is_some()
    }

    pub fn draw(&self, orbit: Orbit, tilt: Tilt) {
        let rect = widget_rect(vec2(screen_width(), screen_height()));
        let center = rect.center();
        let rotation = sprite_rotation(orbit);
        let scale = sprite_scale(orbit, tilt);

        draw_circle(
            center.x,
            center.y,
            rect.w * 0.5,
            with_alpha(color_from_rgb(palette::PANEL_BACKGROUND), 0.6),
        );

        match &self.sprite {
            Some(texture) => {
                let size = vec2(rect.w * scale.x, rect.h * scale.y);
                draw_texture_ex(
                    texture,
                    center.x - size.x * 0.5,
                    center.y - size.y * 0.5,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(size),
                        rotation,
                        ..Default::default()
                    },
                );
            }
            None => draw_vector_drone(center, rect.w * 0.5, rotation, scale),
        }

        let readout = format!("{:>3.0}° / {:.1}°", orbit.azimuth_deg, orbit.polar_deg);
        let width = text_width(&readout, 14);
        draw_text(
            &readout,
            center.x - width * 0.5,
            rect.bottom() + 14.0,
            14.0,
            with_alpha(WHITE, 0.7),
        );
    }
}

fn draw_vector_drone(center: Vec2, radius: f32, rotation: f32, scale: Vec2) {
    let frame = color_from_rgb(palette::DRONE_FRAME);
    let body = color_from_rgb(palette::DRONE_BODY);
    let project = |local: Vec2| -> Vec2 {
        let (sin, cos) = rotation.sin_cos();
        let rotated = vec2(local.x * cos - local.y * sin, local.x * sin + local.y * cos);
        center + rotated * scale
    };

    let reach = radius * 0.6;
    for corner in [vec2(-1.0, -1.0), vec2(1.0, -1.0), vec2(1.0, 1.0), vec2(-1.0, 1.0)] {
        let hub = project(corner.normalize() * reach);
        draw_line(center.x, center.y, hub.x, hub.y, radius * 0.08, frame);
        draw_circle_lines(hub.x, hub.y, radius * 0.26, radius * 0.05, frame);
    }
    draw_circle(center.x, center.y, radius * 0.24, body);

    let nose = center + nose_direction(rotation) * scale * radius * 0.2;
    draw_line(center.x, center.y, nose.x, nose.y, radius * 0.06, frame);
}
