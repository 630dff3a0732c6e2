use crate::timers::TimerTable;

pub const LOGO_OVERLAY_SECS: f64 = 3.5;
pub const LOGO_FADE_SECS: f64 = 0.5;
pub const HINT_DELAY_SECS: f64 = 0.2;
pub const HINT_VISIBLE_SECS: f64 = 4.5;
pub const HINT_FADE_SECS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroCue {
    FadeLogo,
    HideLogo,
    ShowHint,
    FadeHint,
    HideHint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Overlay {
    Hidden,
    Shown,
    Fading { since: f64, secs: f64 },
}

impl Overlay {
    fn opacity(&self, now: f64) -> f32 {
        match *self {
            Overlay::Hidden => 0.0,
            Overlay::Shown => 1.0,
            Overlay::Fading { since, secs } => (1.0 - (now - since) / secs).clamp(0.0, 1.0) as f32,
        }
    }

    fn is_visible(&self) -> bool {
        !matches!(self, Overlay::Hidden)
    }
}

/// The logo splash with its loading bar, then the control hint after the camera intro.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroTimeline {
    timers: TimerTable<IntroCue>,
    started: Option<f64>,
    logo: Overlay,
    hint: Overlay,
}

impl Default for IntroTimeline {
    fn default() -> Self {
        Self {
            timers: TimerTable::new(),
            started: None,
            logo: Overlay::Hidden,
            hint: Overlay::Hidden,
        }
    }
}

impl IntroTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: f64) {
        if self.started.is_some() {
            return;
        }
        self.started = Some(now);
        self.logo = Overlay::Shown;
        self.timers
            .schedule(IntroCue::FadeLogo, now + LOGO_OVERLAY_SECS - LOGO_FADE_SECS);
        self.timers.schedule(IntroCue::HideLogo, now + LOGO_OVERLAY_SECS);
    }

    /// Called when the camera intro hands over to the player.
    pub fn camera_intro_finished(&mut self, now: f64) {
        let hide_at = now + HINT_DELAY_SECS + HINT_VISIBLE_SECS;
        self.timers.schedule(IntroCue::ShowHint, now + HINT_DELAY_SECS);
        self.timers.schedule(IntroCue::FadeHint, hide_at - HINT_FADE_SECS);
        self.timers.schedule(IntroCue::HideHint, hide_at);
    }

    pub fn update(&mut self, now: f64) -> Vec<IntroCue> {
        let due = self.timers.drain_due(now);
        for &(cue, at) in &due {
            match cue {
                IntroCue::FadeLogo => {
                    self.logo = Overlay::Fading {
                        since: at,
                        secs: LOGO_FADE_SECS,
                    }
                }
                IntroCue::HideLogo => self.logo = Overlay::Hidden,
                IntroCue::ShowHint => self.hint = Overlay::Shown,
                IntroCue::FadeHint => {
                    self.hint = Overlay::Fading {
                        since: at,
                        secs: HINT_FADE_SECS,
                    }
                }
                IntroCue::HideHint => self.hint = Overlay::Hidden,
            }
        }
        due.into_iter().map(|(cue, _)| cue).collect()
    }

    /// Loading bar fill in `[0, 1]`, linear over the splash duration.
    pub fn loading_progress(&self, now: f64) -> f32 {
        match self.started {
            Some(started) => ((now - started) / LOGO_OVERLAY_SECS).clamp(0.0, 1.0) as f32,
            None => 0.0,
        }
    }

    pub fn logo_opacity(&self, now: f64) -> f32 {
        self.logo.opacity(now)
    }

    pub fn logo_visible(&self) -> bool {
        self.logo.is_visible()
    }

    pub fn hint_opacity(&self, now: f64) -> f32 {
        self.hint.opacity(now)
    }

    pub fn hint_visible(&self) -> bool {
        self.hint.is_visible()
    }

    pub fn cancel(&mut self) {
        self.timers.clear();
    }
}
