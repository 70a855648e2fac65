//! Clickable controls
//!
//! The UI collaborator owns layout; the session only needs to know which
//! rectangle is which control and in which phase it is live.

use glam::Vec2;

use crate::sim::{Aabb, GamePhase};

/// Reference screen the default layout is centred on
pub const SCREEN_WIDTH: f32 = 1200.0;
pub const SCREEN_HEIGHT: f32 = 900.0;

/// Default button extent
const BUTTON_SIZE: Vec2 = Vec2::new(240.0, 44.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Menu: begin the run
    Start,
    /// Menu: toggle background music
    Sound,
    /// Pause menu: back to the game
    Resume,
    /// Pause menu / game over: quit
    Exit,
    /// Game over: new run
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Region {
    phase: GamePhase,
    control: Control,
    bounds: Aabb,
}

/// Control rectangles per phase
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlMap {
    regions: Vec<Region>,
}

impl ControlMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control; later registrations win where rectangles overlap
    pub fn with(mut self, phase: GamePhase, control: Control, bounds: Aabb) -> Self {
        self.regions.push(Region {
            phase,
            control,
            bounds,
        });
        self
    }

    /// Buttons stacked on the screen centre line
    pub fn default_layout() -> Self {
        let button = |y_offset: f32| {
            let center = Vec2::new(SCREEN_WIDTH * 0.5, SCREEN_HEIGHT * 0.5 + y_offset);
            Aabb::new(center - BUTTON_SIZE * 0.5, BUTTON_SIZE)
        };
        Self::new()
            .with(GamePhase::Menu, Control::Start, button(-50.0))
            .with(GamePhase::Menu, Control::Sound, button(20.0))
            .with(GamePhase::Paused, Control::Resume, button(50.0))
            .with(GamePhase::Paused, Control::Exit, button(130.0))
            .with(GamePhase::GameOver, Control::Restart, button(50.0))
            .with(GamePhase::GameOver, Control::Exit, button(130.0))
    }

    /// Control under `point` that is live in `phase`
    pub fn hit(&self, phase: GamePhase, point: Vec2) -> Option<Control> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.phase == phase && r.bounds.contains(point))
            .map(|r| r.control)
    }

    /// Centre of a control's rectangle, for drivers that synthesise clicks
    pub fn center_of(&self, phase: GamePhase, control: Control) -> Option<Vec2> {
        self.regions
            .iter()
            .find(|r| r.phase == phase && r.control == control)
            .map(|r| r.bounds.center())
    }
}
