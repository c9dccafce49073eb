use serde::{Deserialize, Serialize};

// ── Primitives ──────────────────────────────────────────────

pub type FighterId = i32;
pub type Tick = u32;
pub type Seed = u64;

/// Axis-aligned rectangle; every collision query goes through `overlaps`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Strict overlap: rectangles that merely touch do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

// ── Intent ──────────────────────────────────────────────────

/// Button bitmask constants.
pub mod button {
    pub const LEFT: u8 = 1;
    pub const RIGHT: u8 = 2;
    pub const JUMP: u8 = 4;
    pub const ATTACK: u8 = 8;
    pub const SPECIAL: u8 = 16;
}

/// One decision policy output for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub buttons: u8,
}

pub const NULL_INTENT: Intent = Intent { buttons: 0 };

// ── Fighter ─────────────────────────────────────────────────

/// Facing direction: Right = 1, Left = -1.
pub mod facing {
    pub const RIGHT: i32 = 1;
    pub const LEFT: i32 = -1;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub id: FighterId,
    pub x: f64,
    pub y: f64,
    pub vy: f64,
    /// Fixed at spawn from the fighter's side; specials inherit it.
    pub facing: i32,
    pub health: i32,
    pub jumping: bool,
    pub attacking: bool,
    pub attack_cooldown: i32,
    pub special_cooldown: i32,
    pub projectiles: Vec<Projectile>,
}

// ── Projectile ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub direction: i32,
}

// ── Match state ─────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Active,
    Over,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub tick: Tick,
    pub fighters: [Fighter; 2],
    pub phase: MatchPhase,
    /// FighterId of the winner once Over, -1 while Active.
    pub winner: i32,
}

// ── Config ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub seed: Seed,
    pub arena: Arena,
    pub tick_rate: u32,
}
