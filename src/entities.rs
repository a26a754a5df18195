/// All game entity types — pure data, no logic.
///
/// Positions and sizes are pixels in the fixed 800×600 playfield declared
/// in `compute`; the renderer scales them to the terminal it runs in.

use rand_pcg::Pcg32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Gameplay entities ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity — driven by gravity and jump impulses.
    /// Positive is downward (screen coordinates).
    pub velocity: f32,
}

/// The one patrolling enemy.  It is a singleton: being shot relocates it
/// off-screen left instead of removing it.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Horizontal direction, −1.0 or +1.0.
    pub dir: f32,
}

#[derive(Clone, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
}

/// A player shot travelling right at constant speed.
#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
}

/// Short-lived cosmetic trail sparkle shed by bullets.  No collision role.
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: (u8, u8, u8),
    /// Ticks lived so far.
    pub age: u32,
    /// Removed once `age` reaches this.
    pub lifetime: u32,
}

// ── Background decoration ─────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Static tuft of grass.  Its per-frame lean is applied at render time
/// only and never written back.
#[derive(Clone, Debug)]
pub struct GrassBlade {
    pub x: f32,
    pub y: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire state of one session.  Owns every entity collection, the
/// score and the RNG; `compute::tick` is the only writer.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemy: Enemy,
    pub stars: Vec<Star>,
    pub bullets: Vec<Bullet>,
    /// Cosmetic bullet-trail particles.
    pub particles: Vec<Particle>,
    pub clouds: Vec<Cloud>,
    pub grass: Vec<GrassBlade>,
    pub score: u32,
    pub status: GameStatus,
    /// Session RNG — seeded once in `init_state`, so a fixed seed replays
    /// an identical session.
    pub rng: Pcg32,
}
