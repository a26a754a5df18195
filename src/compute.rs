/// Pure game-logic functions.
///
/// The whole simulation lives in `tick`: one call advances every entity by
/// exactly one fixed timestep, mutating the `GameState` in place.  All
/// randomness flows through the `Pcg32` stored in the state, so a fixed
/// seed replays an identical session.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::entities::{
    Bullet, Cloud, Enemy, GameState, GameStatus, GrassBlade, Particle, Player, Star,
};

// ── World constants ──────────────────────────────────────────────────────────

/// Logical playfield size in pixels.  The renderer scales this onto
/// whatever terminal it finds itself in.
pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 600.0;

pub const PLAYER_SIZE: f32 = 40.0;
pub const PLAYER_SPEED: f32 = 5.0;
/// Upward jump impulse (screen y grows downward).
pub const PLAYER_JUMP: f32 = -15.0;
pub const GRAVITY: f32 = 0.8;
/// Lowest y the player can occupy — standing on the grass.
pub const GROUND_Y: f32 = HEIGHT - PLAYER_SIZE;

pub const STAR_SIZE: f32 = 20.0;
/// Live star target.  Collecting one immediately spawns a replacement.
pub const STAR_COUNT: usize = 5;

pub const ENEMY_SIZE: f32 = 30.0;
pub const ENEMY_SPEED: f32 = 3.0;

pub const BULLET_SIZE: f32 = 8.0;
pub const BULLET_SPEED: f32 = 10.0;

/// Chance per tick that a live bullet sheds one trail particle.
pub const TRAIL_CHANCE: f64 = 0.3;
pub const TRAIL_LIFETIME: u32 = 20;
pub const TRAIL_COLOR: (u8, u8, u8) = (255, 165, 0);

pub const CLOUD_COUNT: usize = 5;
pub const CLOUD_SPEED: f32 = 0.5;

pub const GRASS_HEIGHT: f32 = 20.0;
pub const GRASS_SPACING: f32 = 5.0;

// ── Tick input ───────────────────────────────────────────────────────────────

/// Snapshot of the movement keys held down during this tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// One-shot events that fired since the previous tick.  Quit never reaches
/// the simulation; the caller simply stops ticking.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickEvents {
    pub jump: bool,
    pub fire: bool,
}

// ── Constructors ─────────────────────────────────────────────────────────────

fn random_star(rng: &mut Pcg32) -> Star {
    Star {
        x: rng.gen_range(0.0..(WIDTH - STAR_SIZE)),
        y: rng.gen_range(0.0..HEIGHT / 2.0),
    }
}

/// Build the initial state for one session.  Every random placement comes
/// from `seed`, so two sessions with the same seed are identical.
pub fn init_state(seed: u64) -> GameState {
    let mut rng = Pcg32::seed_from_u64(seed);

    let stars = (0..STAR_COUNT).map(|_| random_star(&mut rng)).collect();

    let clouds = (0..CLOUD_COUNT)
        .map(|_| Cloud {
            x: rng.gen_range(0.0..WIDTH),
            y: rng.gen_range(0.0..HEIGHT / 2.0),
            size: rng.gen_range(50.0..100.0),
        })
        .collect();

    // One blade every GRASS_SPACING px, each with a one-time height jitter.
    let mut grass = Vec::new();
    let mut x = 0.0;
    while x < WIDTH {
        grass.push(GrassBlade {
            x,
            y: HEIGHT - GRASS_HEIGHT + rng.gen_range(-5.0..5.0),
        });
        x += GRASS_SPACING;
    }

    let enemy = Enemy {
        x: rng.gen_range(0.0..(WIDTH - ENEMY_SIZE)),
        y: rng.gen_range(0.0..(HEIGHT - ENEMY_SIZE)),
        dir: if rng.gen_bool(0.5) { -1.0 } else { 1.0 },
    };

    GameState {
        player: Player {
            x: WIDTH / 2.0,
            y: GROUND_Y,
            velocity: 0.0,
        },
        enemy,
        stars,
        bullets: Vec::new(),
        particles: Vec::new(),
        clouds,
        grass,
        score: 0,
        status: GameStatus::Playing,
        rng,
    }
}

// ── Collision ────────────────────────────────────────────────────────────────

/// Axis-aligned bounding-box overlap between two squares.
fn overlaps(ax: f32, ay: f32, a: f32, bx: f32, by: f32, b: f32) -> bool {
    ax < bx + b && ax + a > bx && ay < by + b && ay + a > by
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the simulation by one fixed timestep.
///
/// Mutates `state` in place and reports whether the session continues.
/// The step order is load-bearing: collision checks see the positions
/// entities hold *after* their movement phase this tick.
pub fn tick(state: &mut GameState, held: &HeldKeys, events: &TickEvents) -> GameStatus {
    if state.status == GameStatus::GameOver {
        return GameStatus::GameOver;
    }

    // ── 0. One-shot events ───────────────────────────────────────────────────
    // A jump only registers while grounded; a request made mid-air is
    // dropped, not queued.
    if events.jump && state.player.y >= GROUND_Y {
        state.player.velocity = PLAYER_JUMP;
    }
    if events.fire {
        state.bullets.push(Bullet {
            x: state.player.x + PLAYER_SIZE / 2.0 - BULLET_SIZE / 2.0,
            y: state.player.y + PLAYER_SIZE / 2.0 - BULLET_SIZE / 2.0,
        });
    }

    // ── 1. Player horizontal movement ────────────────────────────────────────
    if held.left && state.player.x > 0.0 {
        state.player.x -= PLAYER_SPEED;
    }
    if held.right && state.player.x < WIDTH - PLAYER_SIZE {
        state.player.x += PLAYER_SPEED;
    }

    // ── 2. Player vertical physics ───────────────────────────────────────────
    state.player.velocity += GRAVITY;
    state.player.y += state.player.velocity;
    if state.player.y > GROUND_Y {
        state.player.y = GROUND_Y;
        state.player.velocity = 0.0;
    }

    // ── 3. Enemy patrol ──────────────────────────────────────────────────────
    state.enemy.x += ENEMY_SPEED * state.enemy.dir;
    if state.enemy.x <= 0.0 {
        state.enemy.x = 0.0;
        state.enemy.dir = 1.0;
    } else if state.enemy.x >= WIDTH - ENEMY_SIZE {
        state.enemy.x = WIDTH - ENEMY_SIZE;
        state.enemy.dir = -1.0;
    }

    // ── 4. Player ↔ enemy ────────────────────────────────────────────────────
    if overlaps(
        state.player.x,
        state.player.y,
        PLAYER_SIZE,
        state.enemy.x,
        state.enemy.y,
        ENEMY_SIZE,
    ) {
        state.status = GameStatus::GameOver;
        return GameStatus::GameOver;
    }

    // ── 5. Star collection ───────────────────────────────────────────────────
    // Rebuild instead of removing mid-iteration.  Several stars can be
    // collected in one tick; each is replaced, holding the count at
    // STAR_COUNT.
    let (px, py) = (state.player.x, state.player.y);
    let mut collected = 0u32;
    state.stars.retain(|s| {
        if overlaps(px, py, PLAYER_SIZE, s.x, s.y, STAR_SIZE) {
            collected += 1;
            false
        } else {
            true
        }
    });
    state.score += collected;
    while state.stars.len() < STAR_COUNT {
        let star = random_star(&mut state.rng);
        state.stars.push(star);
    }

    // ── 6. Particle aging ────────────────────────────────────────────────────
    state.particles.retain_mut(|p| {
        p.x += p.vx;
        p.y += p.vy;
        p.age += 1;
        p.age < p.lifetime
    });

    // ── 7. Bullets ───────────────────────────────────────────────────────────
    // Exit check runs before the hit check: a bullet crossing the right
    // edge is gone even if it would have clipped the enemy this tick.
    // An enemy relocation is visible to bullets processed later in the
    // same sweep.
    let mut i = 0;
    while i < state.bullets.len() {
        state.bullets[i].x += BULLET_SPEED;
        let (bx, by) = (state.bullets[i].x, state.bullets[i].y);

        if state.rng.gen_bool(TRAIL_CHANCE) {
            let size = state.rng.gen_range(2.0..4.0);
            let vx = state.rng.gen_range(-1.0..1.0);
            let vy = state.rng.gen_range(-1.0..1.0);
            state.particles.push(Particle {
                x: bx + BULLET_SIZE / 2.0,
                y: by + BULLET_SIZE / 2.0,
                vx,
                vy,
                size,
                color: TRAIL_COLOR,
                age: 0,
                lifetime: TRAIL_LIFETIME,
            });
        }

        if bx >= WIDTH {
            state.bullets.remove(i);
            continue;
        }
        if overlaps(bx, by, BULLET_SIZE, state.enemy.x, state.enemy.y, ENEMY_SIZE) {
            state.bullets.remove(i);
            state.enemy.x = -ENEMY_SIZE;
            state.enemy.y = state.rng.gen_range(0.0..(HEIGHT - ENEMY_SIZE));
            state.score += 2;
            continue;
        }
        i += 1;
    }

    // ── 8. Background drift ──────────────────────────────────────────────────
    let GameState { clouds, rng, .. } = state;
    for cloud in clouds.iter_mut() {
        cloud.x -= CLOUD_SPEED;
        if cloud.x + cloud.size < 0.0 {
            cloud.x = WIDTH;
            cloud.y = rng.gen_range(0.0..HEIGHT / 2.0);
        }
    }
    // Grass blades hold still; their lean is the renderer's own business.

    GameStatus::Playing
}
