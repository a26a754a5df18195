/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands, scaling the 800×600 playfield onto the
/// current terminal size.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use rand::{thread_rng, Rng};

use star_collector::compute::{BULLET_SIZE, ENEMY_SIZE, HEIGHT, PLAYER_SIZE, STAR_SIZE, WIDTH};
use star_collector::entities::{GameState, GameStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_CLOUD: Color = Color::Grey;
const C_GRASS: Color = Color::DarkGreen;
const C_STAR: Color = Color::Yellow;
const C_ENEMY: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_BULLET: Color = Color::Rgb { r: 255, g: 165, b: 0 };
const C_HUD_SCORE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// Map a playfield coordinate to a terminal cell.  Row 0 carries the HUD
/// and the last row the controls hint, so the play area spans the rows
/// between them.
fn to_cell(x: f32, y: f32, cols: u16, rows: u16) -> (u16, u16) {
    let play_rows = rows.saturating_sub(2).max(1);
    let cx = (x / WIDTH * cols as f32) as i32;
    let cy = 1 + (y / HEIGHT * play_rows as f32) as i32;
    (
        cx.clamp(0, (cols as i32 - 1).max(0)) as u16,
        cy.clamp(1, (rows as i32 - 2).max(1)) as u16,
    )
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    // Back-to-front, matching the scene's depth: sky decoration first,
    // then effects and actors, HUD text last.
    draw_clouds(out, state, cols, rows)?;
    draw_grass(out, state, cols, rows)?;
    draw_particles(out, state, cols, rows)?;
    draw_bullets(out, state, cols, rows)?;
    draw_stars(out, state, cols, rows)?;
    draw_enemy(out, state, cols, rows)?;
    draw_player(out, state, cols, rows)?;
    draw_hud(out, state)?;
    draw_controls_hint(out, rows)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_clouds<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_CLOUD))?;
    for cloud in &state.clouds {
        // Clip to the playfield — clouds drift off the left edge.
        let left = cloud.x.max(0.0);
        let right = (cloud.x + cloud.size).min(WIDTH - 1.0);
        if left >= right {
            continue;
        }
        let (c0, r) = to_cell(left, cloud.y, cols, rows);
        let (c1, _) = to_cell(right, cloud.y, cols, rows);
        let w = (c1.saturating_sub(c0) as usize).max(1);
        out.queue(cursor::MoveTo(c0, r))?;
        out.queue(Print("░".repeat(w)))?;
    }
    Ok(())
}

fn draw_grass<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    out.queue(style::SetForegroundColor(C_GRASS))?;
    for blade in &state.grass {
        let (c, r) = to_cell(blade.x, blade.y, cols, rows);
        // Per-frame lean, render-only — never written back to state.
        let glyph = match rng.gen_range(0..3) {
            0 => "/",
            1 => "|",
            _ => "\\",
        };
        out.queue(cursor::MoveTo(c, r))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Effects ───────────────────────────────────────────────────────────────────

fn draw_particles<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    for p in &state.particles {
        if p.x < 0.0 || p.x >= WIDTH || p.y < 0.0 || p.y >= HEIGHT {
            continue;
        }
        let (c, r) = to_cell(p.x, p.y, cols, rows);
        let (cr, cg, cb) = p.color;
        out.queue(style::SetForegroundColor(Color::Rgb { r: cr, g: cg, b: cb }))?;
        // Dimmer glyph once past half-life
        let glyph = if p.age * 2 < p.lifetime { "•" } else { "·" };
        out.queue(cursor::MoveTo(c, r))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_bullets<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BULLET))?;
    for bullet in &state.bullets {
        let (c, r) = to_cell(
            bullet.x + BULLET_SIZE / 2.0,
            bullet.y + BULLET_SIZE / 2.0,
            cols,
            rows,
        );
        out.queue(cursor::MoveTo(c, r))?;
        out.queue(Print("●"))?;
    }
    Ok(())
}

// ── Actors ────────────────────────────────────────────────────────────────────

fn draw_stars<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STAR))?;
    for star in &state.stars {
        let (c, r) = to_cell(
            star.x + STAR_SIZE / 2.0,
            star.y + STAR_SIZE / 2.0,
            cols,
            rows,
        );
        out.queue(cursor::MoveTo(c, r))?;
        out.queue(Print("★"))?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let e = &state.enemy;
    // Off-screen after a relocation — nothing to draw until it patrols back.
    if e.x + ENEMY_SIZE <= 0.0 {
        return Ok(());
    }
    let (c, r) = to_cell(e.x + ENEMY_SIZE / 2.0, e.y + ENEMY_SIZE / 2.0, cols, rows);
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    out.queue(cursor::MoveTo(c.saturating_sub(1), r))?;
    out.queue(Print("(✖)"))?;
    Ok(())
}

fn draw_player<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let p = &state.player;
    let (c, r) = to_cell(p.x + PLAYER_SIZE / 2.0, p.y + PLAYER_SIZE / 2.0, cols, rows);
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(c.saturating_sub(2), r))?;
    out.queue(Print("(••)"))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", state.score)))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   ↑ / W : Jump   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", state.score);

    let lines: &[&str] = &[
        "╔════════════════════╗",
        "║    GAME  OVER      ║",
        "╚════════════════════╝",
    ];

    let cx = cols / 2;
    let total_rows = lines.len() + 2; // box + score + hint
    let start_row = (rows / 2).saturating_sub(total_rows as u16 / 2);

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let hint = "R - Play Again  Q - Quit";
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
