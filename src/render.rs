//! Canvas-2d renderer
//!
//! Draws a read-only snapshot of the simulation after all of the tick's
//! mutations. Pixel-art look: flat fills, glow via canvas shadows,
//! particles fading with remaining life.

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::sim::GameState;

const COLOR_BG: &str = "#1a1c2c";
const COLOR_STRIPE: &str = "#5d275d";
const COLOR_PLAYER: &str = "#41a6f6";
const COLOR_PLAYER_CORE: &str = "#73eff7";
const COLOR_BULLET: &str = "#f4f4f4";
const COLOR_ENEMY: &str = "#b13e53";
const COLOR_ENEMY_CORE: &str = "#5d275d";
const COLOR_HEALTH_BACK: &str = "#3b5dc9";
const COLOR_TEXT: &str = "#f4f4f4";

/// Draw one full frame of the live run
pub fn draw_frame(ctx: &CanvasRenderingContext2d, state: &GameState, now_ms: f64) {
    draw_background(ctx, now_ms);
    draw_player(ctx, state);
    draw_bullets(ctx, state);
    draw_enemies(ctx, state);
    draw_particles(ctx, state);
    draw_hud(ctx, state);
}

fn draw_background(ctx: &CanvasRenderingContext2d, now_ms: f64) {
    ctx.set_fill_style_str(COLOR_BG);
    ctx.fill_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);

    // Slow horizontal stripe scroll for a sense of motion
    ctx.set_fill_style_str(COLOR_STRIPE);
    for i in 0..50 {
        let x = (i as f64 * 50.0 + now_ms * 0.05) % FIELD_WIDTH as f64;
        ctx.fill_rect(x, 0.0, 2.0, FIELD_HEIGHT as f64);
    }
}

fn draw_player(ctx: &CanvasRenderingContext2d, state: &GameState) {
    let p = &state.player;
    ctx.set_shadow_blur(10.0);
    ctx.set_shadow_color(COLOR_PLAYER);
    ctx.set_fill_style_str(COLOR_PLAYER);
    ctx.fill_rect(
        p.pos.x as f64,
        p.pos.y as f64,
        p.size.x as f64,
        p.size.y as f64,
    );
    ctx.set_shadow_blur(0.0);

    ctx.set_fill_style_str(COLOR_PLAYER_CORE);
    ctx.fill_rect(p.pos.x as f64 + 5.0, p.pos.y as f64 + 5.0, 10.0, 10.0);
}

fn draw_bullets(ctx: &CanvasRenderingContext2d, state: &GameState) {
    ctx.set_shadow_blur(8.0);
    ctx.set_shadow_color(COLOR_BULLET);
    ctx.set_fill_style_str(COLOR_BULLET);
    for b in &state.bullets {
        ctx.fill_rect(
            b.pos.x as f64,
            b.pos.y as f64,
            b.size.x as f64,
            b.size.y as f64,
        );
    }
    ctx.set_shadow_blur(0.0);
}

fn draw_enemies(ctx: &CanvasRenderingContext2d, state: &GameState) {
    for e in &state.enemies {
        ctx.set_shadow_blur(10.0);
        ctx.set_shadow_color(COLOR_ENEMY);
        ctx.set_fill_style_str(COLOR_ENEMY);
        ctx.fill_rect(
            e.pos.x as f64,
            e.pos.y as f64,
            e.size.x as f64,
            e.size.y as f64,
        );
        ctx.set_shadow_blur(0.0);

        ctx.set_fill_style_str(COLOR_ENEMY_CORE);
        ctx.fill_rect(e.pos.x as f64 + 5.0, e.pos.y as f64 + 5.0, 10.0, 10.0);

        // Health bar against the spawn-time maximum
        let bar = e.size.x * e.health_fraction();
        ctx.set_fill_style_str(COLOR_PLAYER);
        ctx.fill_rect(e.pos.x as f64, e.pos.y as f64 - 5.0, bar as f64, 3.0);
    }
}

fn draw_particles(ctx: &CanvasRenderingContext2d, state: &GameState) {
    for p in &state.particles {
        ctx.set_global_alpha(p.alpha() as f64);
        ctx.set_fill_style_str(p.color.css());
        ctx.fill_rect(
            p.pos.x as f64,
            p.pos.y as f64,
            p.size as f64,
            p.size as f64,
        );
    }
    ctx.set_global_alpha(1.0);
}

fn draw_hud(ctx: &CanvasRenderingContext2d, state: &GameState) {
    ctx.set_fill_style_str(COLOR_TEXT);
    ctx.set_font("bold 16px monospace");
    let _ = ctx.fill_text(&format!("Score: {}", state.score), 10.0, 25.0);
    let _ = ctx.fill_text(&format!("Wave: {}", state.wave), 10.0, 50.0);

    // Player health bar, bottom left
    let y = FIELD_HEIGHT as f64 - 30.0;
    ctx.set_fill_style_str(COLOR_HEALTH_BACK);
    ctx.fill_rect(10.0, y, 200.0, 20.0);
    ctx.set_fill_style_str(COLOR_PLAYER);
    ctx.fill_rect(10.0, y, 200.0 * state.player.health_fraction() as f64, 20.0);
    ctx.set_stroke_style_str(COLOR_TEXT);
    ctx.set_line_width(2.0);
    ctx.stroke_rect(10.0, y, 200.0, 20.0);

    ctx.set_fill_style_str(COLOR_TEXT);
    ctx.set_font("12px monospace");
    let _ = ctx.fill_text(
        &format!(
            "HP: {}/{}",
            state.player.health.ceil() as i32,
            state.player.max_health as i32
        ),
        15.0,
        FIELD_HEIGHT as f64 - 15.0,
    );
}
