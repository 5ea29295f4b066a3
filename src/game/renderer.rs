//! Arena Renderer
//!
//! Draws a `Snapshot` with macroquad. Sprites are optional: any sprite that
//! failed to load is drawn as a coloured box of the entity's size.
//!
//! The arena is y-up; the screen is y-down, so y is flipped here and
//! nowhere else.

use macroquad::prelude::*;
use tracing::{info, warn};
use crate::config::SpriteSettings;
use super::snapshot::{EntityView, Snapshot};

const BACKGROUND: Color = Color::new(0.08, 0.09, 0.11, 1.0);
const HERO_COLOR: Color = SKYBLUE;
const HERO_ATTACK_TINT: Color = GOLD;
const HERO_HIT_TINT: Color = Color::new(1.0, 0.4, 0.4, 1.0);
const MONSTER_COLOR: Color = Color::new(0.55, 0.2, 0.7, 1.0);
const TREASURE_COLOR: Color = YELLOW;
const LIFE_BAR_COLOR: Color = RED;

/// Loaded sprite textures (None = draw a box instead)
#[derive(Default)]
pub struct Sprites {
    pub hero: Option<Texture2D>,
    pub monster: Option<Texture2D>,
    pub treasure: Option<Texture2D>,
}

impl Sprites {
    /// Load whatever sprites the settings name
    pub async fn load(settings: &SpriteSettings) -> Self {
        Self {
            hero: load_sprite(settings.hero.as_deref()).await,
            monster: load_sprite(settings.monster.as_deref()).await,
            treasure: load_sprite(settings.treasure.as_deref()).await,
        }
    }
}

async fn load_sprite(path: Option<&str>) -> Option<Texture2D> {
    let path = path?;
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Nearest);
            info!(path, "loaded sprite");
            Some(tex)
        }
        Err(e) => {
            warn!(path, error = %e, "failed to load sprite, drawing boxes instead");
            None
        }
    }
}

/// Maps arena coordinates onto the window, letterboxed and y-flipped
#[derive(Debug, Clone, Copy)]
struct ScreenMap {
    scale: f32,
    offset: Vec2,
    arena_height: f32,
}

impl ScreenMap {
    fn new(snapshot: &Snapshot) -> Self {
        let scale = (screen_width() / snapshot.arena_width).min(screen_height() / snapshot.arena_height);
        let offset = vec2(
            (screen_width() - snapshot.arena_width * scale) / 2.0,
            (screen_height() - snapshot.arena_height * scale) / 2.0,
        );
        Self {
            scale,
            offset,
            arena_height: snapshot.arena_height,
        }
    }

    /// Screen-space rect (x, y, w, h) covering an entity
    fn rect(&self, view: &EntityView) -> (f32, f32, f32, f32) {
        let top_left = vec2(
            view.position.x - view.half_extents.x,
            self.arena_height - (view.position.y + view.half_extents.y),
        );
        let size = view.half_extents * 2.0 * self.scale;
        let p = self.offset + top_left * self.scale;
        (p.x, p.y, size.x, size.y)
    }

    /// Screen point at `(x, y)` units from the arena's top-left corner
    fn from_top_left(&self, x: f32, y: f32) -> Vec2 {
        self.offset + vec2(x, y) * self.scale
    }
}

fn draw_entity(map: &ScreenMap, view: &EntityView, sprite: Option<&Texture2D>, color: Color) {
    let (x, y, w, h) = map.rect(view);
    match sprite {
        Some(tex) => draw_texture_ex(
            tex,
            x,
            y,
            color,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        ),
        None => draw_rectangle(x, y, w, h, color),
    }
}

/// Draw one frame
pub fn draw_frame(snapshot: &Snapshot, sprites: &Sprites, show_overlay: bool) {
    clear_background(BLACK);
    let map = ScreenMap::new(snapshot);

    // Arena backdrop
    let arena_origin = map.from_top_left(0.0, 0.0);
    draw_rectangle(
        arena_origin.x,
        arena_origin.y,
        snapshot.arena_width * map.scale,
        snapshot.arena_height * map.scale,
        BACKGROUND,
    );

    if snapshot.is_game_over() {
        draw_game_over(snapshot, &map);
    } else {
        draw_playing(snapshot, sprites, &map);
    }

    if show_overlay {
        draw_debug_overlay(snapshot);
    }
}

fn draw_playing(snapshot: &Snapshot, sprites: &Sprites, map: &ScreenMap) {
    // Sprites keep their own colours unless tinted
    let untinted = |fallback: Color, sprite: &Option<Texture2D>| if sprite.is_some() { WHITE } else { fallback };

    for treasure in &snapshot.treasures {
        draw_entity(map, treasure, sprites.treasure.as_ref(), untinted(TREASURE_COLOR, &sprites.treasure));
    }
    for monster in &snapshot.monsters {
        draw_entity(map, monster, sprites.monster.as_ref(), untinted(MONSTER_COLOR, &sprites.monster));
    }

    let hero_color = if snapshot.hero_hit {
        HERO_HIT_TINT
    } else if snapshot.hero_attacking {
        HERO_ATTACK_TINT
    } else {
        untinted(HERO_COLOR, &sprites.hero)
    };
    draw_entity(map, &snapshot.hero, sprites.hero.as_ref(), hero_color);
    if snapshot.hero_attacking {
        let (x, y, w, h) = map.rect(&snapshot.hero);
        draw_rectangle_lines(x - 3.0, y - 3.0, w + 6.0, h + 6.0, 2.0, HERO_ATTACK_TINT);
    }

    // Life bar, top-left
    let (bar_w, bar_h) = snapshot.life_bar();
    let bar = map.from_top_left(0.0, 0.0);
    draw_rectangle(bar.x, bar.y, bar_w * map.scale, bar_h * map.scale, LIFE_BAR_COLOR);

    // Score below it
    let score_pos = map.from_top_left(10.0, 40.0);
    draw_text(&snapshot.score_text(), score_pos.x, score_pos.y, 24.0 * map.scale, WHITE);
}

fn draw_game_over(snapshot: &Snapshot, map: &ScreenMap) {
    let Some((headline, prompt)) = snapshot.message() else { return };

    let center = map.from_top_left(snapshot.arena_width / 2.0, snapshot.arena_height / 2.0);
    let headline_size = 64.0 * map.scale;
    let prompt_size = 24.0 * map.scale;

    let dims = measure_text(headline, None, headline_size as u16, 1.0);
    draw_text(headline, center.x - dims.width / 2.0, center.y, headline_size, WHITE);

    let dims = measure_text(prompt, None, prompt_size as u16, 1.0);
    draw_text(prompt, center.x - dims.width / 2.0, center.y + 40.0 * map.scale, prompt_size, LIGHTGRAY);

    let score = snapshot.score_text();
    let dims = measure_text(&score, None, prompt_size as u16, 1.0);
    draw_text(&score, center.x - dims.width / 2.0, center.y + 80.0 * map.scale, prompt_size, WHITE);
}

/// Top-right stats panel (F3)
fn draw_debug_overlay(snapshot: &Snapshot) {
    let lines = [
        format!("FPS: {}", get_fps()),
        format!("Frame: {}", snapshot.frame),
        format!("Time: {:.1}s", snapshot.time),
        format!("Monsters: {}", snapshot.monsters.len()),
        format!("Treasures: {}", snapshot.treasures.len()),
        format!("Next wave: {:.1}s ({} monsters)", snapshot.next_wave_in, snapshot.monsters_per_wave),
        format!("Next escalation: {:.1}s", snapshot.next_escalation_in),
        format!(
            "Hero: life {} {}{}",
            snapshot.life,
            if snapshot.hero_attacking { "ATK " } else { "" },
            if snapshot.hero_invincible { "INV" } else { "" }
        ),
    ];

    let panel_w = 260.0;
    let line_h = 18.0;
    let x = screen_width() - panel_w - 8.0;
    let y = 8.0;
    draw_rectangle(x, y, panel_w, line_h * lines.len() as f32 + 8.0, Color::new(0.0, 0.0, 0.0, 0.6));
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, x + 6.0, y + line_h * (i as f32 + 1.0), 16.0, GREEN);
    }
}
