//! TILESTAMP: a minimal grid tile-map editor
//!
//! A fixed 700x700 window with a 28x35 cell grid on the left and a sprite
//! palette strip on the right. Left click stamps a colored block onto the
//! grid, right click erases one. The green and blue palette entries pick
//! the stamp color; everything redraws every frame.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod block;
mod config;
mod grid;
mod palette;
mod ui;

use macroquad::prelude::*;

use app::EditorState;
use config::EditorConfig;
use grid::Grid;
use palette::{Palette, Panel};
use ui::{MouseState, BG_COLOR, STAMP_BLUE, STAMP_GREEN};

fn window_conf() -> Conf {
    let config = EditorConfig::default();
    Conf {
        window_title: format!("{} v{}", config.title, VERSION),
        window_width: config.window_w,
        window_height: config.window_h,
        window_resizable: false,
        ..Default::default()
    }
}

/// Load a texture the editor cannot run without. A missing or unreadable
/// file aborts startup rather than continuing with an undefined texture.
async fn load_required_texture(path: &str) -> Texture2D {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Nearest);
            tex
        }
        Err(e) => {
            eprintln!("Failed to load required texture {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = EditorConfig::default();
    let grid = Grid::new(config.grid_size(), config.cell());
    let mut state = EditorState::new(config.clone());

    let panel_texture = load_required_texture("assets/panel_default.png").await;
    let green_texture = load_required_texture("assets/icons/block_green.png").await;
    let blue_texture = load_required_texture("assets/icons/block_blue.png").await;

    // Palette strip fills the area right of the grid, full window height
    let strip_size = vec2(
        config.window_w as f32 - config.grid_size().x,
        config.window_h as f32,
    );
    let mut palette = Palette::new();
    let strip = palette.insert(Panel::new(
        panel_texture.clone(),
        vec2(config.grid_size().x, 0.0),
        strip_size / vec2(panel_texture.width(), panel_texture.height()),
    ));

    let green_item = palette.insert(Panel::new(green_texture, Vec2::ZERO, vec2(1.0, 1.0)));
    palette.add_item(strip, green_item);
    let blue_item = palette.insert(Panel::new(blue_texture.clone(), Vec2::ZERO, vec2(1.0, 1.0)));
    palette.add_item(strip, blue_item);

    // Filler entries reuse the blue icon; only the first two pick a color
    for _ in 0..4 {
        let filler = palette.insert(Panel::new(blue_texture.clone(), Vec2::ZERO, vec2(1.0, 1.0)));
        palette.add_item(strip, filler);
    }

    println!("=== TILESTAMP v{} ===", VERSION);

    loop {
        let mouse = MouseState::poll();
        let now = get_time();

        if mouse.left_down && state.debounce_ready(now) {
            if palette.is_clicked(green_item, &mouse) {
                state.active_color = STAMP_GREEN;
            } else if palette.is_clicked(blue_item, &mouse) {
                state.active_color = STAMP_BLUE;
            }
            state.try_stamp(grid.snap(mouse.pos()), grid.covered_size(), now);
        } else if mouse.right_down {
            state.erase(grid.snap(mouse.pos()));
        }

        clear_background(BG_COLOR);
        state.draw_blocks();
        grid.draw();
        palette.draw(strip);

        next_frame().await;
    }
}
