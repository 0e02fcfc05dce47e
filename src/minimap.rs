// Hand-placed pixel-art world map with a pulsing marker on Lagos. The
// whole 400x400 canvas is repainted every frame: ocean, continent cells,
// then the marker disc and its fading pulse ring on top.

use crate::color::Color;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub const MAP_SIZE: u32 = 400;
pub const CELL_SIZE: f64 = 8.0;

const OCEAN: Color = Color { r: 10, g: 36, b: 99 };
const HOME_CONTINENT: Color = Color { r: 30, g: 81, b: 40 };
const CONTINENT: Color = Color { r: 78, g: 108, b: 80 };
const MARKER: Color = Color {
    r: 255,
    g: 51,
    b: 102,
};

// Continent shapes as (column, row) cells on the 8px grid. Africa gets the
// darker green since that is where the marker lives.
const AFRICA: [(u32, u32); 16] = [
    (22, 18),
    (23, 18),
    (24, 18),
    (22, 19),
    (23, 19),
    (24, 19),
    (25, 19),
    (22, 20),
    (23, 20),
    (24, 20),
    (25, 20),
    (23, 21),
    (24, 21),
    (25, 21),
    (24, 22),
    (25, 22),
];

const EUROPE: [(u32, u32); 5] = [(24, 14), (25, 14), (24, 15), (25, 15), (26, 15)];

const ASIA: [(u32, u32); 13] = [
    (30, 12),
    (31, 12),
    (32, 12),
    (33, 12),
    (30, 13),
    (31, 13),
    (32, 13),
    (33, 13),
    (34, 13),
    (31, 14),
    (32, 14),
    (33, 14),
    (34, 14),
];

const NORTH_AMERICA: [(u32, u32); 10] = [
    (10, 10),
    (11, 10),
    (12, 10),
    (10, 11),
    (11, 11),
    (12, 11),
    (13, 11),
    (11, 12),
    (12, 12),
    (13, 12),
];

const SOUTH_AMERICA: [(u32, u32); 6] =
    [(14, 20), (15, 20), (14, 21), (15, 21), (15, 22), (15, 23)];

const AUSTRALIA: [(u32, u32); 4] = [(38, 28), (39, 28), (38, 29), (39, 29)];

// Lagos, Nigeria
const MARKER_CELL: (u32, u32) = (24, 19);

const PULSE_STEP: f64 = 0.1;
const PULSE_MAX: f64 = 6.0;

// Pulse scalar for the marker, bouncing between 0 and 6
pub struct MarkerPulse {
    size: f64,
    direction: f64,
}

impl MarkerPulse {
    pub fn new() -> MarkerPulse {
        MarkerPulse {
            size: 0.0,
            direction: 1.0,
        }
    }

    pub fn step(&mut self) {
        self.size += self.direction * PULSE_STEP;
        if self.size >= PULSE_MAX || self.size <= 0.0 {
            self.direction *= -1.0;
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn disc_radius(&self) -> f64 {
        4.0 + self.size
    }

    pub fn ring_radius(&self) -> f64 {
        8.0 + self.size * 2.0
    }

    // The ring fades out as it expands
    pub fn ring_alpha(&self) -> f64 {
        1.0 - self.size / PULSE_MAX
    }
}

#[wasm_bindgen]
pub struct MiniMap {
    ctx: CanvasRenderingContext2d,
    pulse: MarkerPulse,
}

#[wasm_bindgen]
impl MiniMap {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &HtmlCanvasElement) -> Result<MiniMap, JsValue> {
        canvas.set_width(MAP_SIZE);
        canvas.set_height(MAP_SIZE);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("mini map canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(MiniMap {
            ctx,
            pulse: MarkerPulse::new(),
        })
    }

    pub fn step(&mut self) {
        self.pulse.step();
    }

    pub fn render(&self) -> Result<(), JsValue> {
        self.ctx
            .set_fill_style(&JsValue::from_str(&OCEAN.to_css(1.0)));
        self.ctx
            .fill_rect(0.0, 0.0, MAP_SIZE as f64, MAP_SIZE as f64);

        fill_cells(&self.ctx, &AFRICA, HOME_CONTINENT);
        fill_cells(&self.ctx, &EUROPE, CONTINENT);
        fill_cells(&self.ctx, &ASIA, CONTINENT);
        fill_cells(&self.ctx, &NORTH_AMERICA, CONTINENT);
        fill_cells(&self.ctx, &SOUTH_AMERICA, CONTINENT);
        fill_cells(&self.ctx, &AUSTRALIA, CONTINENT);

        let center_x = MARKER_CELL.0 as f64 * CELL_SIZE + CELL_SIZE / 2.0;
        let center_y = MARKER_CELL.1 as f64 * CELL_SIZE + CELL_SIZE / 2.0;

        self.ctx
            .set_fill_style(&JsValue::from_str(&MARKER.to_css(1.0)));
        self.ctx.begin_path();
        self.ctx.arc(
            center_x,
            center_y,
            self.pulse.disc_radius(),
            0.0,
            std::f64::consts::PI * 2.0,
        )?;
        self.ctx.fill();

        self.ctx
            .set_stroke_style(&JsValue::from_str(&MARKER.to_css(self.pulse.ring_alpha())));
        self.ctx.set_line_width(2.0);
        self.ctx.begin_path();
        self.ctx.arc(
            center_x,
            center_y,
            self.pulse.ring_radius(),
            0.0,
            std::f64::consts::PI * 2.0,
        )?;
        self.ctx.stroke();

        Ok(())
    }
}

fn fill_cells(ctx: &CanvasRenderingContext2d, cells: &[(u32, u32)], color: Color) {
    ctx.set_fill_style(&JsValue::from_str(&color.to_css(1.0)));
    for &(col, row) in cells {
        ctx.fill_rect(
            col as f64 * CELL_SIZE,
            row as f64 * CELL_SIZE,
            CELL_SIZE,
            CELL_SIZE,
        );
    }
}
