// Wasm-facing wrapper around the particle field. The page creates one of
// these against the hero canvas size and then drives it from its
// requestAnimationFrame callback: update(), then render(ctx), every frame.
// Nothing in here schedules itself; when the page goes away the loop stops
// calling and the whole thing is dropped.

use crate::particle::{ParticleField, FIELD_COLOR, LINK_WIDTH, PARTICLE_COUNT};
use crate::Timer;
use std::f64::consts::PI;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

#[wasm_bindgen]
pub struct ParticleCanvas {
    field: ParticleField,
}

#[wasm_bindgen]
impl ParticleCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> ParticleCanvas {
        let mut rng = rand::thread_rng();
        ParticleCanvas {
            field: ParticleField::new(&mut rng, width, height, PARTICLE_COUNT),
        }
    }

    // The resize listener only pushes new bounds; particles keep their spots
    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    pub fn update(&mut self) {
        let _timer = Timer::new("ParticleCanvas::update()");
        self.field.update();
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let _timer = Timer::new("ParticleCanvas::render");
        ctx.clear_rect(0.0, 0.0, self.field.width(), self.field.height());

        for p in self.field.particles() {
            ctx.set_fill_style(&JsValue::from_str(&FIELD_COLOR.to_css(p.opacity)));
            ctx.begin_path();
            ctx.arc(p.pos[0], p.pos[1], p.size, 0.0, PI * 2.0)?;
            ctx.fill();
        }

        ctx.set_line_width(LINK_WIDTH);
        for link in self.field.links() {
            ctx.set_stroke_style(&JsValue::from_str(&FIELD_COLOR.to_css(link.alpha)));
            ctx.begin_path();
            ctx.move_to(link.from[0], link.from[1]);
            ctx.line_to(link.to[0], link.to[1]);
            ctx.stroke();
        }

        Ok(())
    }

    pub fn particle_count(&self) -> usize {
        self.field.particles().len()
    }

    pub fn width(&self) -> f64 {
        self.field.width()
    }

    pub fn height(&self) -> f64 {
        self.field.height()
    }
}
