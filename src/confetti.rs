// Celebration burst for the cheat code. Fifty discs spawn just above the
// viewport and fall past the bottom edge, each on its own randomized
// timing, fading and spinning as it goes. Finished pieces are dropped;
// once the last one lands the burst reports itself done and the page can
// throw the whole thing away.

use crate::color::Color;
use crate::Timer;
use rand::Rng;
use std::f64::consts::PI;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

pub const PIECE_COUNT: usize = 50;
pub const PIECE_RADIUS: f64 = 5.0;

// Pieces start a little above the top edge and land a little past the bottom
const SPAWN_Y: f64 = -20.0;

const PALETTE: [u32; 5] = [0x00d4ff, 0xff3366, 0xffd700, 0x00ff88, 0xff6b6b];

const MIN_FALL_MS: f64 = 2000.0;
const MAX_FALL_MS: f64 = 4000.0;
const MAX_SPIN_DEG: f64 = 720.0;

// Decelerating fall; starts fast and eases into the landing
fn ease_out(t: f64) -> f64 {
    t * (2.0 - t)
}

struct Piece {
    x: f64,
    color: Color,
    spin_deg: f64,
    fall_ms: f64,
    elapsed_ms: f64,
}

impl Piece {
    fn spawn<R: Rng>(rng: &mut R, viewport_width: f64) -> Piece {
        Piece {
            x: rng.gen::<f64>() * viewport_width,
            color: Color::from_u32(PALETTE[rng.gen_range(0, PALETTE.len())]),
            spin_deg: rng.gen::<f64>() * MAX_SPIN_DEG,
            fall_ms: rng.gen::<f64>() * (MAX_FALL_MS - MIN_FALL_MS) + MIN_FALL_MS,
            elapsed_ms: 0.0,
        }
    }

    fn progress(&self) -> f64 {
        (self.elapsed_ms / self.fall_ms).min(1.0)
    }

    fn finished(&self) -> bool {
        self.elapsed_ms >= self.fall_ms
    }

    fn y(&self, viewport_height: f64) -> f64 {
        SPAWN_Y + (viewport_height - SPAWN_Y) * ease_out(self.progress())
    }

    fn opacity(&self) -> f64 {
        1.0 - ease_out(self.progress())
    }

    fn rotation_deg(&self) -> f64 {
        self.spin_deg * ease_out(self.progress())
    }
}

#[wasm_bindgen]
pub struct ConfettiBurst {
    pieces: Vec<Piece>,
    viewport_width: f64,
    viewport_height: f64,
}

#[wasm_bindgen]
impl ConfettiBurst {
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f64, viewport_height: f64) -> ConfettiBurst {
        let mut rng = rand::thread_rng();
        ConfettiBurst::spawn_with(&mut rng, viewport_width, viewport_height)
    }

    // dt is the elapsed milliseconds the rAF loop measured for this frame
    pub fn update(&mut self, dt_ms: f64) {
        for piece in &mut self.pieces {
            piece.elapsed_ms += dt_ms;
        }
        self.pieces.retain(|piece| !piece.finished());
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let _timer = Timer::new("ConfettiBurst::render");
        ctx.clear_rect(0.0, 0.0, self.viewport_width, self.viewport_height);
        for piece in &self.pieces {
            ctx.save();
            ctx.translate(piece.x, piece.y(self.viewport_height))?;
            ctx.rotate(piece.rotation_deg().to_radians())?;
            ctx.set_fill_style(&JsValue::from_str(
                &piece.color.to_css(piece.opacity()),
            ));
            ctx.begin_path();
            ctx.arc(0.0, 0.0, PIECE_RADIUS, 0.0, PI * 2.0)?;
            ctx.fill();
            ctx.restore();
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_done(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl ConfettiBurst {
    fn spawn_with<R: Rng>(
        rng: &mut R,
        viewport_width: f64,
        viewport_height: f64,
    ) -> ConfettiBurst {
        let mut pieces = Vec::new();
        pieces.reserve(PIECE_COUNT);
        for _ in 0..PIECE_COUNT {
            pieces.push(Piece::spawn(rng, viewport_width));
        }
        ConfettiBurst {
            pieces,
            viewport_width,
            viewport_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn burst(seed: u64) -> ConfettiBurst {
        let mut rng = StdRng::seed_from_u64(seed);
        ConfettiBurst::spawn_with(&mut rng, 1280.0, 720.0)
    }

    #[test]
    fn spawns_fifty_pieces_in_range() {
        let b = burst(3);
        assert_eq!(b.count(), PIECE_COUNT);
        for piece in &b.pieces {
            assert!(piece.x >= 0.0 && piece.x < 1280.0);
            assert!(piece.fall_ms >= MIN_FALL_MS && piece.fall_ms < MAX_FALL_MS);
            assert!(piece.spin_deg >= 0.0 && piece.spin_deg < MAX_SPIN_DEG);
            assert!(PALETTE.iter().any(|&c| Color::from_u32(c) == piece.color));
        }
    }

    #[test]
    fn pieces_start_above_the_viewport_fully_opaque() {
        let b = burst(5);
        for piece in &b.pieces {
            assert_eq!(piece.y(720.0), SPAWN_Y);
            assert_eq!(piece.opacity(), 1.0);
            assert_eq!(piece.rotation_deg(), 0.0);
        }
    }

    #[test]
    fn fall_is_monotonic_and_fades_out() {
        let mut b = burst(8);
        let mut last_y: Vec<f64> = b.pieces.iter().map(|p| p.y(720.0)).collect();
        let mut last_alpha: Vec<f64> = b.pieces.iter().map(|p| p.opacity()).collect();
        for _ in 0..20 {
            b.update(16.0);
            for (i, piece) in b.pieces.iter().enumerate() {
                let y = piece.y(720.0);
                let alpha = piece.opacity();
                assert!(y >= last_y[i]);
                assert!(alpha <= last_alpha[i]);
                assert!(alpha >= 0.0 && alpha <= 1.0);
                last_y[i] = y;
                last_alpha[i] = alpha;
            }
        }
    }

    #[test]
    fn pieces_land_at_the_bottom_edge() {
        let piece = Piece {
            x: 100.0,
            color: Color::from_u32(PALETTE[0]),
            spin_deg: 360.0,
            fall_ms: 2500.0,
            elapsed_ms: 2500.0,
        };
        assert_eq!(piece.y(720.0), 720.0);
        assert_eq!(piece.opacity(), 0.0);
        assert_eq!(piece.rotation_deg(), 360.0);
    }

    #[test]
    fn finished_pieces_are_removed_until_done() {
        let mut b = burst(13);
        assert!(!b.is_done());
        // Everything falls for at most MAX_FALL_MS
        b.update(MAX_FALL_MS);
        assert_eq!(b.count(), 0);
        assert!(b.is_done());
    }

    #[test]
    fn shorter_falls_finish_first() {
        let mut b = burst(21);
        b.update(MIN_FALL_MS + (MAX_FALL_MS - MIN_FALL_MS) / 2.0);
        assert!(b.count() > 0);
        assert!(b.count() < PIECE_COUNT);
    }

    #[test]
    fn ease_out_hits_both_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
