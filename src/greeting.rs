// Rotating hero greeting. The page owns the interval timer and the CSS
// fade; this just hands out the next greeting in a fixed cycle.

use wasm_bindgen::prelude::*;

pub const GREETINGS: [&str; 10] = [
    "Good day",
    "Bonjour",
    "\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}",
    "Buenos d\u{ed}as",
    "Guten Tag",
    "Buongiorno",
    "\u{4f60}\u{597d}",
    "\u{c548}\u{b155}\u{d558}\u{c138}\u{c694}",
    "Ol\u{e1}",
    "\u{417}\u{434}\u{440}\u{430}\u{432}\u{441}\u{442}\u{432}\u{443}\u{439}\u{442}\u{435}",
];

// Swap every three seconds, with a half-second fade handled by the page
pub const ROTATE_INTERVAL_MS: u32 = 3000;
pub const FADE_MS: u32 = 500;

#[wasm_bindgen]
pub struct GreetingCarousel {
    index: usize,
}

#[wasm_bindgen]
impl GreetingCarousel {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GreetingCarousel {
        GreetingCarousel { index: 0 }
    }

    pub fn current(&self) -> String {
        GREETINGS[self.index].to_owned()
    }

    pub fn advance(&mut self) -> String {
        self.index = (self.index + 1) % GREETINGS.len();
        GREETINGS[self.index].to_owned()
    }

    pub fn count(&self) -> usize {
        GREETINGS.len()
    }

    pub fn interval_ms() -> u32 {
        ROTATE_INTERVAL_MS
    }

    pub fn fade_ms() -> u32 {
        FADE_MS
    }
}
