mod utils;

pub mod canvas;
pub mod color;
pub mod confetti;
pub mod greeting;
pub mod konami;
pub mod minimap;
pub mod particle;

use wasm_bindgen::prelude::*;
use web_sys::console;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Styled greeting for whoever opens devtools, plus the cheat code hint
#[wasm_bindgen]
pub fn console_banner() {
    console::log_2(
        &"%c\u{1f44b} Hey there!".into(),
        &"font-size: 20px; font-weight: bold; color: #00d4ff;".into(),
    );
    console::log_2(
        &"%cThe background you're looking at is Rust compiled to WebAssembly.".into(),
        &"font-size: 14px; color: #ff3366;".into(),
    );
    console::log_2(
        &"%c\u{1f4a1} Try the Konami Code: \u{2191} \u{2191} \u{2193} \u{2193} B A".into(),
        &"font-size: 12px; color: #00ff88;".into(),
    );
}
