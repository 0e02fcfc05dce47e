// Cheat code detector. The page's keydown listener feeds KeyboardEvent.code
// strings in here one at a time; when the whole sequence lands the caller
// gets `true` back (and the registered callback fires) so it can open the
// secret modal and throw confetti.

use js_sys::Function;
use wasm_bindgen::prelude::*;

pub const CHEAT_SEQUENCE: [&str; 6] = [
    "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "KeyB", "KeyA",
];

#[wasm_bindgen]
pub struct KonamiCode {
    progress: usize,
    on_unlock: Option<Function>,
}

#[wasm_bindgen]
impl KonamiCode {
    #[wasm_bindgen(constructor)]
    pub fn new() -> KonamiCode {
        KonamiCode {
            progress: 0,
            on_unlock: None,
        }
    }

    pub fn set_on_unlock(&mut self, callback: Function) {
        self.on_unlock = Some(callback);
    }

    // A wrong key resets the run without being retried as a fresh start,
    // matching how the page has always behaved
    pub fn key(&mut self, code: &str) -> bool {
        if code == CHEAT_SEQUENCE[self.progress] {
            self.progress += 1;
            if self.progress == CHEAT_SEQUENCE.len() {
                self.progress = 0;
                if let Some(callback) = &self.on_unlock {
                    let _ = callback.call0(&JsValue::NULL);
                }
                return true;
            }
        } else {
            self.progress = 0;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(code: &mut KonamiCode, keys: &[&str]) -> bool {
        let mut unlocked = false;
        for key in keys {
            unlocked = code.key(key);
        }
        unlocked
    }

    #[test]
    fn full_sequence_unlocks() {
        let mut code = KonamiCode::new();
        assert!(feed(
            &mut code,
            &["ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "KeyB", "KeyA"],
        ));
    }

    #[test]
    fn progress_resets_after_unlock() {
        let mut code = KonamiCode::new();
        feed(
            &mut code,
            &["ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "KeyB", "KeyA"],
        );
        assert_eq!(code.progress(), 0);
        // And the sequence works again from scratch
        assert!(feed(
            &mut code,
            &["ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "KeyB", "KeyA"],
        ));
    }

    #[test]
    fn wrong_key_resets_progress() {
        let mut code = KonamiCode::new();
        assert!(!feed(&mut code, &["ArrowUp", "ArrowUp", "KeyB"]));
        assert_eq!(code.progress(), 0);
    }

    #[test]
    fn mismatched_key_is_not_retried_as_a_new_start() {
        let mut code = KonamiCode::new();
        // The third ArrowUp breaks the run and does not count as the first
        // key of a fresh attempt
        feed(&mut code, &["ArrowUp", "ArrowUp", "ArrowUp"]);
        assert_eq!(code.progress(), 0);
        assert!(feed(
            &mut code,
            &["ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "KeyB", "KeyA"],
        ));
    }

    #[test]
    fn unrelated_keys_keep_it_idle() {
        let mut code = KonamiCode::new();
        assert!(!feed(&mut code, &["KeyW", "KeyA", "KeyS", "KeyD"]));
        assert_eq!(code.progress(), 0);
    }
}
