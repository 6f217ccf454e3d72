//! Expose the reconcilers to WebAssembly.
use wasm_bindgen::prelude::*;

use crate::{Direction, IdentityKey, IdentityMap};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::reconcile_text`.
#[wasm_bindgen(js_name = reconcileTextKeys)]
#[must_use]
pub fn reconcile_text_keys(
    previous: &str,
    next: &str,
    previous_keys: Vec<u64>,
    next_id: u64,
) -> TextKeys {
    set_panic_hook();

    let result = crate::reconcile_text(
        previous,
        &to_identity_map(previous_keys),
        next,
        IdentityKey::new(next_id),
    );

    TextKeys {
        keys: result.keys.iter().map(IdentityKey::value).collect(),
        change_ratio: result.change_ratio,
        next_id: result.next_fresh.value(),
    }
}

/// WASM wrapper around `crate::reconcile_digits`.
#[wasm_bindgen(js_name = reconcileDigitKeys)]
#[must_use]
pub fn reconcile_digit_keys(
    previous: &str,
    next: &str,
    previous_keys: Vec<u64>,
    next_id: u64,
) -> DigitKeys {
    set_panic_hook();

    let result = crate::reconcile_digits(
        previous,
        &to_identity_map(previous_keys),
        next,
        IdentityKey::new(next_id),
    );

    DigitKeys {
        keys: result.keys.iter().map(IdentityKey::value).collect(),
        direction: result.direction,
        next_id: result.next_fresh.value(),
    }
}

/// WASM wrapper around `crate::align_sequences` working on the characters of
/// two strings. The matched pairs are flattened: `[i0, j0, i1, j1, ...]`.
#[wasm_bindgen(js_name = alignSequences)]
#[must_use]
pub fn align_sequences(previous: &str, next: &str) -> Vec<u32> {
    set_panic_hook();

    let previous: Vec<char> = previous.chars().collect();
    let next: Vec<char> = next.chars().collect();

    crate::align_sequences(&previous, &next)
        .into_iter()
        .flat_map(|(i, j)| [to_u32(i), to_u32(j)])
        .collect()
}

/// WASM wrapper around `crate::parse_magnitude`.
#[wasm_bindgen(js_name = parseMagnitude)]
#[must_use]
pub fn parse_magnitude(text: &str) -> f64 { crate::parse_magnitude(text) }

fn to_identity_map(keys: Vec<u64>) -> IdentityMap { keys.into_iter().map(IdentityKey::new).collect() }

fn to_u32(index: usize) -> u32 { u32::try_from(index).unwrap_or(u32::MAX) }

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM wrapper type for the return value of `reconcile_text_keys`
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct TextKeys {
    keys: Vec<u64>,
    change_ratio: f64,
    next_id: u64,
}

#[wasm_bindgen]
impl TextKeys {
    #[must_use]
    pub fn keys(&self) -> Vec<u64> { self.keys.clone() }

    #[wasm_bindgen(getter, js_name = changeRatio)]
    #[must_use]
    pub fn change_ratio(&self) -> f64 { self.change_ratio }

    #[wasm_bindgen(getter, js_name = nextId)]
    #[must_use]
    pub fn next_id(&self) -> u64 { self.next_id }
}

/// WASM wrapper type for the return value of `reconcile_digit_keys`
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct DigitKeys {
    keys: Vec<u64>,
    direction: Direction,
    next_id: u64,
}

#[wasm_bindgen]
impl DigitKeys {
    #[must_use]
    pub fn keys(&self) -> Vec<u64> { self.keys.clone() }

    /// `1` when increasing, `-1` when decreasing and `0` when unchanged.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn direction(&self) -> i32 {
        match self.direction {
            Direction::Increasing => 1,
            Direction::Decreasing => -1,
            Direction::Unchanged => 0,
        }
    }

    #[wasm_bindgen(getter, js_name = nextId)]
    #[must_use]
    pub fn next_id(&self) -> u64 { self.next_id }
}
