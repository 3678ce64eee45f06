// Natively only the pure modules are built (for tests); their API is consumed by `dom`.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod career;
mod chart;
mod charts;
#[cfg(target_arch = "wasm32")]
mod dom;
mod form;
mod normalize;
mod page;

fn main() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    dom::run();
}
