#[cfg(target_arch = "wasm32")]
use macroquad::miniquad;

pub fn log_info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    miniquad::info!("{}", message);
    #[cfg(not(target_arch = "wasm32"))]
    println!("{}", message);
}

pub fn log_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    miniquad::warn!("{}", message);
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("warning: {}", message);
}
