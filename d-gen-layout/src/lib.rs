pub mod palette;

#[cfg(feature = "generator")]
pub mod preview;
#[cfg(feature = "generator")]
pub mod sprite;
