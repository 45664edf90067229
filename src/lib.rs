pub mod config;
pub mod core;
pub mod detection;

pub use crate::core::romanizer::{romanize, romanize_compact, Romanizer, Style};
pub use crate::core::unicode::{decompose, is_hangul_syllable};
pub use detection::is_only_korean;
