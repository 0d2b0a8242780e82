//! Инфраструктура: источники случайности поверх `rand`.

pub mod rng;

pub use rng::{DeterministicRng, SystemRng};
