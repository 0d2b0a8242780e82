//! Слой игры поверх движка: проверка конфигурации стола и
//! оркестрация раздач от посадки игроков до чемпиона.

pub mod config;
pub mod session;

pub use config::{ConfigError, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use session::{GameSession, SessionError};
