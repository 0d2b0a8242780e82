use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::table::Stakes;

pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 10;

/// Ошибки конфигурации. Ловятся синхронно до создания какого-либо
/// игрового состояния.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Нужен хотя бы один живой игрок")]
    NoHumanPlayers,

    #[error("Общее число игроков {0} вне диапазона {MIN_PLAYERS}..={MAX_PLAYERS}")]
    PlayerCountOutOfRange(u8),

    #[error("Стартовый стек должен быть больше нуля")]
    ZeroStartingStack,

    #[error("Блайнды должны быть больше нуля")]
    ZeroBlinds,

    #[error("Большой блайнд {big} должен быть вдвое больше малого {small}")]
    BlindsNotDoubled { small: Chips, big: Chips },
}

/// Настройки новой игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub human_players: u8,
    pub bot_players: u8,
    pub starting_stack: Chips,
    pub stakes: Stakes,
}

impl GameConfig {
    pub fn total_players(&self) -> u8 {
        self.human_players.saturating_add(self.bot_players)
    }

    /// Полная проверка конфигурации. BB = 2×SB — конвенция стола,
    /// структурно не навязывается, поэтому проверяем её здесь.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.human_players < 1 {
            return Err(ConfigError::NoHumanPlayers);
        }

        let total = self.total_players();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&total) {
            return Err(ConfigError::PlayerCountOutOfRange(total));
        }

        if self.starting_stack.is_zero() {
            return Err(ConfigError::ZeroStartingStack);
        }

        let Stakes {
            small_blind,
            big_blind,
        } = self.stakes;
        if small_blind.is_zero() || big_blind.is_zero() {
            return Err(ConfigError::ZeroBlinds);
        }
        if big_blind.0 != small_blind.0 * 2 {
            return Err(ConfigError::BlindsNotDoubled {
                small: small_blind,
                big: big_blind,
            });
        }

        Ok(())
    }
}
