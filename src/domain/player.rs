use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Статус игрока в контексте текущей раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Участвует в раздаче и может делать ставки.
    Active,
    /// Сфолдил и больше не претендует на банк.
    Folded,
    /// В олл-ине — остаётся в раздаче, но ставить больше нечем.
    AllIn,
    /// Вылетел: стек обнулился, в следующих раздачах не участвует.
    Busted,
}

/// Игрок на месте за столом. Живёт между раздачами (стек переносится),
/// карты/статус/ставка текущего раунда сбрасываются в начале каждой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    /// Текущий стек.
    pub stack: Chips,
    /// Сколько внесено в текущем раунде ставок.
    pub current_bet: Chips,
    pub status: PlayerStatus,
    /// Карманные карты (0 или 2).
    pub hole_cards: Vec<Card>,
    /// Человек или бот — движку всё равно, это подсказка оркестратору/UI.
    pub is_human: bool,
}

impl Player {
    pub fn new(player_id: PlayerId, name: String, stack: Chips, is_human: bool) -> Self {
        Self {
            player_id,
            name,
            stack,
            current_bet: Chips::ZERO,
            status: PlayerStatus::Active,
            hole_cards: Vec::new(),
            is_human,
        }
    }

    /// Претендует ли игрок на банк этой раздачи.
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Может ли игрок ещё делать ставки.
    pub fn can_act(&self) -> bool {
        matches!(self.status, PlayerStatus::Active)
    }
}
