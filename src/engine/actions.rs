use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId, SeatIndex};

/// Тип действия игрока.
///
/// Рейз задаётся целевой суммой ставки за раунд ("raise to"), не добавкой.
/// Открывающая ставка на пустой улице — это тоже Raise (current_bet == 0).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    Call,
    Raise(Chips),
}

/// Конкретное действие игрока: кто, с какого места, что именно.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    pub player_id: PlayerId,
    pub seat: SeatIndex,
    pub kind: PlayerActionKind,
}
