use crate::domain::deck::EmptyDeckError;
use crate::domain::{Chips, PlayerId, SeatIndex};

use thiserror::Error;

/// Ошибки движка раздачи.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("В этом месте нет игрока")]
    EmptySeat,

    #[error("Игрок {0} не сидит в этом месте")]
    PlayerNotAtTable(PlayerId),

    #[error("Недостаточно игроков с фишками для раздачи")]
    NotEnoughPlayers,

    #[error("Раздача уже идёт")]
    HandAlreadyInProgress,

    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Сейчас не ход игрока с id={0}")]
    NotPlayersTurn(PlayerId),

    #[error("Недопустимое действие в текущем состоянии раздачи")]
    IllegalAction,

    #[error("Недостаточно фишек для этой ставки")]
    NotEnoughChips,

    #[error("Размер рейза слишком мал")]
    RaiseTooSmall,

    #[error("Невозможно выполнить check – нужно хотя бы уравнять ставку")]
    CannotCheck,

    #[error("Невозможно выполнить call – нет ставки для уравнивания")]
    CannotCall,

    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),

    /// Фишки "потерялись" или "появились" при расчёте — фатальный баг движка.
    #[error("Нарушение баланса фишек: ожидалось {expected}, по факту {actual}")]
    ConservationViolation { expected: Chips, actual: Chips },

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
