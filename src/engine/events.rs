use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::{HandRank, Street};
use crate::domain::{Chips, HandId, PlayerId, SeatIndex};
use crate::engine::actions::PlayerActionKind;

/// Тип события в раздаче. Движок только пишет события;
/// слой отображения подписывается и перерисовывает стол по ним.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted { hand_number: HandId },

    /// Кнопка и блайнды. Суммы — сколько реально уплачено
    /// (короткий стек ставит блайнд в олл-ин).
    BlindsPosted {
        dealer: SeatIndex,
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Открыты новые общие карты.
    BoardDealt { street: Street, cards: Vec<Card> },

    /// Действие игрока со срезом состояния после него.
    PlayerActed {
        player_id: PlayerId,
        seat: SeatIndex,
        action: PlayerActionKind,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Переход на новую улицу.
    StreetChanged { street: Street },

    /// Шоудаун – вскрытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        player_id: PlayerId,
        hole_cards: Vec<Card>,
        rank: HandRank,
    },

    /// Выплата (части) банка.
    PotAwarded {
        seat: SeatIndex,
        player_id: PlayerId,
        amount: Chips,
    },

    /// Раздача завершена.
    HandFinished { hand_number: HandId },

    /// Раздача прервана снаружи (abort).
    HandAborted { hand_number: HandId },
}

/// Событие с порядковым номером внутри раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Журнал одной раздачи — односторонний канал уведомлений для UI.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }
}
