use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::player::Player;
use crate::domain::HandId;

/// Индекс места за столом (0..max_seats-1).
pub type SeatIndex = u8;

/// Блайнды стола. Конвенцию BB = 2×SB проверяет setup-слой (sim::config),
/// структурно она не навязывается.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl Stakes {
    pub fn new(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
        }
    }
}

/// Единственный изменяемый объект состояния игры. Пересоздаётся не между
/// раздачами — раздача сбрасывает board/pot/street, а места живут всю игру.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub stakes: Stakes,

    /// Места за столом: индекс вектора = SeatIndex, None — место пустое.
    /// Порядок мест фиксирован; порядок хода — по кругу по местам.
    pub seats: Vec<Option<Player>>,

    /// Общие карты борда (0–5).
    pub board: Vec<Card>,

    /// Место дилерской кнопки; None до первой раздачи.
    pub dealer_button: Option<SeatIndex>,

    /// Текущая улица раздачи.
    pub street: Street,

    /// Номер текущей раздачи, монотонно растёт.
    pub hand_number: HandId,

    /// Идёт ли сейчас раздача.
    pub hand_in_progress: bool,

    /// Общий банк раздачи (зеркало engine::Pot для отображения).
    pub total_pot: Chips,
}

impl Table {
    /// Пустой стол с заданным числом мест.
    pub fn new(max_seats: u8, stakes: Stakes) -> Self {
        Self {
            stakes,
            seats: vec![None; max_seats as usize],
            board: Vec::new(),
            dealer_button: None,
            street: Street::Preflop,
            hand_number: 0,
            hand_in_progress: false,
            total_pot: Chips::ZERO,
        }
    }

    pub fn max_seats(&self) -> u8 {
        self.seats.len() as u8
    }

    pub fn seated_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }

    /// Сколько игроков ещё при фишках.
    pub fn funded_count(&self) -> usize {
        self.seats
            .iter()
            .filter_map(|s| s.as_ref())
            .filter(|p| !p.stack.is_zero())
            .count()
    }

    pub fn player(&self, seat: SeatIndex) -> Option<&Player> {
        self.seats.get(seat as usize).and_then(|s| s.as_ref())
    }

    pub fn player_mut(&mut self, seat: SeatIndex) -> Option<&mut Player> {
        self.seats.get_mut(seat as usize).and_then(|s| s.as_mut())
    }
}
