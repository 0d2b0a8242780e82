use serde::{Deserialize, Serialize};

use crate::domain::hand::Street;
use crate::domain::{Chips, SeatIndex};

/// Состояние раунда ставок на конкретной улице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Текущая ставка, до которой должны дотянуться игроки (BB, bet, raise).
    pub current_bet: Chips,
    /// Минимальная повышающая часть рейза. Фиксирована на размер большого
    /// блайнда на всю раздачу (правило минимального рейза).
    pub min_raise: Chips,
    /// Seat последнего агрессора (блайнд/рейз).
    pub last_aggressor: Option<SeatIndex>,
    /// Улица, к которой относится раунд.
    pub street: Street,
    /// Очередь хода: кто ещё должен действовать после последнего рейза.
    /// Пустая очередь = раунд закрыт.
    pub to_act: Vec<SeatIndex>,
}

impl BettingState {
    pub fn new(street: Street, current_bet: Chips, min_raise: Chips, to_act: Vec<SeatIndex>) -> Self {
        Self {
            current_bet,
            min_raise,
            last_aggressor: None,
            street,
            to_act,
        }
    }

    /// Убрать seat из очереди, если он там есть.
    pub fn mark_acted(&mut self, seat: SeatIndex) {
        self.to_act.retain(|s| *s != seat);
    }

    /// Обновить состояние после рейза: новая целевая ставка и перезапуск
    /// очереди (раунд переоткрывается, очередь формирует engine).
    /// min_raise не меняется — шаг рейза всегда равен большому блайнду.
    pub fn on_raise(&mut self, seat: SeatIndex, new_bet: Chips, new_to_act: Vec<SeatIndex>) {
        self.current_bet = new_bet;
        self.last_aggressor = Some(seat);
        self.to_act = new_to_act;
    }

    /// Раунд закрыт, когда очередь пуста: каждый активный не-оллын игрок
    /// походил после последнего рейза и уравнял ставку.
    pub fn is_round_complete(&self) -> bool {
        self.to_act.is_empty()
    }
}
