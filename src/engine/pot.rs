use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Банк раздачи: общая сумма плюс вклад каждого места за все улицы.
/// Вклады нужны для сайд-потов и для возврата фишек при abort.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
    pub contributions: HashMap<SeatIndex, Chips>,
}

impl Pot {
    pub fn new() -> Self {
        Self {
            total: Chips::ZERO,
            contributions: HashMap::new(),
        }
    }

    /// Зачислить amount от seat. Банк и вклад меняются одним вызовом,
    /// промежуточное состояние снаружи не видно.
    pub fn add(&mut self, seat: SeatIndex, amount: Chips) {
        if amount.is_zero() {
            return;
        }
        self.total += amount;
        *self.contributions.entry(seat).or_insert(Chips::ZERO) += amount;
    }

    /// Сколько всего внёс seat за раздачу.
    pub fn contribution(&self, seat: SeatIndex) -> Chips {
        self.contributions.get(&seat).copied().unwrap_or(Chips::ZERO)
    }
}
