use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Сайд-пот: слой банка и места, претендующие на него.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    pub eligible_seats: Vec<SeatIndex>,
}

/// Разложить вклады игроков на слои банка.
///
/// Вход: contributions[seat] = сколько всего фишек внёс seat за раздачу.
/// Выход: слои от меньшего уровня вклада к большему. Игрок претендует на
/// слой, если его вклад не меньше уровня слоя; короткий олл-ин выигрывает
/// только те слои, которые он покрыл.
pub fn compute_side_pots(contributions: &HashMap<SeatIndex, Chips>) -> Vec<SidePot> {
    let mut entries: Vec<(SeatIndex, Chips)> = contributions
        .iter()
        .filter(|(_, chips)| !chips.is_zero())
        .map(|(seat, chips)| (*seat, *chips))
        .collect();

    if entries.is_empty() {
        return Vec::new();
    }

    entries.sort_by_key(|(seat, chips)| (chips.0, *seat));

    // Уникальные уровни вкладов по возрастанию.
    let mut levels: Vec<Chips> = entries.iter().map(|(_, c)| *c).collect();
    levels.dedup();

    let mut pots = Vec::with_capacity(levels.len());
    let mut prev = Chips::ZERO;

    for level in levels {
        let mut eligible: Vec<SeatIndex> = entries
            .iter()
            .filter(|(_, c)| c.0 >= level.0)
            .map(|(seat, _)| *seat)
            .collect();
        eligible.sort_unstable();

        let layer = Chips((level.0 - prev.0) * eligible.len() as u64);
        pots.push(SidePot {
            amount: layer,
            eligible_seats: eligible,
        });
        prev = level;
    }

    pots
}
