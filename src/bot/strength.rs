use crate::domain::card::Card;

/// Грубая сила карманной пары карт в [0, 1]:
/// - без пары — старшая карта, нормированная тузом (A = 14);
/// - пара поднимается в диапазон [0.5, 1].
///
/// Борд намеренно не учитывается — этого достаточно для порогового бота.
pub fn hand_strength(hole: &[Card]) -> f64 {
    if hole.len() != 2 {
        return 0.0;
    }

    let v0 = hole[0].rank.value() as f64;
    let v1 = hole[1].rank.value() as f64;
    let high = v0.max(v1);

    if hole[0].rank == hole[1].rank {
        0.5 + high / 28.0
    } else {
        high / 14.0
    }
}
