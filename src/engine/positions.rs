use crate::domain::{SeatIndex, Table};

/// Найти следующее место с игроком при фишках по кругу (включая/исключая start).
pub fn next_funded_seat(table: &Table, start: SeatIndex, include_start: bool) -> Option<SeatIndex> {
    let max = table.max_seats() as usize;
    if max == 0 {
        return None;
    }

    let mut idx = start as usize % max;
    if !include_start {
        idx = (idx + 1) % max;
    }

    for _ in 0..max {
        if let Some(p) = table.player(idx as SeatIndex) {
            if !p.stack.is_zero() {
                return Some(idx as SeatIndex);
            }
        }
        idx = (idx + 1) % max;
    }

    None
}

/// Собрать все места с участниками текущей раздачи (Active/AllIn),
/// обходя стол по кругу начиная с start (start включается, если занят).
pub fn collect_seats_in_hand_from(table: &Table, start: SeatIndex) -> Vec<SeatIndex> {
    let max = table.max_seats() as usize;
    let mut seats = Vec::new();
    if max == 0 {
        return seats;
    }

    let mut idx = start as usize % max;
    for _ in 0..max {
        if let Some(p) = table.player(idx as SeatIndex) {
            if p.is_in_hand() {
                seats.push(idx as SeatIndex);
            }
        }
        idx = (idx + 1) % max;
    }

    seats
}

/// Куда двигается кнопка:
/// - если кнопка уже стоит — следующее место с фишками;
/// - до первой раздачи — первое место с фишками от нуля.
pub fn next_dealer(table: &Table) -> Option<SeatIndex> {
    match table.dealer_button {
        Some(button) => next_funded_seat(table, button, false),
        None => next_funded_seat(table, 0, true),
    }
}
