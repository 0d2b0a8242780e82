//! Движок одной раздачи: ставки, очередь хода, переход улиц, расчёт банка.
//!
//! Высокоуровневый объект: `HandEngine`.
//! Основные операции:
//!   - `start_hand` – запустить новую раздачу (блайнды, карманные карты)
//!   - `apply_action` – применить действие игрока
//!   - `advance_street` – переход улиц вплоть до шоудауна
//!   - `abort_hand` – аварийное завершение раздачи

pub mod actions;
pub mod betting;
pub mod errors;
pub mod events;
pub mod game_loop;
pub mod positions;
pub mod pot;
pub mod side_pots;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use errors::EngineError;
pub use events::{HandEvent, HandEventKind, HandHistory};
pub use game_loop::{
    abort_hand, advance_street, apply_action, betting_required, start_hand, HandEngine, HandStatus,
};
pub use pot::Pot;
pub use side_pots::SidePot;
pub use validation::{legal_actions, validate_action, LegalActions};

/// RNG-интерфейс движка. Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
