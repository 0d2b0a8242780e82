use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Что игрок может сделать прямо сейчас и в каких пределах.
/// Это же отдаётся UI и ботам, чтобы они не угадывали суммы.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegalActions {
    pub can_fold: bool,
    pub can_check: bool,
    pub can_call: bool,
    pub can_raise: bool,
    /// Сколько реально спишется при call (кламп к стеку — короткий колл).
    pub call_amount: Chips,
    /// Минимальная целевая сумма рейза (current_bet + шаг рейза).
    pub min_raise_to: Chips,
    /// Максимальная целевая сумма рейза (весь стек, т.е. олл-ин).
    pub max_raise_to: Chips,
}

impl LegalActions {
    fn none() -> Self {
        Self {
            can_fold: false,
            can_check: false,
            can_call: false,
            can_raise: false,
            call_amount: Chips::ZERO,
            min_raise_to: Chips::ZERO,
            max_raise_to: Chips::ZERO,
        }
    }
}

/// Запрос легальных действий для игрока при текущем состоянии ставок.
///
/// - check: только если его ставка уже равна current_bet;
/// - call: только при недоборе до current_bet и непустом стеке;
/// - raise: целевая сумма, минимум current_bet + min_raise,
///   максимум — весь стек (добавка не может превышать stack);
/// - fold: всегда, пока игрок действует.
pub fn legal_actions(player: &Player, betting: &BettingState) -> LegalActions {
    if !player.can_act() {
        return LegalActions::none();
    }

    let to_call = betting.current_bet.saturating_sub(player.current_bet);
    let min_raise_to = betting.current_bet + betting.min_raise;
    let max_raise_to = player.current_bet + player.stack;

    LegalActions {
        can_fold: true,
        can_check: to_call.is_zero(),
        can_call: !to_call.is_zero() && !player.stack.is_zero(),
        can_raise: player.stack > to_call && max_raise_to >= min_raise_to,
        call_amount: to_call.min(player.stack),
        min_raise_to,
        max_raise_to,
    }
}

/// Проверка действия перед применением. Движок не трогает состояние,
/// пока проверка не прошла.
pub fn validate_action(
    player: &Player,
    action: &PlayerActionKind,
    betting: &BettingState,
) -> Result<(), EngineError> {
    let legal = legal_actions(player, betting);

    match action {
        PlayerActionKind::Fold => {
            if legal.can_fold {
                Ok(())
            } else {
                Err(EngineError::IllegalAction)
            }
        }

        PlayerActionKind::Check => {
            if !legal.can_fold {
                Err(EngineError::IllegalAction)
            } else if legal.can_check {
                Ok(())
            } else {
                Err(EngineError::CannotCheck)
            }
        }

        PlayerActionKind::Call => {
            if !legal.can_fold {
                Err(EngineError::IllegalAction)
            } else if legal.can_call {
                Ok(())
            } else {
                Err(EngineError::CannotCall)
            }
        }

        PlayerActionKind::Raise(target) => {
            if !legal.can_fold {
                return Err(EngineError::IllegalAction);
            }
            if target.0 > legal.max_raise_to.0 {
                return Err(EngineError::NotEnoughChips);
            }
            if target.0 < legal.min_raise_to.0 {
                return Err(EngineError::RaiseTooSmall);
            }
            Ok(())
        }
    }
}
