use std::collections::HashMap;

use thiserror::Error;

use crate::bot::{BotPolicy, BotView, ThresholdPolicy};
use crate::domain::hand::HandSummary;
use crate::domain::player::Player;
use crate::domain::table::Table;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::{
    self, betting_required, legal_actions, EngineError, HandEngine, HandHistory, HandStatus,
    LegalActions, PlayerAction, PlayerActionKind, RandomSource,
};
use crate::eval::{HandEvaluator, PairEvaluator};
use crate::infra::SystemRng;
use crate::sim::config::{ConfigError, GameConfig};

/// Ошибки уровня игровой сессии (над движком одной раздачи).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Игра окончена: с фишками остался максимум один игрок")]
    GameOver,

    #[error("Раздача не запущена")]
    NoActiveHand,

    #[error("Игрок {0} не найден за столом")]
    UnknownPlayer(PlayerId),

    #[error("Сейчас ход не бота")]
    NotBotTurn,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Игровая сессия: стол, текущая раздача, оценщик рук и политики ботов.
///
/// Человеческий ввод заходит как (player_id, действие) через
/// `apply_player_action`; боты шагают явно через `step_bot`/`run_bots`,
/// так что паузы "на подумать" остаются снаружи движка.
pub struct GameSession<R: RandomSource = SystemRng> {
    table: Table,
    hand: Option<HandEngine>,
    rng: R,
    evaluator: Box<dyn HandEvaluator>,
    policies: HashMap<SeatIndex, Box<dyn BotPolicy>>,
    last_summary: Option<HandSummary>,
    last_history: Option<HandHistory>,
}

impl GameSession<SystemRng> {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, SystemRng)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Сессия с заданным RNG (детерминированные игры, реплей).
    pub fn with_rng(config: &GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let total = config.total_players();
        let mut table = Table::new(total, config.stakes);
        let mut policies: HashMap<SeatIndex, Box<dyn BotPolicy>> = HashMap::new();

        // Люди занимают первые места, боты — следом.
        for i in 0..total {
            let seat = i as SeatIndex;
            let is_human = i < config.human_players;
            let name = if is_human {
                format!("Player {}", i + 1)
            } else {
                format!("Bot {}", i - config.human_players + 1)
            };
            if !is_human {
                policies.insert(seat, Box::new(ThresholdPolicy::new()));
            }
            table.seats[i as usize] = Some(Player::new(
                PlayerId::from(i),
                name,
                config.starting_stack,
                is_human,
            ));
        }

        Ok(Self {
            table,
            hand: None,
            rng,
            evaluator: Box::new(PairEvaluator),
            policies,
            last_summary: None,
            last_history: None,
        })
    }

    /// Подменить оценщик шоудауна (по умолчанию — PairEvaluator).
    pub fn set_evaluator(&mut self, evaluator: Box<dyn HandEvaluator>) {
        self.evaluator = evaluator;
    }

    /// Подменить политику конкретного бота (например, на сидированную).
    pub fn set_bot_policy(&mut self, seat: SeatIndex, policy: Box<dyn BotPolicy>) {
        self.policies.insert(seat, policy);
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Текущая раздача, если идёт: журнал событий и банк для отрисовки.
    pub fn hand(&self) -> Option<&HandEngine> {
        self.hand.as_ref()
    }

    pub fn last_summary(&self) -> Option<&HandSummary> {
        self.last_summary.as_ref()
    }

    pub fn last_history(&self) -> Option<&HandHistory> {
        self.last_history.as_ref()
    }

    /// Игра окончена, когда с фишками остался максимум один игрок.
    pub fn is_game_over(&self) -> bool {
        self.hand.is_none() && self.table.funded_count() <= 1
    }

    pub fn champion(&self) -> Option<&Player> {
        if !self.is_game_over() {
            return None;
        }
        self.table
            .seats
            .iter()
            .filter_map(|s| s.as_ref())
            .find(|p| !p.stack.is_zero())
    }

    pub fn current_actor(&self) -> Option<SeatIndex> {
        self.hand.as_ref().and_then(|h| h.current_actor)
    }

    pub fn current_actor_is_human(&self) -> Option<bool> {
        let seat = self.current_actor()?;
        self.table.player(seat).map(|p| p.is_human)
    }

    /// Легальные действия того, чей сейчас ход.
    pub fn legal_actions_now(&self) -> Option<LegalActions> {
        let hand = self.hand.as_ref()?;
        let seat = hand.current_actor?;
        let player = self.table.player(seat)?;
        Some(legal_actions(player, &hand.betting))
    }

    /// Запустить следующую раздачу. Если блайнды сразу поставили всех
    /// в олл-ин, раздача может тут же доиграться до шоудауна.
    pub fn start_hand(&mut self) -> Result<HandStatus, SessionError> {
        if self.is_game_over() {
            return Err(SessionError::GameOver);
        }

        let mut hand = engine::start_hand(&mut self.table, &mut self.rng)?;

        let status = if betting_required(&self.table, &hand.betting) {
            HandStatus::Ongoing
        } else {
            engine::advance_street(&mut self.table, &mut hand, self.evaluator.as_ref())?
        };

        match &status {
            HandStatus::Ongoing => {
                self.hand = Some(hand);
            }
            HandStatus::Finished(summary) => {
                self.last_summary = Some(summary.clone());
                self.last_history = Some(hand.history);
            }
        }

        Ok(status)
    }

    /// Сырой ввод (player_id, действие) — так его пересылает UI.
    /// Чужой ход и нелегальные действия отклоняются без изменения состояния.
    pub fn apply_player_action(
        &mut self,
        player_id: PlayerId,
        kind: PlayerActionKind,
    ) -> Result<HandStatus, SessionError> {
        let seat = self
            .seat_of(player_id)
            .ok_or(SessionError::UnknownPlayer(player_id))?;
        let hand = self.hand.as_mut().ok_or(SessionError::NoActiveHand)?;

        let action = PlayerAction {
            player_id,
            seat,
            kind,
        };
        let status = engine::apply_action(&mut self.table, hand, action, self.evaluator.as_ref())?;

        if let HandStatus::Finished(summary) = &status {
            self.last_summary = Some(summary.clone());
            if let Some(done) = self.hand.take() {
                self.last_history = Some(done.history);
            }
        }

        Ok(status)
    }

    /// Один ход бота: политика смотрит на стол и отдаёт действие в движок.
    pub fn step_bot(&mut self) -> Result<HandStatus, SessionError> {
        let hand = self.hand.as_ref().ok_or(SessionError::NoActiveHand)?;
        let seat = hand.current_actor.ok_or(SessionError::NotBotTurn)?;
        let player = self.table.player(seat).ok_or(SessionError::NotBotTurn)?;
        if player.is_human {
            return Err(SessionError::NotBotTurn);
        }

        let view = BotView {
            hole_cards: player.hole_cards.clone(),
            board: self.table.board.clone(),
            pot: hand.pot.total,
            current_bet: hand.betting.current_bet,
            big_blind: self.table.stakes.big_blind,
            stack: player.stack,
            legal: legal_actions(player, &hand.betting),
        };
        let player_id = player.player_id;

        let policy = self
            .policies
            .entry(seat)
            .or_insert_with(|| Box::new(ThresholdPolicy::new()));
        let kind = policy.decide(&view);

        self.apply_player_action(player_id, kind)
    }

    /// Прогнать ботов до хода человека или конца раздачи.
    pub fn run_bots(&mut self) -> Result<HandStatus, SessionError> {
        if self.hand.is_none() {
            return Err(SessionError::NoActiveHand);
        }

        loop {
            match self.current_actor_is_human() {
                Some(false) => {}
                // Ход человека либо раздача уже завершилась.
                _ => return Ok(self.status_snapshot()),
            }
            if let HandStatus::Finished(summary) = self.step_bot()? {
                return Ok(HandStatus::Finished(summary));
            }
        }
    }

    /// Прервать текущую раздачу (все отключились и т.п.).
    pub fn abort_hand(&mut self) -> Result<HandSummary, SessionError> {
        let hand = self.hand.as_mut().ok_or(SessionError::NoActiveHand)?;
        let summary = engine::abort_hand(&mut self.table, hand)?;

        self.last_summary = Some(summary.clone());
        if let Some(done) = self.hand.take() {
            self.last_history = Some(done.history);
        }

        Ok(summary)
    }

    fn status_snapshot(&self) -> HandStatus {
        match (&self.hand, &self.last_summary) {
            (None, Some(summary)) => HandStatus::Finished(summary.clone()),
            _ => HandStatus::Ongoing,
        }
    }

    fn seat_of(&self, player_id: PlayerId) -> Option<SeatIndex> {
        self.table
            .seats
            .iter()
            .enumerate()
            .find(|(_, s)| {
                s.as_ref()
                    .map(|p| p.player_id == player_id)
                    .unwrap_or(false)
            })
            .map(|(idx, _)| idx as SeatIndex)
    }
}
