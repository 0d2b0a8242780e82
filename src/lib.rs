//! Симулятор техасского холдема: стол, автоматические соперники и
//! движок раздачи с машиной состояний торговли.
//!
//! Ядро — `engine`: очередь хода, легальность fold/check/call/raise,
//! закрытие раундов, банк и переход улиц до шоудауна. Отрисовка и ввод —
//! внешние коллабораторы: они читают журнал событий (`engine::HandHistory`)
//! и заводят действия игроков через `sim::GameSession`.

pub mod bot;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod sim;
