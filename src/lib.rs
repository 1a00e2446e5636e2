//! TicTacVIP: a Tic-Tac-Toe game with a session timer and a VIP unlock code.
//!
//! `game` holds the pure state machine, `clock` turns wall-clock time into
//! logical one-second ticks, and `app` is the egui layer that renders each
//! state snapshot and forwards user intents back into the engine.

pub mod app;
pub mod clock;
pub mod game;
