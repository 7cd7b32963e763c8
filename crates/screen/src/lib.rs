//! # Transfer-Out Screen
//!
//! Orchestration for the transfer-out input screen: the
//! [`controller::ScreenController`] state machine drives context loading at
//! activation, holds the current field snapshot, and turns a submit action
//! into one encounter submission.

pub mod controller;

pub use controller::{CloseSignal, ScreenController, ScreenError, ScreenState};
