//! Rescue Run - a room-crawling rescue game simulation library
//!
//! This module exposes the game logic for testing and for the front ends
//! (terminal game and headless simulator).

pub mod boss;
pub mod combat;
pub mod core;
pub mod geometry;
pub mod level;
pub mod player;
pub mod powers;
pub mod progression;
pub mod simulator;
pub mod win_sequence;
