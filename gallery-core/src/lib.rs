//! Board-agnostic core logic for the shooting gallery firmware
//!
//! This crate contains all game logic that does not depend on the
//! display hardware or the executor:
//!
//! - Drawing surface trait consumed by the game
//! - Game objects (player, bullet, enemy) and their boundary policies
//! - Object registry and the per-tick update/render pass
//! - Bullet spawning policies
//! - Hit blink sequence
//! - Running/Victory state machine
//! - Compile-time configuration

#![no_std]
#![deny(unsafe_code)]

pub mod blink;
pub mod config;
pub mod objects;
pub mod state;
pub mod traits;
pub mod world;
