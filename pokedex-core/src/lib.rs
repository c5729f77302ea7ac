//! Board-agnostic logic for the Pokedex handheld firmware
//!
//! This crate contains everything that does not touch a peripheral:
//!
//! - The fixed id -> name catalog (ids 1..=151)
//! - Session state: the cursor and the volume deadband filter
//! - Time-gated input debouncing over injected timestamps
//! - Screen layouts, generic over an `embedded-graphics` draw target
//!
//! The firmware crate wires these to the real OLED, buttons, pot and
//! audio module; host tests drive them directly.

#![no_std]
#![deny(unsafe_code)]

pub mod catalog;
pub mod input;
pub mod render;
pub mod session;
