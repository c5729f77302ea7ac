//! Peripheral drivers for the Pokedex handheld
//!
//! Both drivers are generic over the async bus traits
//! (`embedded-hal-async` I2C for the OLED, `embedded-io-async` for the
//! audio module's UART) so they stay independent of the RP2040 HAL.

#![no_std]
#![deny(unsafe_code)]

pub mod dfplayer;
pub mod ssd1306;

pub use dfplayer::{DfPlayer, DfPlayerError};
pub use ssd1306::Ssd1306;
