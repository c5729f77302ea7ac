//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. Keeps a
//! pixel framebuffer on the MCU and implements the `embedded-graphics`
//! [`DrawTarget`] over it; [`Ssd1306::flush`] streams the buffer to the
//! panel in horizontal addressing mode.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, Pixel};

/// SSD1306 I2C address (0x3C on most breakout boards)
const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;
const BUFFER_LEN: usize = WIDTH * PAGES;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_ADDRESSING_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// SSD1306 OLED driver with pixel framebuffer
pub struct Ssd1306<I2C> {
    i2c: I2C,
    /// Frame buffer, SSD1306 page layout: byte = x + (y / 8) * WIDTH,
    /// bit = y % 8
    buffer: [u8; BUFFER_LEN],
}

impl<I2C> Ssd1306<I2C> {
    /// Create a new driver with a cleared framebuffer
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            buffer: [0; BUFFER_LEN],
        }
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let index = x + (y / 8) * WIDTH;
        let mask = 1 << (y % 8);
        if on {
            self.buffer[index] |= mask;
        } else {
            self.buffer[index] &= !mask;
        }
    }
}

impl<I2C> Ssd1306<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Initialize the display
    ///
    /// Must succeed before anything else is drawn; the firmware treats
    /// a failure here as fatal.
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump (no external VCC)
            cmd::SET_ADDRESSING_MODE,
            0x00,                  // Horizontal addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF, // High contrast
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::RESUME_FROM_RAM,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        Ok(())
    }

    /// Send a command byte to the display
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(SSD1306_ADDR, &[0x00, cmd]).await
    }

    /// Flush the framebuffer to the panel
    ///
    /// Sets the address window once, then streams page by page; in
    /// horizontal addressing mode the column pointer carries across
    /// data transactions.
    pub async fn flush(&mut self) -> Result<(), I2C::Error> {
        self.command(cmd::SET_COLUMN_ADDR).await?;
        self.command(0).await?;
        self.command((WIDTH - 1) as u8).await?;
        self.command(cmd::SET_PAGE_ADDR).await?;
        self.command(0).await?;
        self.command((PAGES - 1) as u8).await?;

        for page in 0..PAGES {
            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40; // Data mode
            data[1..].copy_from_slice(&self.buffer[page * WIDTH..(page + 1) * WIDTH]);
            self.i2c.write(SSD1306_ADDR, &data).await?;
        }

        Ok(())
    }

    /// Set display contrast (0-255)
    #[allow(dead_code)]
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CONTRAST).await?;
        self.command(contrast).await
    }

    /// Turn display on/off
    #[allow(dead_code)]
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.command(cmd::DISPLAY_ON).await
        } else {
            self.command(cmd::DISPLAY_OFF).await
        }
    }
}

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    // Framebuffer writes cannot fail; bus errors only surface in flush
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as usize, point.y as usize, color.is_on());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn pixel_maps_to_page_layout() {
        let mut display = Ssd1306::new(());
        display.set_pixel(0, 0, true);
        display.set_pixel(5, 12, true);

        assert_eq!(display.buffer[0], 0b0000_0001);
        // y=12 -> page 1, bit 4
        assert_eq!(display.buffer[WIDTH + 5], 0b0001_0000);
    }

    #[test]
    fn clearing_a_pixel_resets_only_its_bit() {
        let mut display = Ssd1306::new(());
        display.set_pixel(10, 0, true);
        display.set_pixel(10, 1, true);
        display.set_pixel(10, 0, false);

        assert_eq!(display.buffer[10], 0b0000_0010);
    }

    #[test]
    fn out_of_bounds_pixels_are_dropped() {
        let mut display = Ssd1306::new(());
        display.set_pixel(WIDTH, 0, true);
        display.set_pixel(0, HEIGHT, true);

        assert!(display.buffer.iter().all(|&b| b == 0));
    }

    #[test]
    fn draw_target_fills_framebuffer() {
        let mut display = Ssd1306::new(());
        Rectangle::new(Point::new(0, 0), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();

        for x in 0..8 {
            assert_eq!(display.buffer[x], 0xFF);
        }
        assert_eq!(display.buffer[8], 0x00);
    }

    #[test]
    fn clear_turns_everything_off() {
        let mut display = Ssd1306::new(());
        display.set_pixel(3, 3, true);
        display.clear(BinaryColor::Off).unwrap();
        assert!(display.buffer.iter().all(|&b| b == 0));
    }
}
