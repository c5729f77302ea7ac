//! Screen layouts for the 128x64 OLED
//!
//! All drawing is generic over an `embedded-graphics` [`DrawTarget`] so
//! the layouts render identically into the SSD1306 framebuffer on the
//! device and into a plain array in host tests.
//!
//! The geometry is fixed: header line across the top with a note glyph
//! in the corner, the dex number in a large font on the left, the name
//! underneath, and the 32x32 sprite (or its placeholder) on the right.
//! The regions are disjoint, so draw order does not matter visually.

use core::fmt::Write;

use embedded_graphics::{
    image::{Image, ImageRaw},
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use heapless::String;

use pokedex_assets::{Sprite, NOTE_GLYPH, NOTE_GLYPH_SIZE, SPRITE_SIZE};

/// Header line shown on every entry screen
pub const HEADER_TEXT: &str = "POKEDEX RP2040";

const HEADER_ORIGIN: Point = Point::new(0, 0);
const GLYPH_ORIGIN: Point = Point::new(118, 0);
const NUMBER_ORIGIN: Point = Point::new(0, 20);
const NAME_ORIGIN: Point = Point::new(0, 45);
const SPRITE_ORIGIN: Point = Point::new(80, 15);
const PLACEHOLDER_QMARK: Point = Point::new(89, 24);

/// Format a catalog id as a dex number, zero-padded to three digits
pub fn dex_number(id: u16) -> String<8> {
    let mut text = String::new();
    let _ = write!(text, "#{:03}", id);
    text
}

/// Progress line for the audio retry screen
///
/// One dot per retry; the caller cycles the count so the line never
/// runs off the screen.
pub fn audio_progress_line(dots: u8) -> String<22> {
    let mut text = String::new();
    let _ = text.push_str("Audio: ");
    for _ in 0..dots {
        if text.push('.').is_err() {
            break;
        }
    }
    text
}

/// Draw a full catalog entry screen
///
/// Clears the buffer first; the caller is responsible for flushing.
pub fn draw_entry<D>(
    target: &mut D,
    id: u16,
    name: &str,
    sprite: Option<&Sprite>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let small = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let large = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);

    target.clear(BinaryColor::Off)?;

    // Header
    Text::with_baseline(HEADER_TEXT, HEADER_ORIGIN, small, Baseline::Top).draw(target)?;
    let glyph = ImageRaw::<BinaryColor>::new(&NOTE_GLYPH, NOTE_GLYPH_SIZE);
    Image::new(&glyph, GLYPH_ORIGIN).draw(target)?;

    // Dex number
    Text::with_baseline(&dex_number(id), NUMBER_ORIGIN, large, Baseline::Top).draw(target)?;

    // Name
    Text::with_baseline(name, NAME_ORIGIN, small, Baseline::Top).draw(target)?;

    // Sprite, or a bordered "?" when no artwork is configured
    match sprite {
        Some(data) => {
            let raw = ImageRaw::<BinaryColor>::new(data, SPRITE_SIZE);
            Image::new(&raw, SPRITE_ORIGIN).draw(target)?;
        }
        None => {
            Rectangle::new(SPRITE_ORIGIN, Size::new(SPRITE_SIZE, SPRITE_SIZE))
                .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
                .draw(target)?;
            Text::with_baseline("?", PLACEHOLDER_QMARK, large, Baseline::Top).draw(target)?;
        }
    }

    Ok(())
}

/// Draw the boot screen with the audio retry progress line
pub fn draw_boot<D>(target: &mut D, dots: u8) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let small = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    target.clear(BinaryColor::Off)?;
    Text::with_baseline("Loading Pokedex...", Point::new(0, 20), small, Baseline::Top)
        .draw(target)?;
    Text::with_baseline(&audio_progress_line(dots), Point::new(0, 40), small, Baseline::Top)
        .draw(target)?;

    Ok(())
}

/// Draw the boot screen once the audio module has reported in
pub fn draw_boot_ok<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let small = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    target.clear(BinaryColor::Off)?;
    Text::with_baseline("Loading Pokedex...", Point::new(0, 20), small, Baseline::Top)
        .draw(target)?;
    Text::with_baseline("Audio: OK!", Point::new(0, 40), small, Baseline::Top).draw(target)?;

    Ok(())
}
