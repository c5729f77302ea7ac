//! Sprite and glyph bitmaps for the Pokedex handheld
//!
//! All bitmaps are 1bpp, row-major, MSB-first (the layout expected by
//! `embedded_graphics::image::ImageRaw<BinaryColor>`).
//!
//! Sprite coverage is intentionally sparse: entries without artwork are
//! `None` and the renderer draws a bordered "?" placeholder instead.
//! Dropping a new 32x32 bitmap into this crate and wiring it into
//! `SPRITES` is all it takes to light up another entry.

#![no_std]
#![deny(unsafe_code)]

/// Sprite width and height in pixels
pub const SPRITE_SIZE: u32 = 32;

/// Bytes per sprite (32 rows x 4 bytes)
pub const SPRITE_BYTES: usize = (SPRITE_SIZE * SPRITE_SIZE / 8) as usize;

/// A 32x32 monochrome sprite bitmap
pub type Sprite = [u8; SPRITE_BYTES];

/// Number of catalog entries the sprite table covers
pub const SPRITE_TABLE_LEN: usize = 151;

/// Look up the sprite for a catalog id (1-based)
///
/// Returns `None` both for entries without artwork and for ids outside
/// the table, so callers never need a separate bounds check.
pub fn sprite(id: u16) -> Option<&'static Sprite> {
    if id == 0 || id as usize > SPRITE_TABLE_LEN {
        return None;
    }
    SPRITES[(id - 1) as usize]
}

/// 8x8 music note glyph drawn in the header (one byte per row)
pub const NOTE_GLYPH: [u8; 8] = [
    0b0111_1110,
    0b0111_1110,
    0b0110_0110,
    0b0110_0110,
    0b0110_0110,
    0b0110_0110,
    0b1110_1110,
    0b1100_1100,
];

/// Width of the note glyph in pixels
pub const NOTE_GLYPH_SIZE: u32 = 8;

// #001 Bulbasaur
static BULBASAUR: Sprite = [
    0x00, 0x00, 0x00, 0x00, // ................................
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x3C, 0x00, 0x00, // bulb tip
    0x00, 0xFF, 0x00, 0x00,
    0x01, 0xFF, 0x80, 0x00,
    0x03, 0xFF, 0xC0, 0x00,
    0x03, 0xFF, 0xC0, 0x00,
    0x07, 0xFF, 0xE0, 0x00,
    0x07, 0xFF, 0xE0, 0x00,
    0x07, 0xFF, 0xF0, 0x00,
    0x0F, 0xFF, 0xF8, 0x00,
    0x0F, 0xFF, 0xFF, 0x00, // body widens
    0x1F, 0xFF, 0xFF, 0xE0,
    0x3F, 0xFF, 0xFF, 0xF0,
    0x3C, 0xFF, 0xFF, 0xF8, // eye notch
    0x3C, 0xFF, 0xFF, 0xF8,
    0x3F, 0xFF, 0xFF, 0xFC,
    0x3F, 0xFF, 0xFF, 0xFC,
    0x30, 0x3F, 0xFF, 0xFC, // mouth
    0x3F, 0xFF, 0xFF, 0xFC,
    0x3F, 0xFF, 0xFF, 0xF8,
    0x1F, 0xFF, 0xFF, 0xF8,
    0x1F, 0xFF, 0xFF, 0xF0,
    0x0F, 0xFF, 0xFF, 0xF0,
    0x0F, 0x87, 0xE1, 0xE0, // legs
    0x0F, 0x87, 0xE1, 0xE0,
    0x07, 0x83, 0xC1, 0xE0,
    0x07, 0x83, 0xC1, 0xC0,
    0x0F, 0xC7, 0xE3, 0xE0, // feet
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

// #004 Charmander
static CHARMANDER: Sprite = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x30, // tail flame
    0x00, 0x00, 0x00, 0x78,
    0x00, 0xFF, 0x00, 0x78, // head
    0x03, 0xFF, 0xC0, 0x30,
    0x07, 0xFF, 0xE0, 0xC0,
    0x07, 0x9F, 0xE0, 0xC0, // eye notch
    0x07, 0x9F, 0xE0, 0x60,
    0x07, 0xFF, 0xE0, 0x60,
    0x07, 0xE1, 0xE0, 0x30, // mouth
    0x01, 0xFF, 0x80, 0x30, // neck
    0x03, 0xFF, 0xE0, 0x20,
    0x07, 0xFF, 0xF0, 0x60,
    0x0F, 0xFF, 0xF8, 0xC0,
    0x0F, 0xFF, 0xFD, 0x80, // tail meets body
    0x1F, 0xFF, 0xFF, 0x00,
    0x1F, 0xFF, 0xFE, 0x00,
    0x1F, 0xFF, 0xFE, 0x00,
    0x0F, 0xFF, 0xFC, 0x00,
    0x0F, 0xFF, 0xF8, 0x00,
    0x0F, 0xFF, 0xF0, 0x00,
    0x07, 0xFF, 0xE0, 0x00, // belly
    0x07, 0xFF, 0xE0, 0x00,
    0x07, 0xC3, 0xE0, 0x00, // legs
    0x07, 0xC3, 0xE0, 0x00,
    0x07, 0x81, 0xE0, 0x00,
    0x07, 0x81, 0xE0, 0x00,
    0x0F, 0xC3, 0xF0, 0x00, // feet
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

// #007 Squirtle
static SQUIRTLE: Sprite = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x3F, 0xC0, 0x00, // head
    0x00, 0x7F, 0xE0, 0x00,
    0x00, 0xFF, 0xF0, 0x00,
    0x00, 0xE7, 0x30, 0x00, // eyes
    0x00, 0xE7, 0x30, 0x00,
    0x00, 0xFF, 0xF0, 0x00,
    0x00, 0xE0, 0x70, 0x00, // mouth
    0x00, 0x7F, 0xE0, 0x00,
    0x03, 0xFF, 0xFC, 0x00, // shell top
    0x0F, 0xFF, 0xFF, 0x00,
    0x1F, 0xFF, 0xFF, 0x80,
    0x3F, 0xFF, 0xFF, 0xC0,
    0x3C, 0xF3, 0xCF, 0xC0, // shell lattice
    0x3C, 0xF3, 0xCF, 0xC0,
    0x3F, 0xFF, 0xFF, 0xC0,
    0x33, 0xCF, 0x3C, 0xC0,
    0x33, 0xCF, 0x3C, 0xC0,
    0x3F, 0xFF, 0xFF, 0xC0,
    0x1F, 0xFF, 0xFF, 0x80,
    0x0F, 0xFF, 0xFF, 0x00,
    0x07, 0xFF, 0xFE, 0x00,
    0x03, 0xFF, 0xFC, 0x00,
    0x0F, 0x83, 0xE0, 0x00, // legs
    0x0F, 0x83, 0xE0, 0x00,
    0x1F, 0xC7, 0xF0, 0x00, // feet
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

// #025 Pikachu
static PIKACHU: Sprite = [
    0x0E, 0x00, 0x00, 0xE0, // ear tips
    0x0E, 0x00, 0x00, 0xE0,
    0x0F, 0x00, 0x01, 0xE0,
    0x07, 0x80, 0x03, 0xC0,
    0x07, 0xC0, 0x07, 0xC0,
    0x03, 0xE0, 0x0F, 0x80,
    0x01, 0xFF, 0xFF, 0x00, // ears meet head
    0x03, 0xFF, 0xFF, 0xC0,
    0x07, 0xFF, 0xFF, 0xE0,
    0x07, 0x9F, 0xF9, 0xE0, // eyes
    0x07, 0x9F, 0xF9, 0xE0,
    0x07, 0xFF, 0xFF, 0xE0,
    0x0F, 0xFF, 0xFF, 0xF0, // cheeks
    0x0F, 0xF8, 0x1F, 0xF0, // mouth
    0x0F, 0xFC, 0x3F, 0xF0,
    0x07, 0xFF, 0xFF, 0xE0,
    0x03, 0xFF, 0xFF, 0xC0, // body
    0x03, 0xFF, 0xFF, 0xC0,
    0x07, 0xFF, 0xFF, 0xE0,
    0x07, 0xFF, 0xFF, 0xE0,
    0x0F, 0xFF, 0xFF, 0xF0,
    0x0F, 0xFF, 0xFF, 0xF0,
    0x0F, 0xFF, 0xFF, 0xF0,
    0x0F, 0xFF, 0xFF, 0xF0,
    0x07, 0xFF, 0xFF, 0xE0,
    0x07, 0xFF, 0xFF, 0xE0,
    0x0F, 0x87, 0xE1, 0xF0, // feet
    0x0F, 0x87, 0xE1, 0xF0,
    0x1F, 0x87, 0xE1, 0xF8,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Sprite table indexed by `id - 1`
static SPRITES: [Option<&'static Sprite>; SPRITE_TABLE_LEN] = {
    let mut table: [Option<&'static Sprite>; SPRITE_TABLE_LEN] = [None; SPRITE_TABLE_LEN];
    table[0] = Some(&BULBASAUR);
    table[3] = Some(&CHARMANDER);
    table[6] = Some(&SQUIRTLE);
    table[24] = Some(&PIKACHU);
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_ids_have_sprites() {
        assert!(sprite(1).is_some());
        assert!(sprite(4).is_some());
        assert!(sprite(7).is_some());
        assert!(sprite(25).is_some());
    }

    #[test]
    fn unconfigured_id_is_absent() {
        assert!(sprite(151).is_none());
        assert!(sprite(83).is_none());
    }

    #[test]
    fn out_of_range_is_absent() {
        assert!(sprite(0).is_none());
        assert!(sprite(152).is_none());
        assert!(sprite(u16::MAX).is_none());
    }

    #[test]
    fn sprites_are_full_bitmaps() {
        for id in 1..=SPRITE_TABLE_LEN as u16 {
            if let Some(data) = sprite(id) {
                assert_eq!(data.len(), SPRITE_BYTES);
            }
        }
    }
}
