//! DFPlayer Mini audio module driver
//!
//! The DFPlayer Mini is a serial MP3 module (9600 baud, 8N1) that plays
//! numbered tracks from an SD card.
//!
//! # Serial Protocol
//!
//! Fixed 10-byte frames in both directions:
//!
//! - Start byte: 0x7E
//! - Version: 0xFF
//! - Length: 0x06 (bytes between version and checksum, inclusive)
//! - Command
//! - Feedback flag (0x00 = no ack requested)
//! - Parameter (2 bytes, big-endian)
//! - Checksum (2 bytes, big-endian): two's complement of the sum of
//!   the six bytes from version through parameter low
//! - End byte: 0xEF
//!
//! Commands are fire-and-forget; the only reply the caller waits for is
//! the module's online report (0x3F) after a reset, used by
//! [`DfPlayer::begin`].

use embedded_io_async::{Read, Write};

/// Frame framing bytes
const FRAME_START: u8 = 0x7E;
const FRAME_VERSION: u8 = 0xFF;
const FRAME_LENGTH: u8 = 0x06;
const FRAME_END: u8 = 0xEF;

/// Complete frame size in bytes
pub const FRAME_SIZE: usize = 10;

/// Highest volume level the module accepts
pub const VOLUME_MAX: u8 = 30;

/// Command bytes sent to the module
pub mod cmd {
    /// Play a track by number (1-based, as stored on the SD card)
    pub const PLAY_TRACK: u8 = 0x03;
    /// Set volume (0-30)
    pub const SET_VOLUME: u8 = 0x06;
    /// Reset the module; it reports back online once storage is ready
    pub const RESET: u8 = 0x0C;
}

/// Reply command bytes received from the module
pub mod reply {
    /// Module finished initializing; parameter is the storage bitmap
    pub const DEVICE_ONLINE: u8 = 0x3F;
    /// Module error report; parameter low byte is the error code
    pub const DEVICE_ERROR: u8 = 0x40;
    /// Acknowledge (only sent when the feedback flag was set)
    pub const ACK: u8 = 0x41;
}

/// Checksum over the six frame bytes from version through parameter low
pub fn checksum(body: &[u8; 6]) -> u16 {
    let mut sum: u16 = 0;
    for &byte in body {
        sum = sum.wrapping_add(byte as u16);
    }
    0u16.wrapping_sub(sum)
}

/// Build a complete command frame
pub fn build_frame(command: u8, param: u16) -> [u8; FRAME_SIZE] {
    let [param_hi, param_lo] = param.to_be_bytes();
    let body = [FRAME_VERSION, FRAME_LENGTH, command, 0x00, param_hi, param_lo];
    let [check_hi, check_lo] = checksum(&body).to_be_bytes();

    let mut frame = [0u8; FRAME_SIZE];
    frame[0] = FRAME_START;
    frame[1..7].copy_from_slice(&body);
    frame[7] = check_hi;
    frame[8] = check_lo;
    frame[9] = FRAME_END;
    frame
}

/// A decoded reply frame from the module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply {
    /// Module is online; parameter reports the attached storage
    Online { storage: u16 },
    /// Module reported an error code
    DeviceError(u8),
    /// Command acknowledge
    Ack,
    /// Any other report (track finished, status queries, ...)
    Other { command: u8, param: u16 },
}

/// Errors from reply parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Framing bytes did not match the fixed protocol header/trailer
    InvalidFrame,
    /// Checksum mismatch
    InvalidChecksum,
}

/// Driver errors, generic over the UART error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DfPlayerError<E> {
    /// Underlying UART error
    Io(E),
    /// Module reported an error code (no card, bad track, ...)
    Device(u8),
}

/// State machine for parsing reply frames one byte at a time
///
/// Bytes before a start byte are discarded, so the parser resynchronizes
/// after line noise or a partial frame.
#[derive(Debug, Clone)]
pub struct ReplyParser {
    frame: [u8; FRAME_SIZE],
    /// Next write position; 0 means waiting for a start byte
    filled: usize,
}

impl ReplyParser {
    pub const fn new() -> Self {
        Self {
            frame: [0; FRAME_SIZE],
            filled: 0,
        }
    }

    /// Feed one received byte
    ///
    /// Returns `Ok(Some(reply))` when a full, valid frame completes.
    /// On a framing or checksum error the parser resets to hunting for
    /// the next start byte.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Reply>, ParseError> {
        if self.filled == 0 {
            if byte != FRAME_START {
                return Ok(None);
            }
            self.frame[0] = byte;
            self.filled = 1;
            return Ok(None);
        }

        self.frame[self.filled] = byte;
        self.filled += 1;
        if self.filled < FRAME_SIZE {
            return Ok(None);
        }

        self.filled = 0;
        self.validate().map(Some)
    }

    fn validate(&self) -> Result<Reply, ParseError> {
        if self.frame[1] != FRAME_VERSION
            || self.frame[2] != FRAME_LENGTH
            || self.frame[9] != FRAME_END
        {
            return Err(ParseError::InvalidFrame);
        }

        let body: [u8; 6] = [
            self.frame[1],
            self.frame[2],
            self.frame[3],
            self.frame[4],
            self.frame[5],
            self.frame[6],
        ];
        let expected = checksum(&body);
        let received = u16::from_be_bytes([self.frame[7], self.frame[8]]);
        if expected != received {
            return Err(ParseError::InvalidChecksum);
        }

        let command = self.frame[3];
        let param = u16::from_be_bytes([self.frame[5], self.frame[6]]);
        Ok(match command {
            reply::DEVICE_ONLINE => Reply::Online { storage: param },
            reply::DEVICE_ERROR => Reply::DeviceError(param as u8),
            reply::ACK => Reply::Ack,
            _ => Reply::Other { command, param },
        })
    }
}

impl Default for ReplyParser {
    fn default() -> Self {
        Self::new()
    }
}

/// DFPlayer Mini driver over an async UART
pub struct DfPlayer<U> {
    uart: U,
    parser: ReplyParser,
}

impl<U> DfPlayer<U>
where
    U: Read + Write,
{
    pub fn new(uart: U) -> Self {
        Self {
            uart,
            parser: ReplyParser::new(),
        }
    }

    async fn send(&mut self, command: u8, param: u16) -> Result<(), DfPlayerError<U::Error>> {
        let frame = build_frame(command, param);
        self.uart.write_all(&frame).await.map_err(DfPlayerError::Io)
    }

    /// Reset the module and wait for its online report
    ///
    /// Blocks until the module answers; callers that need a retry
    /// policy wrap this in a timeout.
    pub async fn begin(&mut self) -> Result<u16, DfPlayerError<U::Error>> {
        self.send(cmd::RESET, 0).await?;

        let mut byte = [0u8; 1];
        loop {
            let n = self.uart.read(&mut byte).await.map_err(DfPlayerError::Io)?;
            if n == 0 {
                continue;
            }
            match self.parser.feed(byte[0]) {
                Ok(Some(Reply::Online { storage })) => return Ok(storage),
                Ok(Some(Reply::DeviceError(code))) => return Err(DfPlayerError::Device(code)),
                // Other replies and line noise: keep scanning
                Ok(_) | Err(_) => {}
            }
        }
    }

    /// Set the output volume, clamped to the module's 0-30 range
    ///
    /// Fire-and-forget; no acknowledge is awaited.
    pub async fn set_volume(&mut self, level: u8) -> Result<(), DfPlayerError<U::Error>> {
        self.send(cmd::SET_VOLUME, level.min(VOLUME_MAX) as u16).await
    }

    /// Start playback of a track by number
    ///
    /// Fire-and-forget; no acknowledge is awaited.
    pub async fn play(&mut self, track: u16) -> Result<(), DfPlayerError<U::Error>> {
        self.send(cmd::PLAY_TRACK, track).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_track_one_matches_datasheet_example() {
        // Canonical example frame from the DFPlayer Mini datasheet
        let frame = build_frame(cmd::PLAY_TRACK, 1);
        assert_eq!(
            frame,
            [0x7E, 0xFF, 0x06, 0x03, 0x00, 0x00, 0x01, 0xFE, 0xF7, 0xEF]
        );
    }

    #[test]
    fn volume_frame_checksum() {
        let frame = build_frame(cmd::SET_VOLUME, 30);
        assert_eq!(
            frame,
            [0x7E, 0xFF, 0x06, 0x06, 0x00, 0x00, 0x1E, 0xFE, 0xD7, 0xEF]
        );
    }

    #[test]
    fn checksum_is_twos_complement_of_sum() {
        let body = [0xFF, 0x06, 0x0C, 0x00, 0x00, 0x00];
        let sum = 0xFFu16 + 0x06 + 0x0C;
        assert_eq!(checksum(&body), 0u16.wrapping_sub(sum));
    }

    fn feed_all(parser: &mut ReplyParser, bytes: &[u8]) -> Option<Reply> {
        let mut result = None;
        for &b in bytes {
            if let Ok(Some(reply)) = parser.feed(b) {
                result = Some(reply);
            }
        }
        result
    }

    #[test]
    fn parser_decodes_online_report() {
        // 0x3F with storage bitmap 0x0002 (SD card)
        let frame = build_frame(reply::DEVICE_ONLINE, 2);
        let mut parser = ReplyParser::new();
        assert_eq!(
            feed_all(&mut parser, &frame),
            Some(Reply::Online { storage: 2 })
        );
    }

    #[test]
    fn parser_resyncs_after_noise() {
        let mut parser = ReplyParser::new();
        let mut bytes = [0u8; 3 + FRAME_SIZE];
        bytes[..3].copy_from_slice(&[0x00, 0x12, 0xEF]); // leading garbage
        bytes[3..].copy_from_slice(&build_frame(reply::ACK, 0));
        assert_eq!(feed_all(&mut parser, &bytes), Some(Reply::Ack));
    }

    #[test]
    fn parser_rejects_bad_checksum() {
        let mut frame = build_frame(reply::DEVICE_ONLINE, 2);
        frame[8] ^= 0xFF;
        let mut parser = ReplyParser::new();
        let mut saw_error = false;
        for &b in &frame {
            if parser.feed(b) == Err(ParseError::InvalidChecksum) {
                saw_error = true;
            }
        }
        assert!(saw_error);
        // Parser recovered: a clean frame right after still decodes
        let clean = build_frame(reply::DEVICE_ONLINE, 2);
        assert_eq!(
            feed_all(&mut parser, &clean),
            Some(Reply::Online { storage: 2 })
        );
    }

    #[test]
    fn parser_maps_error_report() {
        // Error code 0x01: module busy
        let frame = build_frame(reply::DEVICE_ERROR, 1);
        let mut parser = ReplyParser::new();
        assert_eq!(feed_all(&mut parser, &frame), Some(Reply::DeviceError(1)));
    }

    #[test]
    fn volume_is_clamped_at_frame_level() {
        // The driver clamps before framing; check the helper directly
        let frame = build_frame(cmd::SET_VOLUME, VOLUME_MAX as u16);
        assert_eq!(frame[6], 30);
    }
}
