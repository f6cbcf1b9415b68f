//! 256-colour palette lookup + zero-alloc ANSI escape wrapper.

use std::{fmt, str};

use thiserror::Error;

use crate::core::data::Lane;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color `{0}` (run `blockbar colors` for the list)")]
    Unknown(String),
}

/// Named 256-colour terminal indices.
const PALETTE: [(&str, u8); 15] = [
    ("violet", 55),
    ("purple", 93),
    ("pink", 201),
    ("red", 196),
    ("maroon", 52),
    ("gold", 214),
    ("yellow", 226),
    ("green", 46),
    ("pine", 22),
    ("cyan", 51),
    ("blue", 21),
    ("navy", 17),
    ("black", 232),
    ("gray", 239),
    ("white", 255),
];

/// Names whose `bright_` variant is the colour itself.
const NO_BRIGHT: [&str; 5] = ["maroon", "green", "yellow", "cyan", "white"];

const BRIGHT_PREFIX: &str = "bright_";
const BRIGHT_OFFSET: u8 = 6;

// --- Color ---

/// A resolved palette entry (256-colour index).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(u8);

impl Color {
    /// Resolve `name` or `bright_name`.
    ///
    /// # Errors
    /// [`ColorError::Unknown`] if the base name is not in the palette.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let lowered = s.trim().to_ascii_lowercase();
        let (bright, base) = match lowered.strip_prefix(BRIGHT_PREFIX) {
            Some(base) => (true, base),
            None => (false, lowered.as_str()),
        };
        let index = PALETTE
            .iter()
            .find(|(name, _)| *name == base)
            .map(|&(_, index)| index)
            .ok_or_else(|| ColorError::Unknown(s.to_owned()))?;

        if bright && !NO_BRIGHT.contains(&base) {
            Ok(Self(index + BRIGHT_OFFSET))
        } else {
            Ok(Self(index))
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Every accepted name: the base palette followed by the bright variants.
    pub fn all_names() -> impl Iterator<Item = String> {
        let base = PALETTE.iter().map(|(name, _)| (*name).to_owned());
        let bright = PALETTE
            .iter()
            .filter(|(name, _)| !NO_BRIGHT.contains(name))
            .map(|(name, _)| format!("{BRIGHT_PREFIX}{name}"));
        base.chain(bright)
    }
}

// --- AnsiCode ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    /// Empty sequence, used when colour is switched off.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::Static("")
    }
    #[inline]
    #[must_use]
    pub const fn reverse() -> Self {
        Self::Static("\x1b[7m")
    }
    #[inline]
    #[must_use]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// Foreground escape `ESC[38;5;Nm`.
    #[must_use]
    pub fn fg(c: Color) -> Self {
        let mut buf = [0u8; 20];
        let mut len = push(&mut buf, 0, b"\x1b[38;5;");
        len += write_u8(&mut buf[len..], c.index());
        len = push(&mut buf, len, b"m");
        Self::inline(buf, len)
    }

    /// Foreground + background escape `ESC[38;5;F;48;5;Bm`.
    #[must_use]
    pub fn transition(fg: Color, bg: Color) -> Self {
        let mut buf = [0u8; 20];
        let mut len = push(&mut buf, 0, b"\x1b[38;5;");
        len += write_u8(&mut buf[len..], fg.index());
        len = push(&mut buf, len, b";48;5;");
        len += write_u8(&mut buf[len..], bg.index());
        len = push(&mut buf, len, b"m");
        Self::inline(buf, len)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn inline(buf: [u8; 20], len: usize) -> Self {
        // longest sequence is `ESC[38;5;255;48;5;255m`, exactly 20 bytes
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or_default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Helpers ---
fn push(dst: &mut [u8], at: usize, bytes: &[u8]) -> usize {
    dst[at..at + bytes.len()].copy_from_slice(bytes);
    at + bytes.len()
}

fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

// --- Palette ---

/// Escape sequences resolved once per render.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    series: [AnsiCode; 2],
    /// Indexed by the lane painted in the foreground.
    transition: [AnsiCode; 2],
}

impl Palette {
    #[must_use]
    pub fn new(primary: Color, auxiliary: Color, enabled: bool) -> Self {
        if !enabled {
            return Self {
                series: [AnsiCode::none(); 2],
                transition: [AnsiCode::none(); 2],
            };
        }
        Self {
            series: [AnsiCode::fg(primary), AnsiCode::fg(auxiliary)],
            transition: [
                AnsiCode::transition(primary, auxiliary),
                AnsiCode::transition(auxiliary, primary),
            ],
        }
    }

    #[inline]
    #[must_use]
    pub fn series(&self, lane: Lane) -> AnsiCode {
        self.series[lane.index()]
    }

    /// Foreground `fg`'s colour over the other lane's colour.
    #[inline]
    #[must_use]
    pub fn transition(&self, fg: Lane) -> AnsiCode {
        self.transition[fg.index()]
    }
}
