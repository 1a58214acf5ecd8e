//! Bitmap fonts
//!
//! A [`BitmapFont`] maps symbols to fixed-height dot patterns. The
//! built-in font is a classic 5x7 matrix covering `A-Z`, `0-9` and space.

use glyphmatch_core::{BACKGROUND, Error, FontId, Glyph, INK, Result};
use std::collections::BTreeMap;

/// Number of rows in a built-in pattern.
pub const CELL_HEIGHT: u32 = 7;

/// Number of columns in a built-in pattern.
pub const CELL_WIDTH: u32 = 5;

/// Cap height as a fraction of the em size.
pub const DEFAULT_CAP_HEIGHT: f32 = 0.7;

/// One symbol as rows of on/off dots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotPattern {
    width: u32,
    rows: Vec<Vec<bool>>,
}

impl DotPattern {
    /// Parse a pattern from rows of `#` (ink) and `.` (background).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if there are no rows, the rows
    /// are empty, or they differ in width.
    pub fn parse(rows: &[&str]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::InvalidParameter("empty dot pattern".to_string()));
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(Error::InvalidParameter("zero-width dot pattern".to_string()));
        }
        if let Some(i) = rows.iter().position(|r| r.chars().count() != width) {
            return Err(Error::InvalidParameter(format!(
                "ragged dot pattern: row {i} is not {width} dots wide"
            )));
        }
        Ok(Self::from_rows(rows))
    }

    /// Build from rows without validation; short rows read as background.
    fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        Self {
            width: width as u32,
            rows: rows
                .iter()
                .map(|r| r.chars().map(|c| c == '#').collect())
                .collect(),
        }
    }

    /// Pattern width in dots.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pattern height in dots.
    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Whether the dot at (x, y) is inked.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.rows
            .get(y as usize)
            .and_then(|r| r.get(x as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Widen every stroke by one dot to the right.
    pub fn emboldened(&self) -> Self {
        let width = self.width + 1;
        let rows = self
            .rows
            .iter()
            .map(|r| {
                (0..width as usize)
                    .map(|x| r.get(x).copied().unwrap_or(false) || (x > 0 && r[x - 1]))
                    .collect()
            })
            .collect();
        Self { width, rows }
    }

    /// Draw at one pixel per dot.
    pub fn to_glyph(&self) -> Result<Glyph> {
        let mut glyph = Glyph::new_filled(self.width, self.height(), BACKGROUND)?.to_mut();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &on) in row.iter().enumerate() {
                if on {
                    glyph.set_pixel(x as u32, y as u32, INK)?;
                }
            }
        }
        Ok(glyph.into())
    }
}

/// A named set of dot patterns
#[derive(Debug, Clone)]
pub struct BitmapFont {
    id: FontId,
    cap_height: f32,
    cell_height: u32,
    patterns: BTreeMap<char, DotPattern>,
}

impl BitmapFont {
    /// Create an empty font.
    pub fn new(id: FontId, cell_height: u32) -> Self {
        Self {
            id,
            cap_height: DEFAULT_CAP_HEIGHT,
            cell_height,
            patterns: BTreeMap::new(),
        }
    }

    /// The built-in regular 5x7 font.
    pub fn builtin() -> Self {
        let mut font = Self::new(FontId::builtin(), CELL_HEIGHT);
        for (symbol, rows) in BUILTIN_PATTERNS {
            font.insert(*symbol, DotPattern::from_rows(rows));
        }
        font
    }

    /// The built-in bold font: the regular font with widened strokes.
    pub fn builtin_bold() -> Self {
        Self::builtin().emboldened(FontId::builtin_bold())
    }

    /// Derive a bold variant under a new identity.
    pub fn emboldened(&self, id: FontId) -> Self {
        Self {
            id,
            cap_height: self.cap_height,
            cell_height: self.cell_height,
            patterns: self
                .patterns
                .iter()
                .map(|(&c, p)| (c, p.emboldened()))
                .collect(),
        }
    }

    /// Set the cap height as a fraction of the em size.
    pub fn with_cap_height(mut self, cap_height: f32) -> Self {
        self.cap_height = cap_height;
        self
    }

    /// Add or replace a symbol.
    pub fn insert(&mut self, symbol: char, pattern: DotPattern) {
        self.patterns.insert(symbol, pattern);
    }

    /// Font identity.
    pub fn id(&self) -> &FontId {
        &self.id
    }

    /// Cap height as a fraction of the em size.
    pub fn cap_height(&self) -> f32 {
        self.cap_height
    }

    /// Nominal pattern height in dots.
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Look up a symbol's pattern.
    pub fn pattern(&self, symbol: char) -> Option<&DotPattern> {
        self.patterns.get(&symbol)
    }

    /// Symbols covered by this font, in code point order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.patterns.keys().copied()
    }

    /// Scale factor from dots to pixels for an em size.
    pub fn scale_for_size(&self, size: u32) -> f32 {
        size as f32 * self.cap_height / self.cell_height as f32
    }
}

const BUILTIN_PATTERNS: &[(char, [&str; 7])] = &[
    (' ', [".....", ".....", ".....", ".....", ".....", ".....", "....."]),
    ('A', [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
    ('B', ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."]),
    ('C', [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."]),
    ('D', ["###..", "#..#.", "#...#", "#...#", "#...#", "#..#.", "###.."]),
    ('E', ["#####", "#....", "#....", "####.", "#....", "#....", "#####"]),
    ('F', ["#####", "#....", "#....", "####.", "#....", "#....", "#...."]),
    ('G', [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"]),
    ('H', ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]),
    ('I', [".###.", "..#..", "..#..", "..#..", "..#..", "..#..", ".###."]),
    ('J', ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."]),
    ('K', ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"]),
    ('L', ["#....", "#....", "#....", "#....", "#....", "#....", "#####"]),
    ('M', ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"]),
    ('N', ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"]),
    ('O', [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    ('P', ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."]),
    ('Q', [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"]),
    ('R', ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"]),
    ('S', [".####", "#....", "#....", ".###.", "....#", "....#", "####."]),
    ('T', ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."]),
    ('U', ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."]),
    ('V', ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."]),
    ('W', ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."]),
    ('X', ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"]),
    ('Y', ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."]),
    ('Z', ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"]),
    ('0', [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."]),
    ('1', ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."]),
    ('2', [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"]),
    ('3', ["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."]),
    ('4', ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."]),
    ('5', ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."]),
    ('6', ["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."]),
    ('7', ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."]),
    ('8', [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."]),
    ('9', [".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."]),
];
