use crate::core::data::colour::Colour;
use rand::Rng;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteError {
    ZeroColourCount,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColourCount => {
                write!(f, "palette parameter p must be at least 1")
            }
        }
    }
}

impl Error for PaletteError {}

/// Inputs to the palette recurrence. `p` is the colour count (palette length
/// ends up `p + 1`); `q`, `r`, `s` drive the red, green and blue channels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PaletteParams {
    pub p: u32,
    pub q: u32,
    pub r: u32,
    pub s: u32,
}

impl PaletteParams {
    /// Draws parameters from the classic ranges: p in [499, 999], the channel
    /// multipliers in [2, 999]. Takes the generator explicitly so tests can
    /// seed one.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            p: rng.gen_range(499..=999),
            q: rng.gen_range(2..=999),
            r: rng.gen_range(2..=999),
            s: rng.gen_range(2..=999),
        }
    }
}

/// The ordered colour sequence iteration counts are mapped into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Builds the palette from a multiplicative recurrence: each channel
    /// incrementally approximates q^i mod p (then mod 256), starting from
    /// colour 0 = (1, 1, 1). Deterministic in the parameters.
    pub fn generate(params: &PaletteParams) -> Result<Self, PaletteError> {
        if params.p == 0 {
            // The recurrence reduces modulo p, so p = 0 is unusable.
            return Err(PaletteError::ZeroColourCount);
        }

        let p = u64::from(params.p);
        let mut colours = Vec::with_capacity(params.p as usize + 1);

        let mut cx: u64 = 1;
        let mut cy: u64 = 1;
        let mut cz: u64 = 1;
        colours.push(Colour { r: 1, g: 1, b: 1 });

        for _ in 0..params.p {
            cx = (cx * u64::from(params.q)) % p % 256;
            cy = (cy * u64::from(params.r)) % p % 256;
            cz = (cz * u64::from(params.s)) % p % 256;
            colours.push(Colour {
                r: cx as u8,
                g: cy as u8,
                b: cz as u8,
            });
        }

        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Colour at `index` modulo the palette length.
    #[must_use]
    pub fn colour(&self, index: usize) -> Colour {
        self.colours[index % self.colours.len()]
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }
}
