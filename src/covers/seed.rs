//! Hue seeds for generated artwork.

/// Hue seed for a placeholder, with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueSeed {
    /// Hue in degrees, `0..360`.
    pub hue: u16,
    /// Whether the same request always yields the same hue.
    pub deterministic: bool,
}

impl HueSeed {
    /// Seed derived from a book identifier.
    pub fn for_book(book_id: &str) -> Self {
        Self {
            hue: hue_for_book(book_id),
            deterministic: true,
        }
    }

    /// Seed drawn from a random source.
    pub fn random(source: &dyn SeedSource) -> Self {
        Self {
            hue: source.random_hue() % 360,
            deterministic: false,
        }
    }

    /// Book seed when an identifier is present, random otherwise.
    pub fn resolve(book_id: Option<&str>, source: &dyn SeedSource) -> Self {
        match book_id {
            Some(id) => Self::for_book(id),
            None => Self::random(source),
        }
    }
}

/// Sum of the UTF-16 code units of `book_id`, modulo 360.
pub fn hue_for_book(book_id: &str) -> u16 {
    let sum = book_id
        .encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_add(u32::from(unit)));
    (sum % 360) as u16
}

/// Source of randomness for non-deterministic artwork.
pub trait SeedSource: Send + Sync {
    /// Uniform hue in `0..360`.
    fn random_hue(&self) -> u16;

    /// Uniform value in `[0, 1)`.
    fn random_unit(&self) -> f32;
}

/// Thread-local RNG backed seed source.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSeeds;

impl SeedSource for ThreadRngSeeds {
    fn random_hue(&self) -> u16 {
        (rand::random::<u32>() % 360) as u16
    }

    fn random_unit(&self) -> f32 {
        rand::random::<f32>()
    }
}

/// Seed source returning fixed values.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeeds {
    /// Hue returned by `random_hue`.
    pub hue: u16,
    /// Value returned by `random_unit`.
    pub unit: f32,
}

impl SeedSource for FixedSeeds {
    fn random_hue(&self) -> u16 {
        self.hue
    }

    fn random_unit(&self) -> f32 {
        self.unit
    }
}
