//! Pluggable random sources.

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Deterministic 64-bit LCG (Knuth MMIX constants).
pub struct LcgRng {
    seed: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RandomSource for LcgRng {
    fn next_f64(&mut self) -> f64 {
        self.seed = self
            .seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Top 53 bits → exactly representable mantissa.
        (self.seed >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// `Math.random()`.
#[cfg(target_arch = "wasm32")]
pub struct MathRandom;

#[cfg(target_arch = "wasm32")]
impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[cfg(target_arch = "wasm32")]
pub fn browser_rng() -> Box<dyn RandomSource> {
    Box::new(MathRandom)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn browser_rng() -> Box<dyn RandomSource> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed);
    Box::new(LcgRng::new(seed))
}

/// Replays a fixed script of draws, then repeats the last one.
#[cfg(test)]
pub struct SequenceRng {
    values: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl SequenceRng {
    pub fn new(values: &[f64]) -> Self {
        assert!(!values.is_empty());
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
impl RandomSource for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.pos.min(self.values.len() - 1)];
        self.pos += 1;
        v
    }
}
