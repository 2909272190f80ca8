//! RNG module - injectable randomness for obstacle spawning
//!
//! Every random decision the game makes goes through [`RandomSource`], so a
//! session can be driven by a seeded LCG during play and by a fixed script in
//! tests.

use std::collections::VecDeque;

/// Uniform integer draws.
pub trait RandomSource {
    /// Draw a value in `[lo, hi]` (inclusive). Callers guarantee `lo <= hi`.
    fn next_in(&mut self, lo: u32, hi: u32) -> u32;

    /// Pick a uniformly random element of a non-empty slice.
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let i = self.next_in(0, (items.len() - 1) as u32) as usize;
        items.get(i).copied()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in(&mut self, lo: u32, hi: u32) -> u32 {
        (**self).next_in(lo, hi)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_in(&mut self, lo: u32, hi: u32) -> u32 {
        let span = hi.wrapping_sub(lo).wrapping_add(1);
        if span == 0 {
            // Full u32 range.
            return self.next_u32();
        }
        // The low bits of an LCG are weak; use the high half.
        let v = self.next_u32() >> 16;
        lo + v % span
    }
}

/// Replays a fixed list of draws, then keeps answering the top of each range.
///
/// Scripted values are clamped into the requested range so a script can never
/// produce an out-of-range lane index. Once the script runs out, spawn draws
/// land on 99 and never spawn.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    queue: VecDeque<u32>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queue: values.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in(&mut self, lo: u32, hi: u32) -> u32 {
        let v = self.queue.pop_front().unwrap_or(u32::MAX);
        v.clamp(lo, hi)
    }
}
