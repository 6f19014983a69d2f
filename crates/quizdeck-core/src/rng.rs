// Copyright 2026 the quizdeck authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Source of random indices for shuffling terms and options.
///
/// Quiz generation takes this as a parameter so that production code can
/// seed it from the clock while tests use fixed seeds or scripted values.
pub trait RandomSource {
    /// Generate a random index in the range `[0, bound)`. `bound` must be
    /// greater than zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// A minimal, zero-dependency, completely insecure PRNG to shuffle the terms.
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }
}

impl RandomSource for TinyRng {
    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_u32() as usize) % bound
    }
}

/// Fisher-Yates shuffle over a copy of the input.
pub fn shuffle<T>(v: Vec<T>, rng: &mut dyn RandomSource) -> Vec<T> {
    let mut v = v;
    for i in (1..v.len()).rev() {
        let j = rng.next_index(i + 1);
        v.swap(i, j);
    }
    v
}
