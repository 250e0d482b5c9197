//! Double-buffered population storage.

use super::chromosome::Chromosome;
use super::genome::GenomeRng;
use crate::schema::Viewport;

/// Which of the two buffers currently holds the live generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    A,
    B,
}

impl Role {
    fn flipped(self) -> Self {
        match self {
            Role::A => Role::B,
            Role::B => Role::A,
        }
    }
}

/// Two fixed-capacity generations with swappable roles.
///
/// Reproduction reads from [`current`](Self::current) while writing into
/// [`next_mut`](Self::next_mut); [`swap`](Self::swap) then exchanges roles
/// without copying any chromosome.
#[derive(Debug, Clone)]
pub struct PopulationStore {
    a: Vec<Chromosome>,
    b: Vec<Chromosome>,
    current: Role,
}

impl PopulationStore {
    /// Allocate both buffers. Capacity never changes afterwards.
    pub fn new(size: usize) -> Self {
        Self {
            a: vec![Chromosome::default(); size],
            b: vec![Chromosome::default(); size],
            current: Role::A,
        }
    }

    /// Number of chromosomes per generation.
    pub fn size(&self) -> usize {
        self.a.len()
    }

    /// Live generation.
    pub fn current(&self) -> &[Chromosome] {
        match self.current {
            Role::A => &self.a,
            Role::B => &self.b,
        }
    }

    /// Write view of the generation being built.
    pub fn next_mut(&mut self) -> &mut [Chromosome] {
        match self.current {
            Role::A => &mut self.b,
            Role::B => &mut self.a,
        }
    }

    /// Read view of the live generation and write view of the next one.
    pub fn split_mut(&mut self) -> (&[Chromosome], &mut [Chromosome]) {
        match self.current {
            Role::A => (&self.a, &mut self.b),
            Role::B => (&self.b, &mut self.a),
        }
    }

    /// Exchange the current and next roles.
    #[inline]
    pub fn swap(&mut self) {
        self.current = self.current.flipped();
    }

    /// Overwrite every chromosome of the current generation with random genes.
    pub fn randomize(&mut self, rng: &mut GenomeRng, viewport: &Viewport) {
        let current = match self.current {
            Role::A => &mut self.a,
            Role::B => &mut self.b,
        };
        for chromosome in current.iter_mut() {
            *chromosome = rng.random_chromosome(viewport);
        }
    }
}
