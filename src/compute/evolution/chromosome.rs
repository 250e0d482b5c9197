//! Line encoding: a candidate line as four real-valued genes.

use serde::{Deserialize, Serialize};

use crate::schema::Viewport;

/// Number of genes in a chromosome.
pub const GENE_COUNT: usize = 4;

/// Named gene positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Gene {
    Dx = 0,
    Dy = 1,
    X0 = 2,
    Y0 = 3,
}

impl Gene {
    pub const ALL: [Gene; GENE_COUNT] = [Gene::Dx, Gene::Dy, Gene::X0, Gene::Y0];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A line through `(x0, y0)` with direction `(dx, dy)`.
///
/// Genes are stored positionally so crossover and mutation can treat all four
/// the same way. `dy` is never clamped: a zero `dy` gives a non-finite slope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    genes: [f64; GENE_COUNT],
}

impl Chromosome {
    pub const fn new(dx: f64, dy: f64, x0: f64, y0: f64) -> Self {
        Self {
            genes: [dx, dy, x0, y0],
        }
    }

    pub const fn from_genes(genes: [f64; GENE_COUNT]) -> Self {
        Self { genes }
    }

    #[inline]
    pub fn genes(&self) -> &[f64; GENE_COUNT] {
        &self.genes
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.genes[Gene::Dx.index()]
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.genes[Gene::Dy.index()]
    }

    #[inline]
    pub fn x0(&self) -> f64 {
        self.genes[Gene::X0.index()]
    }

    #[inline]
    pub fn y0(&self) -> f64 {
        self.genes[Gene::Y0.index()]
    }

    /// Slope `dx / dy`.
    #[inline]
    pub fn slope(&self) -> f64 {
        self.dx() / self.dy()
    }

    /// Evaluate the line at `x`: `(dx / dy) * (x - x0) + y0`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.dx() / self.dy()) * (x - self.x0()) + self.y0()
    }

    /// Logical endpoints of the line at the left and right viewport edges.
    pub fn span(&self, viewport: &Viewport) -> ((f64, f64), (f64, f64)) {
        let (left, right) = viewport.x_extent();
        let (left, right) = (left as f64, right as f64);
        ((left, self.evaluate(left)), (right, self.evaluate(right)))
    }
}

impl std::ops::Index<usize> for Chromosome {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.genes[index]
    }
}

impl std::ops::Index<Gene> for Chromosome {
    type Output = f64;

    fn index(&self, gene: Gene) -> &f64 {
        &self.genes[gene.index()]
    }
}
