//! Core genome traits
//!
//! This module defines the `EvolutionaryGenome` trait that operators and
//! populations are written against.

use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::GenomeError;
use crate::genome::space::SearchSpace;

/// Core genome abstraction for evolutionary algorithms.
///
/// A genome is a fixed-length sequence of alleles. Genomes are values:
/// operators build new genomes instead of editing shared ones, and the only
/// identity a genome has is its content.
pub trait EvolutionaryGenome:
    Clone + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The allele type for individual genes
    type Allele: Clone + PartialEq + Send;

    /// Generate a random genome within the given search space
    fn generate<R: Rng>(rng: &mut R, space: &SearchSpace) -> Self;

    /// The genes of this genome
    fn genes(&self) -> &[Self::Allele];

    /// Mutable access to the genes, for operators editing a fresh offspring
    fn genes_mut(&mut self) -> &mut [Self::Allele];

    /// Create from a vector of genes
    fn from_genes(genes: Vec<Self::Allele>) -> Result<Self, GenomeError>;

    /// Number of genes
    fn dimension(&self) -> usize {
        self.genes().len()
    }
}
