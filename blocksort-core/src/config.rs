//! Block-size and strategy configuration.

/// Bytes per block-size level.
pub const BLOCK_SIZE_UNIT: usize = 100_000;

/// Maximum block size (900k), the bzip2 ceiling.
pub const MAX_BLOCK_SIZE: usize = 9 * BLOCK_SIZE_UNIT;

/// Block-size level (1-9, where 9 = 900k bytes per block).
///
/// The transform itself accepts blocks of any length; the level only
/// decides where multi-block drivers cut their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockSize(u8);

impl BlockSize {
    /// Smallest blocks (100k).
    pub const MIN: Self = Self(1);
    /// Largest blocks (900k).
    pub const MAX: Self = Self(9);

    /// Create a new block-size level (clamped to 1-9).
    pub fn new(level: u8) -> Self {
        Self(level.clamp(1, 9))
    }

    /// Get the block size in bytes for this level.
    pub fn bytes(&self) -> usize {
        self.0 as usize * BLOCK_SIZE_UNIT
    }

    /// Get the level value.
    pub fn level(&self) -> u8 {
        self.0
    }
}

impl Default for BlockSize {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<u8> for BlockSize {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

/// Forward construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Sort every cyclic rotation by direct comparison. O(n² log n) worst
    /// case; only meant for validation and tiny blocks.
    Reference,
    /// Derive the output from a linear-time suffix array.
    #[default]
    SuffixArray,
}

impl Strategy {
    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reference => "rotation-sort",
            Self::SuffixArray => "suffix-array",
        }
    }
}

/// Options for multi-block transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformConfig {
    /// Where input is cut into independent blocks.
    pub block_size: BlockSize,
    /// Which forward construction to use.
    pub strategy: Strategy,
}

impl TransformConfig {
    /// Create a config with default settings (900k blocks, suffix array).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block-size level.
    pub fn with_block_size(mut self, block_size: impl Into<BlockSize>) -> Self {
        self.block_size = block_size.into();
        self
    }

    /// Set the forward strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size() {
        let size = BlockSize::new(5);
        assert_eq!(size.level(), 5);
        assert_eq!(size.bytes(), 500_000);
    }

    #[test]
    fn test_block_size_clamp() {
        assert_eq!(BlockSize::new(0).level(), 1);
        assert_eq!(BlockSize::new(10).level(), 9);
        assert_eq!(BlockSize::from(3).bytes(), 300_000);
    }

    #[test]
    fn test_defaults() {
        let config = TransformConfig::default();
        assert_eq!(config.block_size.bytes(), MAX_BLOCK_SIZE);
        assert_eq!(config.strategy, Strategy::SuffixArray);
    }

    #[test]
    fn test_builder() {
        let config = TransformConfig::new()
            .with_block_size(2)
            .with_strategy(Strategy::Reference);
        assert_eq!(config.block_size, BlockSize::new(2));
        assert_eq!(config.strategy.name(), "rotation-sort");
    }
}
