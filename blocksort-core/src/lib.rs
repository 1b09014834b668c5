//! # blocksort core
//!
//! Shared building blocks for the blocksort transform crates:
//!
//! - [`error`]: Error types and the crate-wide `Result`
//! - [`config`]: Block-size levels and forward strategy selection
//! - [`traits`]: The suffix array construction contract
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Downstream (not part of this workspace)                 │
//! │     MTF, RLE, entropy coding, block framing, CRC        │
//! ├─────────────────────────────────────────────────────────┤
//! │ blocksort-bwt                                           │
//! │     Forward/inverse BWT, SA-IS, scratch arenas          │
//! ├─────────────────────────────────────────────────────────┤
//! │ blocksort-core (this crate)                             │
//! │     Errors, configuration, SuffixArrayProvider          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use blocksort_core::{BlockSize, Strategy, TransformConfig};
//!
//! let config = TransformConfig::new()
//!     .with_block_size(BlockSize::new(1))
//!     .with_strategy(Strategy::SuffixArray);
//! assert_eq!(config.block_size.bytes(), 100_000);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use config::{BlockSize, MAX_BLOCK_SIZE, Strategy, TransformConfig};
pub use error::{BlockSortError, Result, try_resize};
pub use traits::SuffixArrayProvider;
