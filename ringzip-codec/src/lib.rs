//! # ringzip-codec
//!
//! Two-stream byte codec driven by [`ringzip_core::PartitionTree`] prediction.
//!
//! Output layout, with no header and no counts:
//!
//! ```text
//! [ceil(N/8) bytes: one flag per input byte, MSB first, 1 = hit, zero padded]
//! [one literal byte per miss flag, in order]
//! ```
//!
//! Key types:
//! - [`Encoder`] / [`Decoder`]: closed-loop stream halves sharing the same tree replay
//! - [`CodecConfig`] / [`MatchRule`]: exact (lossless) or tolerant (reference, lossy) hits
//! - [`BitWriter`] / [`BitReader`]: MSB-first flag packing

pub mod bitstream;
pub mod codec;
pub mod config;
pub mod error;

pub use bitstream::{packed_len, BitReader, BitWriter};
pub use codec::{compress, compress_with_stats, decompress, CompressionStats, Decoder, Encoder};
pub use config::{CodecConfig, MatchRule};
pub use error::CodecError;
