//! # ringzip
//!
//! Toy byte compressor built on an adaptive circular partition tree.
//!
//! Every byte becomes one hit/miss flag. A hit means the tree, fed with all
//! earlier bytes, predicted it from its predecessor; a miss ships the byte as
//! a literal. Compressor and decompressor rebuild the same tree in lockstep,
//! so nothing but the two streams is stored.
//!
//! ```
//! use ringzip::{compress, decompress, CodecConfig};
//!
//! let data = [0u8; 8];
//! let packed = compress(&data, &CodecConfig::default());
//! assert_eq!(packed, vec![0b0111_1111, 0x00]);
//! assert_eq!(decompress(&packed).unwrap(), data.to_vec());
//! ```
//!
//! Layers:
//! - [`ringzip_math`]: byte <-> angle mapping and constants
//! - [`ringzip_core`]: [`PartitionTree`] and the [`Predictor`] trait
//! - [`ringzip_codec`]: bit packing, [`Encoder`] / [`Decoder`], config and errors

pub use ringzip_codec::{
    compress, compress_with_stats, decompress, packed_len, CodecConfig, CodecError,
    CompressionStats, Decoder, Encoder, MatchRule,
};
pub use ringzip_core::{NodeId, PartitionNode, PartitionTree, Predictor};
pub use ringzip_math::{from_angle, to_angle};
