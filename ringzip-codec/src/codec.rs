use crate::bitstream::{packed_len, BitReader, BitWriter};
use crate::{CodecConfig, CodecError, MatchRule};
use ringzip_core::{PartitionTree, Predictor};
use ringzip_math::{to_angle, BYTE_LEVELS};
use tracing::{debug, trace};

/// Counters for one compression run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressionStats {
    pub input_len: usize,
    pub hits: usize,
    pub misses: usize,
}

impl CompressionStats {
    /// Flag bytes plus one literal per miss.
    pub fn output_len(&self) -> usize {
        packed_len(self.input_len) + self.misses
    }

    /// `input / output`; 0 for empty input.
    pub fn ratio(&self) -> f64 {
        match self.output_len() {
            0 => 0.0,
            out => self.input_len as f64 / out as f64,
        }
    }
}

/// Sender half: one flag per byte, literals for misses.
///
/// The tree is updated with every byte *after* it has been judged, so the
/// prediction for a byte never sees the byte itself.
#[derive(Debug)]
pub struct Encoder {
    match_rule: MatchRule,
    predictor: PartitionTree,
    previous: Option<u8>,
    flags: BitWriter,
    literals: Vec<u8>,
    stats: CompressionStats,
}

impl Encoder {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            match_rule: config.match_rule,
            predictor: PartitionTree::with_error_threshold(config.error_threshold),
            previous: None,
            flags: BitWriter::new(),
            literals: Vec::new(),
            stats: CompressionStats::default(),
        }
    }

    /// Encode one byte. Returns the flag written (`true` = hit).
    pub fn push(&mut self, byte: u8) -> bool {
        let hit = match self.match_rule {
            MatchRule::Exact => self.predictor.predict(self.previous) == Some(byte),
            MatchRule::Tolerant => self
                .predictor
                .find_closest(to_angle(byte))
                .is_some_and(|node| {
                    (f64::from(node.value) - f64::from(byte)).abs()
                        <= node.error_threshold * BYTE_LEVELS
                }),
        };

        self.flags.write_bit(hit);
        self.stats.input_len += 1;
        if hit {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            self.literals.push(byte);
        }

        self.predictor.update(byte);
        self.previous = Some(byte);
        hit
    }

    pub fn stats(&self) -> CompressionStats {
        self.stats
    }

    /// Flag bytes followed directly by the literal bytes.
    pub fn finish(self) -> Vec<u8> {
        let mut out = self.flags.into_bytes();
        out.extend_from_slice(&self.literals);
        out
    }
}

/// Receiver half. Yields reconstructed bytes one at a time.
///
/// A hit byte is the tree's closest stored value to the previous output byte
/// (angle 0 at the start, `0` if the tree is still empty); a miss byte is the
/// next literal. Either way the byte is fed back into the tree.
#[derive(Debug)]
pub struct Decoder<'a> {
    flags: BitReader<'a>,
    literals: &'a [u8],
    remaining: usize,
    cursor: usize,
    predictor: PartitionTree,
    previous: Option<u8>,
}

impl<'a> Decoder<'a> {
    /// Split `buffer` into its flag and literal streams.
    ///
    /// With `b` flag bytes carrying `zeros(b)` miss/pad bits, a valid buffer
    /// satisfies `zeros(b) + b >= len` for the first time at the true
    /// boundary, since each flag byte adds at least one to the left side.
    /// The surplus zeros over the literal count are the pad bits.
    pub fn new(buffer: &'a [u8]) -> Result<Self, CodecError> {
        let total = buffer.len();
        let mut zeros = 0usize;
        let mut flag_bytes = 0usize;
        let mut pad_bits = 0usize;

        for (i, byte) in buffer.iter().enumerate() {
            zeros += byte.count_zeros() as usize;
            if zeros + i + 1 >= total {
                flag_bytes = i + 1;
                pad_bits = zeros - (total - flag_bytes);
                break;
            }
        }

        if pad_bits > 7 {
            return Err(CodecError::InvalidPadding { pad_bits });
        }

        let (flags, literals) = buffer.split_at(flag_bytes);
        let remaining = flag_bytes * 8 - pad_bits;
        trace!(flag_bytes, literals = literals.len(), pad_bits, "split stream");

        Ok(Self {
            flags: BitReader::new(flags),
            literals,
            remaining,
            cursor: 0,
            predictor: PartitionTree::new(),
            previous: None,
        })
    }

    /// Bytes still to be produced.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn next_byte(&mut self, hit: bool) -> Result<u8, CodecError> {
        if hit {
            return Ok(self.predictor.predict(self.previous).unwrap_or(0));
        }
        let byte = self
            .literals
            .get(self.cursor)
            .copied()
            .ok_or(CodecError::LiteralUnderrun {
                index: self.cursor,
                available: self.literals.len(),
            })?;
        self.cursor += 1;
        Ok(byte)
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<u8, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let hit = self.flags.read_bit()?;
        self.remaining -= 1;

        match self.next_byte(hit) {
            Ok(byte) => {
                self.predictor.update(byte);
                self.previous = Some(byte);
                Some(Ok(byte))
            }
            Err(e) => {
                self.remaining = 0;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Compress `data` in one call.
pub fn compress(data: &[u8], config: &CodecConfig) -> Vec<u8> {
    compress_with_stats(data, config).0
}

/// Compress `data` and report hit/miss counters.
pub fn compress_with_stats(data: &[u8], config: &CodecConfig) -> (Vec<u8>, CompressionStats) {
    let mut encoder = Encoder::new(config);
    for &byte in data {
        encoder.push(byte);
    }
    let stats = encoder.stats();
    debug!(
        input = stats.input_len,
        hits = stats.hits,
        misses = stats.misses,
        output = stats.output_len(),
        rule = ?config.match_rule,
        "compressed"
    );
    (encoder.finish(), stats)
}

/// Reconstruct the original bytes from a compressed buffer.
pub fn decompress(buffer: &[u8]) -> Result<Vec<u8>, CodecError> {
    let decoder = Decoder::new(buffer)?;
    let output = decoder.collect::<Result<Vec<u8>, _>>()?;
    debug!(input = buffer.len(), output = output.len(), "decompressed");
    Ok(output)
}
