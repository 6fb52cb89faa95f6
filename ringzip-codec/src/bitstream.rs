/// Bytes needed to hold `bits` flags.
#[inline]
pub fn packed_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Bit writer: MSB-first, accumulates into a byte buffer, zero pads the tail.
#[derive(Debug, Default)]
pub struct BitWriter {
    buf: Vec<u8>,
    cur: u8,
    pos: u8,
    bits: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.cur |= 0x80 >> self.pos;
        }
        self.pos += 1;
        self.bits += 1;
        if self.pos == 8 {
            self.buf.push(self.cur);
            self.cur = 0;
            self.pos = 0;
        }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.bits
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Flush the partial byte (if any) and hand back the packed bits.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.pos > 0 {
            self.buf.push(self.cur);
        }
        self.buf
    }
}

/// Bit reader: MSB-first over a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    byte: usize,
    pos: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte: 0,
            pos: 0,
        }
    }

    /// Next bit, or `None` past the end of the slice.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.byte)?;
        let bit = byte & (0x80 >> self.pos) != 0;
        self.pos += 1;
        if self.pos == 8 {
            self.pos = 0;
            self.byte += 1;
        }
        Some(bit)
    }
}
