//! Bit packing for the lz-string output alphabet.
//!
//! lz-string emits values least-significant bit first, but fills each output
//! character from its most-significant bit down. Both halves of that layout
//! live here so the dictionary logic only deals with whole values.

/// Packs values into characters of `bits_per_char` bits each.
pub(crate) struct BitWriter<F> {
    bits_per_char: u32,
    value: u32,
    position: u32,
    output: String,
    to_char: F,
}

impl<F> BitWriter<F>
where
    F: Fn(u32) -> char,
{
    pub(crate) fn new(bits_per_char: u32, to_char: F) -> Self {
        Self {
            bits_per_char,
            value: 0,
            position: 0,
            output: String::new(),
            to_char,
        }
    }

    /// Writes the lowest `count` bits of `value`, least-significant first.
    pub(crate) fn write_bits(&mut self, count: u32, mut value: u32) {
        for _ in 0..count {
            self.push_bit(value & 1);
            value >>= 1;
        }
    }

    fn push_bit(&mut self, bit: u32) {
        self.value = (self.value << 1) | bit;
        if self.position == self.bits_per_char - 1 {
            self.position = 0;
            self.output.push((self.to_char)(self.value));
            self.value = 0;
        } else {
            self.position += 1;
        }
    }

    /// Pads the pending character with zero bits and returns the output.
    ///
    /// A trailing character is always emitted, even when the stream ended on a
    /// character boundary.
    pub(crate) fn finish(mut self) -> String {
        loop {
            self.value <<= 1;
            if self.position == self.bits_per_char - 1 {
                self.output.push((self.to_char)(self.value));
                return self.output;
            }
            self.position += 1;
        }
    }
}

/// Reads values back out of a sequence of `reset_value`-wide characters.
pub(crate) struct BitReader<'a> {
    values: &'a [u32],
    reset_value: u32,
    value: u32,
    position: u32,
    index: usize,
}

impl<'a> BitReader<'a> {
    /// `reset_value` is the weight of the highest data bit of a character,
    /// e.g. 32 for 6-bit characters.
    pub(crate) fn new(values: &'a [u32], reset_value: u32) -> Self {
        Self {
            values,
            reset_value,
            value: Self::value_at(values, 0),
            position: reset_value,
            index: 1,
        }
    }

    // Reads past the end yield zero bits.
    fn value_at(values: &[u32], index: usize) -> u32 {
        values.get(index).copied().unwrap_or(0)
    }

    /// Whether the reader has advanced beyond the last character.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.index > self.values.len()
    }

    /// Reads `count` bits, least-significant first.
    pub(crate) fn read_bits(&mut self, count: u32) -> u32 {
        let mut bits = 0u32;
        for shift in 0..count {
            let bit = self.value & self.position;
            self.position >>= 1;
            if self.position == 0 {
                self.position = self.reset_value;
                self.value = Self::value_at(self.values, self.index);
                self.index += 1;
            }
            if bit != 0 {
                bits |= 1 << shift;
            }
        }
        bits
    }
}
