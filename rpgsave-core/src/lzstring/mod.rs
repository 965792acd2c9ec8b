//! lz-string compression with base64 packing.
//!
//! This is a bit-exact implementation of lz-string 1.4's `compressToBase64`
//! and `decompressFromBase64`. The algorithm works on UTF-16 code units: the
//! encoder grows an LZW dictionary of phrases and emits dictionary codes whose
//! width increases as the dictionary fills. Three codes are reserved:
//!
//! - `0`: an 8-bit literal follows and becomes a new dictionary entry
//! - `1`: a 16-bit literal follows and becomes a new dictionary entry
//! - `2`: end of stream
//!
//! Containers produced by the game engine and by [`compress_to_base64`] are
//! interchangeable.

mod bits;

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

use bits::{BitReader, BitWriter};

/// Output alphabet of the base64 variant. `=` is only used as padding.
const BASE64_ALPHABET: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// Bits carried by one base64 character.
const BASE64_BITS: u32 = 6;

const CODE_LITERAL_8: u32 = 0;
const CODE_LITERAL_16: u32 = 1;
const CODE_END: u32 = 2;

/// Compresses text into base64-alphabet container text.
///
/// The output is padded with `=` to a multiple of four characters.
pub fn compress_to_base64(input: &str) -> String {
    let units: Vec<u16> = input.encode_utf16().collect();
    let mut output = compress_units(&units, BASE64_BITS, |value| {
        char::from(BASE64_ALPHABET[value as usize])
    });

    while output.len() % 4 != 0 {
        output.push('=');
    }

    log::trace!(
        "compressed {} code units into {} characters",
        units.len(),
        output.len()
    );
    output
}

/// Decompresses base64-alphabet container text.
///
/// Surrounding whitespace is ignored and `=` padding contributes zero bits.
///
/// # Errors
///
/// Returns an error if the container is empty, contains characters outside the
/// base64 alphabet, ends before the end-of-stream marker, references unknown
/// dictionary entries, or decodes to invalid UTF-16.
pub fn decompress_from_base64(input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::Empty);
    }

    let values = input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            base64_value(character).ok_or(Error::InvalidCharacter {
                character,
                position,
            })
        })
        .collect::<Result<Vec<u32>>>()?;

    let units = decompress_units(&values, 1 << (BASE64_BITS - 1))?;
    log::trace!(
        "decompressed {} characters into {} code units",
        values.len(),
        units.len()
    );

    String::from_utf16(&units).map_err(|_| Error::InvalidUtf16)
}

fn base64_value(character: char) -> Option<u32> {
    let byte = u8::try_from(character).ok()?;
    BASE64_ALPHABET
        .iter()
        .position(|&candidate| candidate == byte)
        .and_then(|index| u32::try_from(index).ok())
}

/// Encoder state shared between the main loop and the final flush.
struct Compressor<F> {
    dictionary: HashMap<Vec<u16>, u32>,
    /// Single-unit phrases that still have to be announced as literals.
    pending: HashSet<Vec<u16>>,
    dictionary_size: u32,
    num_bits: u32,
    enlarge_in: u64,
    writer: BitWriter<F>,
}

impl<F> Compressor<F>
where
    F: Fn(u32) -> char,
{
    fn new(bits_per_char: u32, to_char: F) -> Self {
        Self {
            dictionary: HashMap::new(),
            pending: HashSet::new(),
            dictionary_size: 3,
            num_bits: 2,
            // The first literal does not count towards the growth schedule.
            enlarge_in: 2,
            writer: BitWriter::new(bits_per_char, to_char),
        }
    }

    fn add_phrase(&mut self, phrase: Vec<u16>) {
        self.dictionary.insert(phrase, self.dictionary_size);
        self.dictionary_size += 1;
    }

    fn count_down(&mut self) {
        self.enlarge_in -= 1;
        if self.enlarge_in == 0 {
            self.enlarge_in = 1 << self.num_bits;
            self.num_bits += 1;
        }
    }

    fn emit(&mut self, phrase: &[u16]) {
        if self.pending.remove(phrase) {
            let unit = u32::from(phrase[0]);
            if unit < 256 {
                self.writer.write_bits(self.num_bits, CODE_LITERAL_8);
                self.writer.write_bits(8, unit);
            } else {
                self.writer.write_bits(self.num_bits, CODE_LITERAL_16);
                self.writer.write_bits(16, unit);
            }
            self.count_down();
        } else {
            let code = self.dictionary[phrase];
            self.writer.write_bits(self.num_bits, code);
        }
        self.count_down();
    }

    fn finish(mut self) -> String {
        self.writer.write_bits(self.num_bits, CODE_END);
        self.writer.finish()
    }
}

fn compress_units<F>(input: &[u16], bits_per_char: u32, to_char: F) -> String
where
    F: Fn(u32) -> char,
{
    let mut compressor = Compressor::new(bits_per_char, to_char);
    let mut phrase: Vec<u16> = Vec::new();

    for &unit in input {
        let single = [unit];
        if !compressor.dictionary.contains_key(&single[..]) {
            compressor.add_phrase(single.to_vec());
            compressor.pending.insert(single.to_vec());
        }

        let mut extended = Vec::with_capacity(phrase.len() + 1);
        extended.extend_from_slice(&phrase);
        extended.push(unit);

        if compressor.dictionary.contains_key(&extended) {
            phrase = extended;
        } else {
            compressor.emit(&phrase);
            compressor.add_phrase(extended);
            phrase = single.to_vec();
        }
    }

    if !phrase.is_empty() {
        compressor.emit(&phrase);
    }

    compressor.finish()
}

fn decompress_units(values: &[u32], reset_value: u32) -> Result<Vec<u16>> {
    let mut reader = BitReader::new(values, reset_value);
    // Codes 0..=2 are control codes and never looked up.
    let mut dictionary: Vec<Vec<u16>> = vec![Vec::new(); 3];
    let mut enlarge_in: u64 = 4;
    let mut num_bits: u32 = 3;

    let first = match reader.read_bits(2) {
        CODE_LITERAL_8 => reader.read_bits(8),
        CODE_LITERAL_16 => reader.read_bits(16),
        CODE_END => return Ok(Vec::new()),
        code => {
            return Err(Error::InvalidCode {
                code: code as usize,
                dictionary_size: dictionary.len(),
            })
        }
    };
    // Literal widths are at most 16 bits.
    let first = vec![first as u16];
    dictionary.push(first.clone());
    let mut previous = first.clone();
    let mut output = first;

    loop {
        if reader.is_exhausted() {
            return Err(Error::Truncated);
        }

        let code = match reader.read_bits(num_bits) {
            literal @ (CODE_LITERAL_8 | CODE_LITERAL_16) => {
                let width = if literal == CODE_LITERAL_8 { 8 } else { 16 };
                let unit = reader.read_bits(width) as u16;
                dictionary.push(vec![unit]);
                enlarge_in -= 1;
                dictionary.len() - 1
            }
            CODE_END => return Ok(output),
            code => code as usize,
        };

        if enlarge_in == 0 {
            enlarge_in = 1 << num_bits;
            num_bits += 1;
        }

        let entry = if code < dictionary.len() {
            dictionary[code].clone()
        } else if code == dictionary.len() {
            // The phrase being defined by this very code.
            let mut entry = previous.clone();
            entry.push(previous[0]);
            entry
        } else {
            return Err(Error::InvalidCode {
                code,
                dictionary_size: dictionary.len(),
            });
        };
        output.extend_from_slice(&entry);

        let mut phrase = previous;
        phrase.push(entry[0]);
        dictionary.push(phrase);
        enlarge_in -= 1;

        previous = entry;

        if enlarge_in == 0 {
            enlarge_in = 1 << num_bits;
            num_bits += 1;
        }
    }
}
