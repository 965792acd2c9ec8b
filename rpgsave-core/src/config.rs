//! Shared types describing a finished conversion.

/// Statistical summary of a completed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Total number of bytes read from the input file.
    pub bytes_read: u64,

    /// Total number of bytes written to the output file.
    pub bytes_written: u64,
}

impl ConversionSummary {
    /// Creates a new summary with the specified byte counts.
    ///
    /// # Parameters
    ///
    /// * `bytes_read` - Total bytes consumed from the input
    /// * `bytes_written` - Total bytes produced for the output
    pub const fn new(bytes_read: u64, bytes_written: u64) -> Self {
        Self {
            bytes_read,
            bytes_written,
        }
    }

    /// Calculates the size ratio of output to input.
    ///
    /// # Returns
    ///
    /// The ratio as an `f64`. A value less than 1.0 indicates the output is
    /// smaller than the input, while a value greater than 1.0 indicates expansion.
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.bytes_read == 0 {
            if self.bytes_written == 0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            self.bytes_written as f64 / self.bytes_read as f64
        }
    }
}
