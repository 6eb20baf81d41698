use bytesize::ByteSize;
use core::fmt;

/// Throughput in bytes per second, displayed with a "/s" suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput(pub ByteSize);

impl Throughput {
    /// Computes throughput from a byte count and the time it took.
    pub fn from_elapsed(bytes: u64, elapsed: core::time::Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        match secs > 0.0 {
            true => Self(ByteSize((bytes as f64 / secs) as u64)),
            false => Self(ByteSize(0)),
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.0)
    }
}
