//! Operating system CSPRNG.

use rand::RngCore;
use rand::rngs::OsRng;

use super::SecureRandom;

/// Draws from the kernel entropy source (`getrandom(2)` on Linux).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl OsRandom {
    pub fn source_name() -> &'static str {
        "OS CSPRNG"
    }
}

impl SecureRandom for OsRandom {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        OsRng.next_u32()
    }
}
