//! Password generation.

use zeroize::Zeroize;

use super::{GeneratedPassword, GenerationRequest, MAX_LENGTH, charset};
use crate::error::{Error, Result};
use crate::rand::SecureRandom;

/// Generate a single password.
///
/// Required characters come first (one per enabled class, truncated to the
/// target length), the rest is filled from the combined pool, then the whole
/// sequence is shuffled. Lengths above [`MAX_LENGTH`] are rejected; shorter
/// ones, down to zero, are accepted.
pub fn generate<R: SecureRandom>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GeneratedPassword> {
    if request.length > MAX_LENGTH {
        return Err(Error::LengthTooLong {
            length: request.length,
            max: MAX_LENGTH,
        });
    }

    let pool = charset::build(request, rng)?;

    let mut chars: Vec<char> = Vec::with_capacity(request.length);
    chars.extend(pool.required.iter().take(request.length));

    while chars.len() < request.length {
        chars.push(pool.chars[rng.index(pool.chars.len())]);
    }

    shuffle(&mut chars, rng);

    let password: String = chars.iter().collect();
    chars.zeroize();

    log::debug!(
        "generated password: length={} pool={} classes={}",
        request.length,
        pool.chars.len(),
        request.classes.len()
    );

    Ok(GeneratedPassword::new(password))
}

/// Generate `count` passwords from the same request.
pub fn generate_batch<R: SecureRandom>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GeneratedPassword>> {
    (0..count).map(|_| generate(request, rng)).collect()
}

/// Fisher-Yates, right to left.
#[inline]
fn shuffle<T, R: SecureRandom>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}
