//! Random password suggestions for the create-user form.

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;

/// Alphabet candidate passwords are drawn from.
#[cfg(any(test, feature = "csr"))]
const PASSWORD_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Length of generated passwords; comfortably above the minimum the
/// create-user form accepts.
pub const GENERATED_LENGTH: usize = 12;

/// Map uniform samples in `[0, 1)` onto the password alphabet.
#[cfg(any(test, feature = "csr"))]
fn from_samples(samples: &[f64]) -> String {
    samples
        .iter()
        .map(|sample| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let index = ((sample * PASSWORD_CHARS.len() as f64) as usize).min(PASSWORD_CHARS.len() - 1);
            PASSWORD_CHARS[index] as char
        })
        .collect()
}

/// Generate a password candidate from browser randomness.
#[cfg(feature = "csr")]
#[must_use]
pub fn generate() -> String {
    let samples: Vec<f64> = (0..GENERATED_LENGTH).map(|_| js_sys::Math::random()).collect();
    from_samples(&samples)
}
