//! Memorable password assembly.
use crate::{
    ByteSource, Error, PasswordConfig, RandomPool, Result, PUNCTUATION,
    SYLLABLES,
};
use secrecy::SecretString;

/// Upper bound on consecutive draws when searching for a free
/// injection position or a non-empty syllable.
pub const MAX_ATTEMPTS: usize = 256;

/// Build a memorable password using bytes from `source`.
///
/// Syllables are appended until the password is at least
/// `config.len()` characters long, so the result may be up to two
/// characters longer than requested. A digit, an uppercase letter and a
/// punctuation character are then injected, in that order, each at a
/// position not claimed by an earlier injection.
///
/// Injection positions never include the final character because the
/// position is taken modulo `len - 1`. This may be an off-by-one but
/// changing it would alter the character class distribution of existing
/// passwords.
pub fn build_password<S: ByteSource + ?Sized>(
    source: &mut S,
    config: &PasswordConfig,
) -> Result<SecretString> {
    config.validate()?;

    tracing::debug!(
        length = config.len(),
        digit = config.digit(),
        upper = config.upper(),
        punctuation = config.punctuation(),
        "memorable::build_password"
    );

    let mut password = syllables(source, config.len())?;

    if password.len() - 1 < config.claims() {
        return Err(Error::GenerationFailure(format!(
            "{} characters cannot hold {} injected characters",
            password.len(),
            config.claims(),
        )));
    }

    let mut claimed = Vec::with_capacity(config.claims());

    if config.digit() {
        let index = free_position(source, password.len(), &claimed)?;
        let digit = source.next_byte()? % 10;
        password[index] = b'0' + digit;
        claimed.push(index);
    }

    if config.upper() {
        let index = free_position(source, password.len(), &claimed)?;
        // Syllables are lowercase ASCII
        password[index] = password[index].to_ascii_uppercase();
        claimed.push(index);
    }

    if config.punctuation() {
        let index = free_position(source, password.len(), &claimed)?;
        let byte = source.next_byte()? as usize;
        password[index] = PUNCTUATION[byte % PUNCTUATION.len()];
        claimed.push(index);
    }

    let password = String::from_utf8(password)
        .map_err(|e| Error::GenerationFailure(e.to_string()))?;
    Ok(SecretString::from(password))
}

/// Append syllables until the buffer holds at least `length` bytes.
fn syllables<S: ByteSource + ?Sized>(
    source: &mut S,
    length: usize,
) -> Result<Vec<u8>> {
    let mut password = Vec::with_capacity(length.saturating_add(2));
    let mut skipped = 0;
    while password.len() < length {
        let byte = source.next_byte()? as usize;
        let syllable = SYLLABLES[byte % SYLLABLES.len()];
        if syllable.is_empty() {
            skipped += 1;
            if skipped >= MAX_ATTEMPTS {
                return Err(Error::GenerationFailure(format!(
                    "drew {} empty syllables in a row",
                    skipped,
                )));
            }
            continue;
        }
        skipped = 0;
        password.extend_from_slice(syllable.as_bytes());
    }
    Ok(password)
}

/// Pick an index in `0..len - 1` that is not already claimed.
fn free_position<S: ByteSource + ?Sized>(
    source: &mut S,
    len: usize,
    claimed: &[usize],
) -> Result<usize> {
    let modulus = len - 1;
    for _ in 0..MAX_ATTEMPTS {
        let index = source.next_byte()? as usize % modulus;
        if !claimed.contains(&index) {
            return Ok(index);
        }
    }
    Err(Error::GenerationFailure(format!(
        "no free position found after {} attempts",
        MAX_ATTEMPTS,
    )))
}

/// Generates memorable passwords from a shared byte source.
#[derive(Debug)]
pub struct PasswordBuilder<S = RandomPool> {
    source: S,
    config: PasswordConfig,
}

impl PasswordBuilder {
    /// Create a builder drawing from the operating system random source.
    pub fn new(config: PasswordConfig) -> Self {
        Self::with_source(RandomPool::new(), config)
    }
}

impl<S: ByteSource> PasswordBuilder<S> {
    /// Create a builder drawing from the given source.
    pub fn with_source(source: S, config: PasswordConfig) -> Self {
        Self { source, config }
    }

    /// Password options.
    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    /// Generate a password.
    pub fn one(&mut self) -> Result<SecretString> {
        build_password(&mut self.source, &self.config)
    }

    /// Generate multiple passwords.
    pub fn many(&mut self, count: usize) -> Result<Vec<SecretString>> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.one()?);
        }
        Ok(results)
    }

    /// Consume the builder and return the byte source.
    pub fn into_source(self) -> S {
        self.source
    }
}
