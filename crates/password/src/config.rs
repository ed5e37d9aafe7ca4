use crate::{Error, Result, DEFAULT_LENGTH, MAX_LENGTH};

/// Options for memorable password generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    length: usize,
    digit: bool,
    upper: bool,
    punctuation: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

impl PasswordConfig {
    /// Create options for passwords of at least `length` characters
    /// without any extra character classes.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            digit: false,
            upper: false,
            punctuation: false,
        }
    }

    /// Requested minimum length.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if the requested length is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Put a digit in each password.
    pub fn with_digit(mut self, digit: bool) -> Self {
        self.digit = digit;
        self
    }

    /// Put an uppercase letter in each password.
    pub fn with_upper(mut self, upper: bool) -> Self {
        self.upper = upper;
        self
    }

    /// Put a punctuation character in each password.
    pub fn with_punctuation(mut self, punctuation: bool) -> Self {
        self.punctuation = punctuation;
        self
    }

    /// Whether a digit is injected.
    pub fn digit(&self) -> bool {
        self.digit
    }

    /// Whether an uppercase letter is injected.
    pub fn upper(&self) -> bool {
        self.upper
    }

    /// Whether a punctuation character is injected.
    pub fn punctuation(&self) -> bool {
        self.punctuation
    }

    /// Number of positions claimed by injected characters.
    pub fn claims(&self) -> usize {
        [self.digit, self.upper, self.punctuation]
            .into_iter()
            .filter(|enabled| *enabled)
            .count()
    }

    /// Smallest requested length for this configuration.
    ///
    /// Injection positions are chosen from every index except the
    /// last one so each claim needs one extra character.
    pub fn minimum_length(&self) -> usize {
        match self.claims() {
            0 => 1,
            claims => claims + 1,
        }
    }

    /// Ensure the requested length is usable.
    ///
    /// Lengths above [`MAX_LENGTH`] are rejected so the password buffer
    /// stays bounded.
    pub fn validate(&self) -> Result<()> {
        let minimum = self.minimum_length();
        if self.length < minimum || self.length > MAX_LENGTH {
            return Err(Error::InvalidLength {
                length: self.length,
                minimum,
                maximum: MAX_LENGTH,
            });
        }
        Ok(())
    }
}
