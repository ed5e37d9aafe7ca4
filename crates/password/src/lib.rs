//! Memorable password generation.
//!
//! Passwords are assembled from pronounceable syllables drawn with bytes
//! from a buffered cryptographically secure [`RandomPool`], then optionally
//! receive a digit, an uppercase letter and a punctuation character at
//! distinct positions.
//!
//! ```no_run
//! use kpwgen_password::{PasswordBuilder, PasswordConfig};
//! use kpwgen_password::secrecy::ExposeSecret;
//!
//! let config = PasswordConfig::new(15).with_digit(true).with_upper(true);
//! let mut builder = PasswordBuilder::new(config);
//! for password in builder.many(3)? {
//!     println!("{}", password.expose_secret());
//! }
//! # Ok::<(), kpwgen_password::Error>(())
//! ```
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

mod config;
mod error;
mod memorable;
mod pool;

pub use config::PasswordConfig;
pub use error::Error;
pub use memorable::{build_password, PasswordBuilder, MAX_ATTEMPTS};
pub use pool::{ByteSource, RandomPool, POOL_SIZE};

pub use secrecy;

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> rand::rngs::OsRng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Default requested password length.
pub const DEFAULT_LENGTH: usize = 15;

/// Longest password length accepted by [`PasswordConfig::validate`].
pub const MAX_LENGTH: usize = 4096;

/// Default number of passwords generated per run.
pub const DEFAULT_COUNT: usize = 7;

/// Filtered koremutake syllables.
///
/// Empty entries are skip outcomes: drawing one appends nothing.
#[doc(hidden)]
#[rustfmt::skip]
pub const SYLLABLES: &[&str] = &[
    "ba", "be", "bi", "bo", "bu", "by", "da", "de", "di",
    "do", "du", "dy", "fe", "fi", "fo", "fu", "fy", "ga", "ge", "gi", "go", "gu",
    "gy", "ha", "he", "hi", "ho", "hu", "hy", "ja", "je", "ji", "jo", "ju", "jy",
    "ka", "ke", "ko", "ku", "ky", "la", "le", "li", "lo", "", "lu", "ly", "ma",
    "me", "mi", "mo", "mu", "my", "na", "ne", "ni", "no", "nu", "ny", "pa", "pe",
    "pi", "po", "pu", "py", "ra", "re", "ri", "ro", "", "ru", "ry", "sa", "se",
    "si", "so", "su", "sy", "ta", "te", "ti", "to", "tu", "ty", "va", "ve", "vi",
    "vo", "vu", "vy", "bra", "bre", "bri", "", "bro", "bru", "bry", "dra", "dre",
    "dri", "dro", "dru", "dry", "fra", "fre", "fri", "fro", "fru", "fry", "gra",
    "gre", "gri", "", "gro", "gru", "gry", "pra", "pre", "pri", "pro", "pru",
    "pry", "sta", "ste", "sti", "sto", "stu", "sty", "tra", "tre", "er", "", "ed",
    "in", "ex", "al", "en", "an", "ad", "or", "at", "ca", "ap", "el", "ci", "an",
    "et", "it", "ob", "of", "af", "au", "cy", "im", "op", "co", "", "up", "ing",
    "con", "ter", "com", "per", "ble", "der", "cal", "man", "est", "for", "mer",
    "col", "ful", "get", "low", "son", "", "tle", "day", "pen", "pre", "ten",
    "tor", "ver", "ber", "can", "ple", "fer", "gen", "den", "mag", "sub", "sur",
    "men", "min", "", "out", "tal", "but", "cit", "cle", "cov", "dif", "ern",
    "eve", "hap", "ket", "nal", "sup", "ted", "tem", "tin", "tro", "tro",
];

/// Punctuation characters injected into passwords.
///
/// Excludes `'` which is often rejected by naive SQL injection filters
/// and `\` which breaks shell quoting.
#[doc(hidden)]
pub const PUNCTUATION: &[u8] = b"!\"#$%&()*+,-./:;<=>?@[]^_`{|}~";
