use clap::Parser;
use kpwgen_password::{
    secrecy::ExposeSecret, ByteSource, PasswordBuilder, PasswordConfig,
    RandomPool, DEFAULT_COUNT, DEFAULT_LENGTH,
};
use std::io::Write;

use crate::{Error, Result, TARGET};

/// Generate memorable, pronounceable passwords.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Kpwgen {
    /// Minimum number of characters in each password.
    #[clap(allow_negative_numbers = true)]
    length: Option<String>,

    /// Number of passwords to generate.
    #[clap(
        short = 'n',
        long,
        env = "KPWGEN_COUNT",
        default_value_t = DEFAULT_COUNT
    )]
    number: usize,

    /// Put a digit in each password.
    #[clap(short, long)]
    digit: bool,

    /// Put an uppercase letter in each password.
    #[clap(short, long)]
    upper: bool,

    /// Put a punctuation character in each password.
    #[clap(short, long)]
    punctuation: bool,
}

impl Kpwgen {
    /// Requested password length, defaulting when absent or empty.
    ///
    /// Surrounding whitespace is not trimmed. Integers beyond the
    /// platform word size saturate and are rejected by
    /// [`PasswordConfig::validate`].
    pub fn length(&self) -> Result<usize> {
        let value = match self.length.as_deref() {
            None | Some("") => return Ok(DEFAULT_LENGTH),
            Some(value) => value,
        };
        let length: i128 = value
            .parse()
            .map_err(|_| Error::LengthNotInteger(value.to_owned()))?;
        if length < 0 {
            return Err(Error::NegativeLength(length));
        }
        Ok(usize::try_from(length).unwrap_or(usize::MAX))
    }

    /// Number of passwords to generate.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Password options for these arguments.
    pub fn config(&self) -> Result<PasswordConfig> {
        Ok(PasswordConfig::new(self.length()?)
            .with_digit(self.digit)
            .with_upper(self.upper)
            .with_punctuation(self.punctuation))
    }
}

/// Parse the process arguments and print passwords to stdout.
pub fn run() -> Result<()> {
    let args = Kpwgen::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    generate(&args, RandomPool::new(), &mut out)
}

/// Write one password per line to `out`, drawing from `source`.
///
/// Each password is written as soon as it is generated; the first
/// failure stops the run.
pub fn generate<S: ByteSource>(
    args: &Kpwgen,
    source: S,
    out: &mut impl Write,
) -> Result<()> {
    let config = args.config()?;
    config.validate()?;

    tracing::debug!(
        target: TARGET,
        length = config.len(),
        number = args.number(),
        "generate"
    );

    let mut builder = PasswordBuilder::with_source(source, config);
    for _ in 0..args.number() {
        let password = builder.one()?;
        writeln!(out, "{}", password.expose_secret())?;
    }
    out.flush()?;
    Ok(())
}
