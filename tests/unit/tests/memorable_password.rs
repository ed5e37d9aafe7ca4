use anyhow::Result;
use kpwgen_password::{
    build_password, secrecy::ExposeSecret, ByteSource, Error,
    PasswordBuilder, PasswordConfig, RandomPool, PUNCTUATION, SYLLABLES,
};
use rand::{rngs::StdRng, SeedableRng};

fn all_classes(length: usize) -> PasswordConfig {
    PasswordConfig::new(length)
        .with_digit(true)
        .with_upper(true)
        .with_punctuation(true)
}

#[test]
fn test_memorable_password_length() -> Result<()> {
    let mut source = RandomPool::new();
    for length in 1..=64 {
        for _ in 0..20 {
            let config = PasswordConfig::new(length);
            let password = build_password(&mut source, &config)?;
            let password = password.expose_secret();
            assert!(password.len() >= length);
            assert!(password.len() <= length + 2);
            assert!(password.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }
    Ok(())
}

#[test]
fn test_memorable_password_classes() -> Result<()> {
    let mut builder = PasswordBuilder::new(all_classes(20));
    for password in builder.many(200)? {
        let password = password.expose_secret().as_bytes();
        let last = password.len() - 1;

        let digits: Vec<usize> = positions(password, |b| b.is_ascii_digit());
        let upper: Vec<usize> =
            positions(password, |b| b.is_ascii_uppercase());
        let punct: Vec<usize> =
            positions(password, |b| PUNCTUATION.contains(&b));

        assert_eq!(1, digits.len());
        assert_eq!(1, upper.len());
        assert_eq!(1, punct.len());

        assert_ne!(digits[0], upper[0]);
        assert_ne!(digits[0], punct[0]);
        assert_ne!(upper[0], punct[0]);
        assert!(!digits.contains(&last));
        assert!(!upper.contains(&last));
        assert!(!punct.contains(&last));

        let others = password.len() - 3;
        assert_eq!(
            others,
            password.iter().filter(|b| b.is_ascii_lowercase()).count()
        );
    }
    Ok(())
}

#[test]
fn test_memorable_password_excluded_characters() -> Result<()> {
    assert!(!PUNCTUATION.contains(&b'\''));
    assert!(!PUNCTUATION.contains(&b'\\'));

    let mut builder = PasswordBuilder::new(all_classes(8));
    for password in builder.many(500)? {
        let password = password.expose_secret();
        assert!(!password.contains('\''));
        assert!(!password.contains('\\'));
    }
    Ok(())
}

#[test]
fn test_memorable_password_minimum_lengths() -> Result<()> {
    let mut source = RandomPool::new();
    for _ in 0..100 {
        let password = build_password(&mut source, &all_classes(4))?;
        assert!(password.expose_secret().len() >= 4);

        let config = PasswordConfig::new(2).with_digit(true);
        let password = build_password(&mut source, &config)?;
        assert!(password.expose_secret().bytes().any(|b| b.is_ascii_digit()));
    }

    let result = build_password(&mut source, &all_classes(3));
    assert!(matches!(
        result,
        Err(Error::InvalidLength {
            length: 3,
            minimum: 4,
            ..
        })
    ));
    Ok(())
}

#[test]
fn test_memorable_password_seeded_pool() -> Result<()> {
    let config = all_classes(16);
    let mut first =
        RandomPool::<StdRng>::from_rng(StdRng::seed_from_u64(7));
    let mut second =
        RandomPool::<StdRng>::from_rng(StdRng::seed_from_u64(7));
    for _ in 0..10 {
        let a = build_password(&mut first, &config)?;
        let b = build_password(&mut second, &config)?;
        assert_eq!(a.expose_secret(), b.expose_secret());
    }
    Ok(())
}

#[test]
fn test_memorable_password_syllable_table() {
    assert_eq!(213, SYLLABLES.len());
    assert_eq!(8, SYLLABLES.iter().filter(|s| s.is_empty()).count());
    for syllable in SYLLABLES {
        assert!(syllable.len() <= 3);
        assert!(syllable.bytes().all(|b| b.is_ascii_lowercase()));
    }
    assert_eq!(30, PUNCTUATION.len());
}

#[test]
fn test_memorable_password_shared_source() -> Result<()> {
    // A borrowed pool works as a source for several builders
    let mut pool = RandomPool::new();
    let mut builder =
        PasswordBuilder::with_source(&mut pool, PasswordConfig::new(6));
    let password = builder.one()?;
    assert!(password.expose_secret().len() >= 6);
    assert!(pool.next_byte().is_ok());
    Ok(())
}

fn positions(password: &[u8], test: impl Fn(u8) -> bool) -> Vec<usize> {
    password
        .iter()
        .enumerate()
        .filter(|(_, b)| test(**b))
        .map(|(index, _)| index)
        .collect()
}
