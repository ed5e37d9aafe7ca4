use colored::Colorize;

const ERROR: &str = "Error:";

/// Print an error message for failure.
///
/// Written to stderr so standard output only carries passwords.
pub fn fail(msg: impl AsRef<str>) {
    let out = format!("{} {}", ERROR.red(), msg.as_ref());
    eprintln!("{}", out);
}
