//! Styling for coursekit's terminal output.
//!
//! Help screens, command listings and error lines share one palette so
//! every category reads the same. `config get` renders TOML values through
//! [`format_toml_value`].

use toml::Value;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
}

fn paint(codes: &[&str], text: &str) -> String {
    let mut styled = codes.concat();
    styled.push_str(text);
    styled.push_str(ansi::RESET);
    styled
}

/// Title line of a help screen, e.g. `coursekit`.
pub fn format_header(text: &str) -> String {
    paint(&[ansi::BOLD, ansi::CYAN], text)
}

/// Section label within a help screen, such as `Commands:`.
pub fn format_subheader(text: &str) -> String {
    paint(&[ansi::BOLD, ansi::YELLOW], text)
}

/// Command name in a listing (`seek`, `complete`).
pub fn format_command(text: &str) -> String {
    paint(&[ansi::BOLD, ansi::GREEN], text)
}

/// Category name in a listing (`player`, `progress`).
pub fn format_category(text: &str) -> String {
    paint(&[ansi::BOLD, ansi::BLUE], text)
}

/// Muted text for descriptions and usage hints.
pub fn format_description(text: &str) -> String {
    paint(&[ansi::DIM], text)
}

/// Error line printed to stderr before exiting.
pub fn format_error(text: &str) -> String {
    paint(&[ansi::BOLD, ansi::RED], text)
}

/// Render a config value for `config get`.
///
/// Scalars print as written in TOML; arrays and tables print only their
/// length.
///
/// # Examples
///
/// ```
/// use coursekit::cli::formatting::format_toml_value;
///
/// let skip = toml::Value::Integer(10);
/// assert_eq!(format_toml_value(&skip), "10");
///
/// let title = toml::Value::String("Lesson audio".to_string());
/// assert_eq!(format_toml_value(&title), "\"Lesson audio\"");
/// ```
pub fn format_toml_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Array(items) => format!("[{}]", items.len()),
        Value::Table(table) => format!("{{{}}}", table.len()),
        Value::Datetime(datetime) => datetime.to_string(),
    }
}
