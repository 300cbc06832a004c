use std::fmt::Display;
use std::str::FromStr;

/// Parse a command-line value through the type's `FromStr`, naming the
/// offending field on failure.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}
