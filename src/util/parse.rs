use crate::error::internal::InternalError;

/// Parses a u64 value from a string slice
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed string to `u64`
/// - `Err(InternalError::ParseStringId)` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, InternalError> {
    value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })
}

/// Parses a Discord snowflake, rejecting zero.
///
/// Serenity's ID constructors panic on zero, so every string ID coming from the
/// store or command arguments goes through here first.
pub fn parse_snowflake(value: &str) -> Result<u64, InternalError> {
    match parse_u64_from_string(value)? {
        0 => Err(InternalError::ZeroId(value.to_string())),
        id => Ok(id),
    }
}
