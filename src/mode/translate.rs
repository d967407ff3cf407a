use super::{ConflictError, ModeSet, ModeString};

/// Translates a set of mode symbols into the mode string expected by a native open primitive.
///
/// The output is an optional `b`/`t` prefix followed by the access token:
///
/// | Symbols                     | Access token |
/// |-----------------------------|--------------|
/// | none, or only `Read`        | `r`          |
/// | `Overwrite`                 | `w`          |
/// | `Overwrite` + `Read`        | `w+`         |
/// | `Append`                    | `a`          |
/// | `Append` + `Read`           | `a+`         |
///
/// # Errors
/// Conflicts are checked in order, so the first one found is the one reported:
/// - [`ConflictError::BinaryText`] if both `Binary` and `Text` are present.
/// - [`ConflictError::OverwriteAppend`] if both `Overwrite` and `Append` are present.
pub fn translate(modes: ModeSet) -> Result<ModeString, ConflictError> {
    use super::ModeSymbol::*;

    let mut mode = ModeString::empty();

    match (modes.contains(Binary), modes.contains(Text)) {
        (true, true) => Err(ConflictError::BinaryText)?,
        (true, false) => mode.push(b'b'),
        (false, true) => mode.push(b't'),
        (false, false) => (),
    }

    match (modes.contains(Overwrite), modes.contains(Append)) {
        (true, true) => Err(ConflictError::OverwriteAppend)?,
        (false, false) => mode.push(b'r'),
        (overwrite, _) => {
            mode.push(if overwrite { b'w' } else { b'a' });
            if modes.contains(Read) {
                mode.push(b'+');
            }
        },
    }

    Ok(mode)
}
