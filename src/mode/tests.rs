#![cfg(test)]

use super::*;
use super::ModeSymbol::*;

fn mode_of<const N: usize>(symbols: [ModeSymbol; N]) -> Result<ModeString, ConflictError> {
    translate(ModeSet::from(symbols))
}

/// Every subset of the five symbols.
fn all_sets() -> impl Iterator<Item = ModeSet> {
    (0_u8..32).map(|bits| {
        ModeSymbol::ALL
            .into_iter()
            .enumerate()
            .filter(|(i, _)| bits & (1 << i) != 0)
            .map(|(_, s)| s)
            .collect()
    })
}

#[test]
fn test_read_defaults() {
    assert_eq!(mode_of([]).unwrap(), "r", "An empty set should open for reading.");
    assert_eq!(mode_of([Read]).unwrap(), "r");
    assert_eq!(mode_of([Binary]).unwrap(), "br");
    assert_eq!(mode_of([Text, Read]).unwrap(), "tr");
}

#[test]
fn test_write_tokens() {
    assert_eq!(mode_of([Overwrite]).unwrap(), "w");
    assert_eq!(mode_of([Overwrite, Read]).unwrap(), "w+");
    assert_eq!(mode_of([Append]).unwrap(), "a");
    assert_eq!(mode_of([Append, Read]).unwrap(), "a+");
    assert_eq!(mode_of([Binary, Overwrite]).unwrap(), "bw");
    assert_eq!(mode_of([Text, Append, Read]).unwrap(), "ta+");
    assert_eq!(mode_of([Binary, Append, Read]).unwrap(), "ba+");
}

#[test]
fn test_binary_text_conflict() {
    for set in all_sets().filter(|s| s.contains(Binary) && s.contains(Text)) {
        assert_eq!(
            translate(set),
            Err(ConflictError::BinaryText),
            "{set:?} should be rejected as binary + text, which takes precedence over other conflicts."
        );
    }
}

#[test]
fn test_overwrite_append_conflict() {
    for set in all_sets().filter(|s| s.contains(Overwrite) && s.contains(Append)) {
        if set.contains(Binary) && set.contains(Text) {
            continue;
        }
        assert_eq!(translate(set), Err(ConflictError::OverwriteAppend), "{set:?}");
    }
}

#[test]
fn test_conflict_messages() {
    assert_eq!(ConflictError::BinaryText.to_string(), "binary and text are mutually exclusive");
    assert_eq!(
        ConflictError::OverwriteAppend.to_string(),
        "overwrite and append are mutually exclusive"
    );
}

#[test]
fn test_duplicates_and_order() {
    assert_eq!(mode_of([Read, Read, Overwrite]), mode_of([Read, Overwrite]));
    assert_eq!(
        mode_of([Read, Append, Binary]),
        mode_of([Binary, Read, Append]),
        "Symbol order shouldn't affect the mode string."
    );
    assert_eq!(ModeSet::from([Append, Append, Append]).len(), 1);
}

#[test]
fn test_grammar() {
    for set in all_sets() {
        let Ok(mode) = translate(set) else { continue };
        let access = mode.trim_start_matches(['b', 't']);
        assert!(mode.len() - access.len() <= 1, "{mode} has more than one prefix.");
        assert!(
            ["r", "w", "w+", "a", "a+"].contains(&access),
            "{mode} has an unexpected access token."
        );
        assert_eq!(mode.is_binary(), set.contains(Binary));
        assert_eq!(mode.is_text(), set.contains(Text));
    }
}

#[test]
fn test_mode_queries() {
    let mode = mode_of([Append, Read]).unwrap();
    assert!(mode.is_readable() && mode.is_writable() && mode.is_append());
    assert!(!mode.is_truncating());

    let mode = mode_of([Overwrite, Binary]).unwrap();
    assert!(!mode.is_readable() && mode.is_truncating());

    let mode = mode_of([Text]).unwrap();
    assert!(mode.is_readable() && !mode.is_writable());
}

#[test]
fn test_stdio_order() {
    assert_eq!(mode_of([Binary, Append, Read]).unwrap().stdio(), "a+b");
    assert_eq!(mode_of([Text, Overwrite]).unwrap().stdio(), "w");
    assert_eq!(mode_of([Read]).unwrap().stdio(), "r");
}

#[test]
fn test_symbol_parsing() {
    assert_eq!("read".parse::<ModeSymbol>(), Ok(Read));
    assert_eq!(":append".parse::<ModeSymbol>(), Ok(Append));
    assert_eq!(
        "truncate".parse::<ModeSymbol>(),
        Err(InvalidSymbolError("truncate".to_owned())),
        "Only the five known symbols should parse."
    );
    for symbol in ModeSymbol::ALL {
        assert_eq!(symbol.to_string().parse::<ModeSymbol>(), Ok(symbol));
    }

    assert_eq!(ModeSet::parse([":binary", "overwrite"]), Ok(ModeSet::from([Overwrite, Binary])));
    assert_eq!(
        ModeSet::parse(["read", "write"]).map_err(|e| e.to_string()),
        Err("invalid mode symbol: write".to_owned())
    );
}

#[test]
fn test_set_operations() {
    let mut set = ModeSet::new().with(Read);
    assert!(set.insert(Append));
    assert!(!set.insert(Read), "Inserting a present symbol should report no change.");
    assert_eq!(set.iter().collect::<Vec<_>>(), [Read, Append]);
    assert_eq!(set.iter().len(), 2);
    assert_eq!(format!("{set:?}"), "{Read, Append}");

    assert!(set.remove(Read));
    assert!(!set.remove(Read));
    assert!(!set.contains(Read));
    assert!(ModeSet::default().is_empty());
}
