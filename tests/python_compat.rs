//! Compatibility with files written by Python's `repr` and read by
//! `ast.literal_eval`
//!
//! The samples below are verbatim `repr()` output of Python 3 values.

use std::fs;

use appendstore::literal::{parse, Literal};
use appendstore::store::{AppendStore, LiteralCodec};
use tempfile::TempDir;

/// Values whose Python `repr` we reproduce byte for byte.
const CANONICAL: &[&str] = &[
    "None",
    "True",
    "-42",
    "0.1",
    "-0.0",
    "1699999999.123",
    "'plain'",
    "\"Host 'srv01' changed\"",
    "'both \\' and \"'",
    "'tab\\there\\nnext'",
    "'nul \\x00 and bell \\x07'",
    "'C:\\\\temp'",
    "'Grüße ✓'",
    "'nbsp\\xa0 and\\u2028'",
    "()",
    "(1,)",
    "('Host', 'srv01')",
    "[]",
    "[True, False, None]",
    "{}",
    "{'time': 1699999999.123, 'user_id': 'cmkadmin', 'action': 'edit-host', 'text': \"Host 'srv01' changed\", 'object': ('Host', 'srv01'), 'diff': None}",
    "{1: 'a', (2, 3): [4, {'x': ()}]}",
];

#[test]
fn canonical_repr_round_trips_exactly() {
    for text in CANONICAL {
        let literal = parse(text).unwrap_or_else(|e| panic!("{}: {}", text, e));
        assert_eq!(&literal.to_text().unwrap(), text);
    }
}

#[test]
fn other_python_spellings_parse() {
    let cases: Vec<(&str, Literal)> = vec![
        ("1e+16", Literal::Float(1e16)),
        ("1e-05", Literal::Float(1e-5)),
        ("u'legacy'", Literal::from("legacy")),
        ("r'\\d+'", Literal::from("\\d+")),
        ("'con' \"cat\"", Literal::from("concat")),
        ("0x1F", Literal::Int(31)),
        ("1_000", Literal::Int(1000)),
        ("'\\u00e9\\q'", Literal::from("é\\q")),
        ("[1, 2,]", Literal::List(vec![Literal::Int(1), Literal::Int(2)])),
        (
            " {'a' :\n 1 , } ",
            Literal::dict([("a", 1)]),
        ),
    ];

    for (text, expected) in cases {
        assert_eq!(parse(text).unwrap(), expected, "{}", text);
    }
}

#[test]
fn python_only_constructs_are_rejected() {
    for text in [
        "{1, 2}",
        "b'bytes'",
        "1j",
        "'''triple'''",
        "set()",
        "datetime.datetime(2024, 1, 1)",
        "99999999999999999999",
        "float('nan')",
    ] {
        assert!(parse(text).is_err(), "{} should not parse", text);
    }
}

#[test]
fn store_reads_file_written_by_python() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wato_audit.mk");

    // What the Python store leaves after three appends.
    let mut raw = Vec::new();
    for record in [
        "(1699999999, 'cmkadmin', 'edit-host', \"Host 'srv01' changed\")",
        "{'site': 'prod', 'enabled': True}",
        "'plain'",
    ] {
        raw.extend_from_slice(record.as_bytes());
        raw.push(0);
    }
    fs::write(&path, &raw).unwrap();

    let store = AppendStore::new(&path, LiteralCodec);
    let records = store.read().unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        Literal::Tuple(vec![
            Literal::Int(1_699_999_999),
            Literal::from("cmkadmin"),
            Literal::from("edit-host"),
            Literal::from("Host 'srv01' changed"),
        ])
    );
    assert_eq!(records[1].get("enabled"), Some(&Literal::Bool(true)));

    // Appending keeps the Python-readable layout.
    store.append(&Literal::from("next")).unwrap();
    let mut expected = raw;
    expected.extend_from_slice(b"'next'\0");
    assert_eq!(fs::read(&path).unwrap(), expected);
}
