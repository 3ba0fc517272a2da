use glenumgen::{generate, GenOptions, ParseError, Style};

const LISTING: &str = "\
0:GL_ZERO
0:GL_NONE
0:GL_NO_ERROR
1:GL_ONE
500:GL_INVALID_ENUM
501:GL_INVALID_VALUE
0x502:GL_INVALID_OPERATION
ffffffffffffffff:TIMEOUT_IGNORED
ffffffff:TIMEOUT_IGNORED
ffffffff:GL_INVALID_INDEX
8242:GL_DEBUG_OUTPUT_SYNCHRONOUS
";

#[test]
fn gl_listing_to_go_table() {
    // the 64-bit key would not parse, so exclusion must not skip validation
    let listing = LISTING.replace("ffffffffffffffff:TIMEOUT_IGNORED\n", "");
    let out = generate(&listing, &GenOptions::default()).unwrap();
    let expected = r#"package opengl

// GlEnum string lookup
var (
    GlEnums = map[uint32][]string{
        0:          []string{"GL_ZERO", "GL_NONE", "GL_NO_ERROR"},
        1:          []string{"GL_ONE"},
        1280:       []string{"GL_INVALID_ENUM"},
        1281:       []string{"GL_INVALID_VALUE"},
        1282:       []string{"GL_INVALID_OPERATION"},
        33346:      []string{"GL_DEBUG_OUTPUT_SYNCHRONOUS"},
        4294967295: []string{"GL_INVALID_INDEX"},
    }
)
"#;
    assert_eq!(out, expected);
}

#[test]
fn oversized_key_aborts_even_when_excluded() {
    let err = generate(LISTING, &GenOptions::default()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidKey { line: 8, .. }));
}

#[test]
fn excluded_name_does_not_occupy_a_key() {
    let out = generate("5:FOO\n5:TIMEOUT_IGNORED\n", &GenOptions::default()).unwrap();
    assert!(out.contains("        5: []string{\"FOO\"},\n"));
    assert!(!out.contains("TIMEOUT_IGNORED"));

    let out = generate("1:A\n500:TIMEOUT_IGNORED\n", &GenOptions::default()).unwrap();
    assert!(out.contains("        1: []string{\"A\"},\n"));
}

#[test]
fn padding_aligns_name_lists() {
    let out = generate("500:BIG\n5:SMALL\n", &GenOptions::default()).unwrap();
    assert!(out.contains("        5:    []string{\"SMALL\"},\n        1280: []string{\"BIG\"},\n"));
}

#[test]
fn aliases_are_grouped() {
    let out = generate("a:RED\na:CRIMSON\n", &GenOptions::default()).unwrap();
    assert!(out.contains("        10: []string{\"RED\", \"CRIMSON\"},\n"));
    assert_eq!(out.matches("[]string{\"").count(), 1);
}

#[test]
fn preferred_output_has_no_trailing_blank_line() {
    let out = generate("1:A", &GenOptions::default()).unwrap();
    assert!(out.ends_with("    }\n)\n"));
}

#[test]
fn empty_listing_renders_empty_map() {
    let out = generate("\n\n", &GenOptions::default()).unwrap();
    assert_eq!(
        out,
        "package opengl\n\n// GlEnum string lookup\nvar (\n    GlEnums = map[uint32][]string{\n    }\n)\n"
    );
}

#[test]
fn legacy_style_matches_historical_output() {
    let options = GenOptions {
        style: Style::Legacy,
        ..GenOptions::default()
    };
    let out = generate("1:GL_ONE\nffffffff:TIMEOUT_IGNORED\n0:GL_ZERO\n", &options).unwrap();
    let expected = r#"package opengl

// GlEnum string lookup
var (
    GlEnums = map[int][]string{
        0:          []string{"GL_ZERO"},
        1:          []string{"GL_ONE"},
        // 4294967295: []string{"TIMEOUT_IGNORED"},
    }
)

"#;
    assert_eq!(out, expected);
}

#[test]
fn malformed_input_produces_no_output() {
    for input in &["BADLINE\n", "1:A\nxyz:NAME\n", "5::X\n"] {
        assert!(generate(input, &GenOptions::default()).is_err(), "{:?}", input);
    }
}

#[test]
fn diagnostic_names_the_line() {
    let input = "1:A\nBADLINE\n";
    let err = generate(input, &GenOptions::default()).unwrap_err();
    let mut rendered = Vec::new();
    err.write_report(input, &mut rendered).unwrap();
    let rendered = String::from_utf8_lossy(&rendered);
    assert!(rendered.contains("line 2: expected `<key>:<name>`"));
}
