use std::io::Write;
use tempfile::NamedTempFile;

const API_XML: &str = r#"<FUNCTIONLIST>
  <GROUP name="Game">
    <FUNCTION name="Game_GetTime">
      <RESULT type="Real"/>
      <SHORTDESC>Seconds since the match started.</SHORTDESC>
    </FUNCTION>
    <CONST name="TEAM_NEUTRAL" value="-1"/>
  </GROUP>
</FUNCTIONLIST>"#;

fn write_temp_xml(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::with_suffix(".xml").unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

// ======================================================================
// generate_file
// ======================================================================

#[test]
fn generate_writes_blob_with_builtins() {
    let src = write_temp_xml(API_XML);
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("scardoc.dat");
    let out = out_path.to_str().unwrap();

    let result = cli::commands::generate::generate_file(src.path().to_str().unwrap(), out, false);
    assert!(result.is_ok(), "generate_file failed: {:?}", result.err());

    let bytes = std::fs::read(&out_path).unwrap();
    assert!(bytes.len() >= 4, "output file too small");
    assert_eq!(i32::from_le_bytes(bytes[0..4].try_into().unwrap()), 4);
}

#[test]
fn generate_direct_matches_atomic() {
    let src = write_temp_xml(API_XML);
    let dir = tempfile::tempdir().unwrap();
    let atomic = dir.path().join("a.dat");
    let direct = dir.path().join("d.dat");
    let input = src.path().to_str().unwrap();

    cli::commands::generate::generate_file(input, atomic.to_str().unwrap(), false)
        .expect("atomic generate should succeed");
    cli::commands::generate::generate_file(input, direct.to_str().unwrap(), true)
        .expect("direct generate should succeed");

    assert_eq!(
        std::fs::read(&atomic).unwrap(),
        std::fs::read(&direct).unwrap()
    );
}

#[test]
fn generate_empty_description_still_has_builtins() {
    let src = write_temp_xml("<FUNCTIONLIST/>");
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("scardoc.dat");

    cli::commands::generate::generate_file(
        src.path().to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
    )
    .expect("generate should succeed");

    let bytes = std::fs::read(&out_path).unwrap();
    assert_eq!(i32::from_le_bytes(bytes[0..4].try_into().unwrap()), 2);
}

#[test]
fn generate_nonexistent_input_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("scardoc.dat");
    let result = cli::commands::generate::generate_file(
        "/tmp/nonexistent_scardoc_test.xml",
        out_path.to_str().unwrap(),
        false,
    );
    assert!(result.is_err());
    assert!(!out_path.exists());
}

#[test]
fn generate_missing_attribute_reports_context() {
    let src = write_temp_xml(r#"<L><G><CONST name="K"/></G></L>"#);
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("scardoc.dat");

    let result = cli::commands::generate::generate_file(
        src.path().to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
    );
    let err = format!("{:#}", result.unwrap_err());
    assert!(
        err.contains("missing required attribute `value`"),
        "unexpected error: {err}"
    );
    assert!(!out_path.exists());
}

#[test]
fn generate_non_ascii_returns_error() {
    let src = write_temp_xml(
        r#"<L><G><FUNCTION name="F"><SHORTDESC>Ünits</SHORTDESC></FUNCTION></G></L>"#,
    );
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("scardoc.dat");

    let result = cli::commands::generate::generate_file(
        src.path().to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
    );
    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("non-ASCII"), "unexpected error: {err}");
    // atomic mode leaves nothing behind
    assert!(!out_path.exists());
}

// ======================================================================
// inspect_file
// ======================================================================

#[test]
fn inspect_valid_description() {
    let src = write_temp_xml(API_XML);
    let result = cli::commands::inspect::inspect_file(src.path().to_str().unwrap());
    assert!(result.is_ok(), "inspect failed: {:?}", result.err());
}

#[test]
fn render_model_lists_entries_in_input_order() {
    let doc = scardoc::reader::parse_str(API_XML).unwrap();
    let dump = cli::commands::inspect::render_model(&doc);
    assert_eq!(
        dump,
        "Function name: Game_GetTime\n\
         \x20 Returns: Real\n\
         \x20 Arguments: \n\
         \x20 Description: Seconds since the match started.\n\n\n\
         Constant name: TEAM_NEUTRAL\n\
         \x20 Value: -1\n\
         \x20 Description: \n\
         2\n"
    );
}

#[test]
fn render_model_of_empty_description() {
    let doc = scardoc::reader::parse_str("<FUNCTIONLIST/>").unwrap();
    assert_eq!(cli::commands::inspect::render_model(&doc), "0\n");
}

#[test]
fn inspect_malformed_xml_returns_error() {
    let src = write_temp_xml("<FUNCTIONLIST><GROUP>");
    let result = cli::commands::inspect::inspect_file(src.path().to_str().unwrap());
    assert!(result.is_err());
    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("malformed XML"), "unexpected error: {err}");
}
