/*!
Test for BOM handling in JavaScript sources
*/

use jsdoc_bridge::core::read_source_file;
use jsdoc_bridge::parse_file;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_file_reading_with_bom() -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all("\u{FEFF}/** Привет. */\nvar greeting;".as_bytes())?;

    let content = read_source_file(temp_file.path())?;
    assert!(!content.starts_with('\u{FEFF}'));
    assert!(content.starts_with("/**"));

    Ok(())
}

#[test]
fn test_utf16_source_builds() -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "/** doc */\nvar x = 1;".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    temp_file.write_all(&bytes)?;

    let program = parse_file(temp_file.path()).unwrap();
    assert_eq!(program.body.len(), 1);
    assert!(program.body[0].leading_comments.is_some());
    // смещения считаются по декодированному тексту без BOM
    assert_eq!(program.comments[0].range.start, 0);

    Ok(())
}
