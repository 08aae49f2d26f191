use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

use cap::transform::{preserves_length, uppercase};

#[quickcheck]
fn uppercase_is_idempotent(text: String) -> bool {
    let once = uppercase(&text);
    uppercase(&once) == once
}

#[quickcheck]
fn chars_without_a_mapping_are_unchanged(text: String) -> TestResult {
    // Only look at text where every char maps to exactly one char, so the
    // output lines up with the input position by position.
    if !text.chars().all(|c| c.to_uppercase().count() == 1) {
        return TestResult::discard();
    }

    let upper = uppercase(&text);
    let aligned = text.chars().zip(upper.chars()).all(|(before, after)| {
        let mapped: Vec<char> = before.to_uppercase().collect();
        let untouched = !(before.is_ascii_digit() || before.is_ascii_punctuation()) || before == after;
        mapped == [after] && untouched
    });
    TestResult::from_bool(aligned && preserves_length(&text, &upper))
}

#[quickcheck]
fn ascii_text_keeps_its_length(bytes: Vec<u8>) -> bool {
    let text: String = bytes
        .into_iter()
        .filter(u8::is_ascii)
        .map(char::from)
        .collect();
    let upper = uppercase(&text);
    upper.len() == text.len() && upper == text.to_ascii_uppercase()
}

/// Arbitrary text written as `input<ID>.txt` comes back uppercased on stdout
/// and in `output<ID>.txt`
#[quickcheck]
fn binary_matches_library(text: String, id: u16) -> Result<bool, String> {
    let temp_dir = TempDir::new().map_err(|e| format!("Failed to create temp dir: {}", e))?;
    let input_dir = temp_dir.path().join("input");
    let output_dir = temp_dir.path().join("output");
    fs::create_dir(&input_dir).map_err(|e| format!("Failed to create input dir: {}", e))?;
    fs::create_dir(&output_dir).map_err(|e| format!("Failed to create output dir: {}", e))?;

    fs::write(input_dir.join(format!("input{id}.txt")), &text)
        .map_err(|e| format!("Failed to write input: {}", e))?;

    let output = Command::new(env!("CARGO_BIN_EXE_cap"))
        .current_dir(temp_dir.path())
        .arg(id.to_string())
        .output()
        .map_err(|e| format!("Failed to run cap: {}", e))?;

    if !output.status.success() {
        return Err(format!(
            "cap failed with status {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    let written = fs::read_to_string(output_dir.join(format!("output{id}.txt")))
        .map_err(|e| format!("Failed to read output: {}", e))?;

    let expected = uppercase(&text);
    Ok(written == expected && output.stdout == expected.as_bytes())
}
