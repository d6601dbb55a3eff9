use std::io::Write;

use resume_core::ResumeFields;
use serde::Serialize;

pub const USAGE_ERROR: &str = "PDF path not provided";

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: &'a str,
}

/// Write the extracted fields as a single JSON line.
pub fn print_fields(w: &mut dyn Write, fields: &ResumeFields) -> anyhow::Result<()> {
    print_json_line(w, fields)
}

/// Write `{"error": <message>}` as a single JSON line.
pub fn print_error(w: &mut dyn Write, message: &str) -> anyhow::Result<()> {
    print_json_line(w, &ErrorReport { error: message })
}

fn print_json_line<T: Serialize>(w: &mut dyn Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *w, value)?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}
