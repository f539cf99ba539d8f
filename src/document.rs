use anyhow::Result;

use crate::{jobs, matrix::Matrix, preamble::Preamble};

/// Renders the complete pipeline document: preamble, then one job section
/// per stage, then the final trailing newline. Byte-for-byte deterministic
/// for a given preamble and matrix.
pub fn render_document(preamble: &Preamble, matrix: &Matrix) -> Result<String> {
    let head = preamble.render()?;
    let body = jobs::emit_jobs(matrix)?;

    let mut out = String::with_capacity(head.len() + body.len() + 2);
    out.push_str(&head);
    out.push('\n');
    out.push_str(&body);
    out.push('\n');
    Ok(out)
}
