use anyhow::Result;

use crate::{cli::ReportMode, matrix::Matrix};

pub fn build_report(matrix: &Matrix, mode: ReportMode) -> String {
    match mode {
        ReportMode::Off => String::new(),
        ReportMode::Summary => summary(matrix),
        ReportMode::Full => format!("{matrix:#?}"),
    }
}

fn summary(matrix: &Matrix) -> String {
    let mut out = String::new();

    out.push_str("gantry report (summary)\n");
    out.push_str("=======================\n");

    out.push_str(&format!("stages: {}\n", matrix.stages.len()));
    for s in &matrix.stages {
        out.push_str(&format!("  - {} ({})\n", s.name, s.id));
    }

    out.push_str(&format!("\nmac platforms: {}\n", matrix.mac.len()));
    for p in &matrix.mac {
        out.push_str(&format!("  - {} ({})\n", p.os, p.compiler_spec()));
    }

    out.push_str(&format!("\nlinux platforms: {}\n", matrix.linux.len()));
    for p in &matrix.linux {
        out.push_str(&format!("  - {} ({})\n", p.os, p.compiler_spec()));
    }

    out.push_str(&format!("\nbuild types: {}\n", matrix.build_types.len()));
    for b in &matrix.build_types {
        out.push_str(&format!("  - {b}\n"));
    }

    out.push_str(&format!("\njob blocks: {}\n", matrix.job_count()));

    out
}

pub fn dump_matrix_json(matrix: &Matrix) -> Result<String> {
    Ok(serde_json::to_string_pretty(matrix)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_is_empty() {
        assert_eq!(build_report(&Matrix::builtin(), ReportMode::Off), "");
    }

    #[test]
    fn summary_lists_axes_and_total() {
        let r = build_report(&Matrix::builtin(), ReportMode::Summary);
        assert!(r.contains("stages: 5\n"));
        assert!(r.contains("  - Build (1st run) (Build1)\n"));
        assert!(r.contains("mac platforms: 1\n"));
        assert!(r.contains("  - osx (clang-4.0)\n"));
        assert!(r.contains("linux platforms: 2\n"));
        assert!(r.contains("  - debian-9 (gcc-6)\n"));
        assert!(r.contains("build types: 2\n"));
        assert!(r.contains("job blocks: 30\n"));
    }

    #[test]
    fn json_dump_round_trips_through_serde() {
        let dump = dump_matrix_json(&Matrix::builtin()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&dump).unwrap();
        assert_eq!(v["mac"][0]["compiler"], "clang");
        assert_eq!(v["linux"][1]["os"], "debian-9");
        assert_eq!(v["stages"][4]["id"], "TestAll");
    }
}
