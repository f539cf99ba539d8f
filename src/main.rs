use anyhow::{Context as _, Result};
use clap::Parser;

use gantry::cli::{Args, ReportMode};

fn main() -> Result<()> {
    let args = Args::parse();
    let matrix = gantry::Matrix::builtin();

    if args.dump_matrix {
        println!("{}", gantry::report::dump_matrix_json(&matrix)?);
        return Ok(());
    }

    if args.report != ReportMode::Off {
        let report = gantry::report::build_report(&matrix, args.report);
        match &args.report_out {
            Some(path) => std::fs::write(path, &report)
                .with_context(|| format!("failed to write report to {}", path.display()))?,
            None => print!("{report}"),
        }
        return Ok(());
    }

    let preamble = gantry::Preamble::default();
    let document = gantry::render_document(&preamble, &matrix)?;

    match &args.out {
        Some(path) => std::fs::write(path, &document)
            .with_context(|| format!("failed to write document to {}", path.display()))?,
        None => print!("{document}"),
    }

    Ok(())
}
