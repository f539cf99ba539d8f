use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "gantry", version, about)]
pub struct Args {
    /// Write the document to a file instead of stdout
    #[arg(long)]
    pub out: Option<std::path::PathBuf>,

    /// Print a matrix report instead of the document
    #[arg(long, value_enum, default_value_t = ReportMode::Off)]
    pub report: ReportMode,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub report_out: Option<std::path::PathBuf>,

    /// Print the matrix as pretty JSON instead of the document
    #[arg(long, default_value_t = false)]
    pub dump_matrix: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    Off,
    Summary,
    Full,
}
