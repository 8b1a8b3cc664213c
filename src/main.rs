use std::path::PathBuf;

use clap::Parser;
use course_planner::AppError;

#[derive(Parser)]
#[command(name = "course-planner")]
#[command(version)]
#[command(about = "Browse a comma-delimited course catalog from an interactive menu", long_about = None)]
struct Cli {
    /// Path to the course data file
    #[arg(short, long, default_value = "courselist.csv")]
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = course_planner::run(&cli.file);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
