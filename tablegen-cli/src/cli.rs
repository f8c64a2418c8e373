use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about)]
/// Generates a CREATE TABLE statement, and INSERT statements filled with
/// synthetic data, from a YAML table schema.
///
/// The schema names the table, its columns and an optional `rows` count. The
/// generated SQL lands in two files in the output directory, named after the
/// schema file with `_create.sql` and `_insert.sql` suffixes.
pub struct Cli {
    /// The YAML file containing the table schema
    pub schema_file: PathBuf,

    /// The directory the generated SQL files are written to
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Print the generated SQL as JSON on stdout instead of writing files
    #[arg(long)]
    pub json: bool,
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}
