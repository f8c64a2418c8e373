use anyhow::{bail, Context, Result};
use clap::Parser;
use tablegen_tools::{generate, output_filename, TableSchema};
use tracing::info;

mod cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = cli::Cli::parse();

    run(cli)
}

fn run(cli: cli::Cli) -> Result<()> {
    let extension = cli
        .schema_file
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("yaml") && !extension.eq_ignore_ascii_case("yml") {
        bail!(
            "unsupported file format: expected a .yaml or .yml file, got {}",
            cli.schema_file.display()
        );
    }

    let content = std::fs::read_to_string(&cli.schema_file)
        .with_context(|| format!("failed to read {}", cli.schema_file.display()))?;

    let schema: TableSchema = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse {}", cli.schema_file.display()))?;

    let generated = generate(&schema)
        .with_context(|| format!("failed to generate SQL for table '{}'", schema.table_name))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
        return Ok(());
    }

    std::fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            cli.output_dir.display()
        )
    })?;

    let input_name = cli
        .schema_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let create_path = cli.output_dir.join(output_filename(&input_name, "_create"));
    std::fs::write(&create_path, &generated.create_sql)
        .with_context(|| format!("failed to write {}", create_path.display()))?;
    info!("wrote CREATE TABLE statement to {}", create_path.display());

    if let Some(insert_sql) = &generated.insert_sql {
        let insert_path = cli.output_dir.join(output_filename(&input_name, "_insert"));
        std::fs::write(&insert_path, insert_sql)
            .with_context(|| format!("failed to write {}", insert_path.display()))?;
        info!(
            "wrote INSERT statements for {} rows to {}",
            schema.rows,
            insert_path.display()
        );
    } else {
        info!("no INSERT statements generated, add a 'rows' count to the schema to get synthetic data");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::path::{Path, PathBuf};

    fn write_schema(dir: &Path) -> PathBuf {
        let schema_file = dir.join("users.yaml");
        std::fs::write(
            &schema_file,
            indoc! {"
                table_name: users
                rows: 3
                columns:
                  - name: id
                    type: INT
                    nullable: false
                    primary_key: true
                  - name: email
                    type: STRING
            "},
        )
        .unwrap();

        schema_file
    }

    #[test]
    fn writes_both_sql_files_to_the_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let schema_file = write_schema(dir.path());
        let output_dir = dir.path().join("output");

        run(cli::Cli {
            schema_file,
            output_dir: output_dir.clone(),
            json: false,
        })
        .unwrap();

        let create_sql = std::fs::read_to_string(output_dir.join("users_create.sql")).unwrap();
        assert!(create_sql.starts_with("CREATE TABLE users ("));
        assert!(create_sql.ends_with(");"));

        let insert_sql = std::fs::read_to_string(output_dir.join("users_insert.sql")).unwrap();
        assert!(insert_sql.starts_with("INSERT INTO users (id, email) VALUES\n"));
        assert!(insert_sql.ends_with(';'));
    }

    #[test]
    fn skips_the_insert_file_when_no_rows_are_requested() {
        let dir = tempfile::tempdir().unwrap();
        let schema_file = dir.path().join("empty.yml");
        std::fs::write(
            &schema_file,
            "table_name: empty\ncolumns:\n  - name: id\n    type: INT\n",
        )
        .unwrap();
        let output_dir = dir.path().join("output");

        run(cli::Cli {
            schema_file,
            output_dir: output_dir.clone(),
            json: false,
        })
        .unwrap();

        assert!(output_dir.join("empty_create.sql").exists());
        assert!(!output_dir.join("empty_insert.sql").exists());
    }

    #[test]
    fn rejects_files_that_are_not_yaml() {
        let result = run(cli::Cli {
            schema_file: PathBuf::from("schema.json"),
            output_dir: PathBuf::from("output"),
            json: false,
        });

        assert!(result.unwrap_err().to_string().contains("unsupported file format"));
    }

    #[test]
    fn reports_structural_schema_errors() {
        let dir = tempfile::tempdir().unwrap();
        let schema_file = dir.path().join("broken.yaml");
        std::fs::write(&schema_file, "table_name: broken\ncolumns: []\n").unwrap();

        let result = run(cli::Cli {
            schema_file,
            output_dir: dir.path().join("output"),
            json: false,
        });

        assert!(result.is_err());
    }
}
