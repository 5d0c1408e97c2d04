use crate::cli::args::InitArgs;
use crate::exit_codes::SUCCESS;
use std::path::Path;

pub fn run(args: InitArgs) -> anyhow::Result<i32> {
    println!("Generating sample dataset and config in {}", args.dir.display());
    write_file_if_missing(
        &args.dir.join("mock_data.json"),
        crate::templates::SAMPLE_DATASET_JSON,
    )?;
    write_file_if_missing(
        &args.dir.join("rageval.yaml"),
        crate::templates::SAMPLE_CONFIG_YAML,
    )?;
    println!("Initialization complete. Run 'rageval run' to evaluate the sample.");
    Ok(SUCCESS)
}

fn write_file_if_missing(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        std::fs::write(path, content)?;
        println!("   Created {}", path.display());
    } else {
        println!("   Skipped {} (exists)", path.display());
    }
    Ok(())
}
