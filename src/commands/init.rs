use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub fn init_config(force: bool) -> Result<()> {
    write_default_config(Path::new(CONFIG_FILE_NAME), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# bmical configuration

[display]
# Output format: terminal, json, markdown
format = "terminal"
# Color mode: auto, always, never
color = "auto"

[input]
# Unit assumed when --unit is not given: cm, m, ft
default_unit = "cm"
"#;

    io::write_file(config_path, default_config)?;

    Ok(())
}
