use std::fs;

use roman_core::settings;

use super::CommandError;

pub fn settings_export() -> &'static str {
    settings::default_toml()
}

pub fn settings_validate(file: &str) -> Result<String, CommandError> {
    let content = read(file)?;
    let s = settings::parse_settings_toml(&content)?;
    Ok(format!(
        "OK: parser.subtractive={}, formatter.case={}",
        s.parser.subtractive.as_str(),
        s.formatter.case.as_str()
    ))
}

/// Install a settings file as the process-wide settings.
///
/// Must run before the first conversion.
pub fn load_settings(file: &str) -> Result<(), CommandError> {
    let content = read(file)?;
    settings::init_custom(content)?;
    Ok(())
}

fn read(file: &str) -> Result<String, CommandError> {
    fs::read_to_string(file).map_err(|source| CommandError::Io {
        path: file.to_string(),
        source,
    })
}
