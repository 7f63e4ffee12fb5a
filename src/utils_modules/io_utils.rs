use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into `T`.

    # Arguments
    * `file_path` - path of the TOML file to read

    # Errors
    - the file does not exist or cannot be read
    - the content is not valid TOML or does not match `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &Path) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path).with_context(|| {
        format!(
            "[read_toml_from_file] Failed to read '{}'",
            file_path.display()
        )
    })?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}
