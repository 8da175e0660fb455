use std::io::Write;

/// Prompt and read one line from stdin. An empty string means EOF.
pub fn readline() -> Result<String, String> {
    write!(std::io::stdout(), "trail> ").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())?;

    let mut buffer = String::new();
    std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;
    Ok(buffer)
}
