use anyhow::Context;

/// Loads the newline-delimited term list. Blank lines are ignored and
/// surrounding whitespace is trimmed.
pub fn load_terms(path: &str) -> anyhow::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read search terms from {path}"))?;
    Ok(parse_terms(&contents))
}

fn parse_terms(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_terms;

    #[test]
    fn blank_lines_are_ignored_and_whitespace_trimmed() {
        let contents = "rust programming\n\n  breaking news israel  \n\t\nonline tea store\n";
        assert_eq!(
            parse_terms(contents),
            vec!["rust programming", "breaking news israel", "online tea store"]
        );
    }

    #[test]
    fn empty_file_yields_no_terms() {
        assert!(parse_terms("").is_empty());
        assert!(parse_terms("\n\n  \n").is_empty());
    }
}
