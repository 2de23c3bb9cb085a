fn main() {
    // Validate embedded data files at compile time.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
    validate_tsv(
        "src/dict/default_emoji.tsv",
        include_str!("src/dict/default_emoji.tsv"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

fn validate_tsv(path: &str, content: &str) {
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once('\t') {
            Some((keyword, value)) if !keyword.trim().is_empty() && !value.is_empty() => {}
            _ => panic!("{path}:{}: expected keyword<TAB>value", idx + 1),
        }
    }
}
