// Kept in its own test binary: it mutates the process environment.
use id_obfuscator::config::{load_config, ConfigOverrides};
use id_obfuscator::obfuscator::ReplacementMode;
use std::io::Write;
use tempfile::Builder;

#[test]
fn env_overrides_file_and_cli_overrides_env() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "replacement = \"per-match\"").unwrap();
    file.flush().unwrap();

    std::env::set_var("ID_OBFUSCATOR_REPLACEMENT", "shared");

    let cfg = load_config(Some(file.path()), &ConfigOverrides::default()).unwrap();
    assert_eq!(cfg.replacement, ReplacementMode::Shared);

    let overrides = ConfigOverrides {
        replacement: Some(ReplacementMode::PerMatch),
        ..Default::default()
    };
    let cfg = load_config(Some(file.path()), &overrides).unwrap();
    assert_eq!(cfg.replacement, ReplacementMode::PerMatch);

    std::env::remove_var("ID_OBFUSCATOR_REPLACEMENT");
}
