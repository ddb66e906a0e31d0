use figment::Jail;
use pretty_assertions::assert_eq;
use todo_config::{FormatPreference, LOCAL_CONFIG_FILE, TodoConfig};

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("TODO_STORAGE__FILE", "from-env.json");
        jail.set_env("TODO_SHELL__SHOW_LIST", "false");
        jail.set_env("TODO_GENERAL__DEFAULT_FORMAT", "raw");

        let config = TodoConfig::load().expect("config loads");
        assert_eq!(config.storage.file, "from-env.json");
        assert!(!config.shell.show_list);
        assert_eq!(config.general.default_format, FormatPreference::Raw);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            LOCAL_CONFIG_FILE,
            r#"
[storage]
file = "from-toml.json"
"#,
        )?;
        jail.set_env("TODO_STORAGE__FILE", "from-env.json");

        let config = TodoConfig::load().expect("config loads");
        assert_eq!(config.storage.file, "from-env.json");
        Ok(())
    });
}
