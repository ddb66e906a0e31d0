//! Interactive shell configuration.

use serde::{Deserialize, Serialize};

fn default_prompt() -> String {
    "> ".to_string()
}

const fn default_show_list() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShellConfig {
    /// Prompt printed before reading each command.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the list before every prompt.
    #[serde(default = "default_show_list")]
    pub show_list: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_list: default_show_list(),
        }
    }
}
