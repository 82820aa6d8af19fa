pub mod init;
pub mod play;
pub mod stats;
pub mod validate;

use anyhow::Result;

use wordgame_core::config::{load_config_from, ConfigOverrides, ResolvedConfig};

use crate::SessionArgs;

/// Merge the config file, environment and flags into session settings.
pub fn resolve(args: SessionArgs) -> Result<ResolvedConfig> {
    let config = load_config_from(args.config.as_deref())?;
    config.resolve(ConfigOverrides {
        lexicon_path: args.lexicon,
        history_path: args.history,
        decay: args.decay,
    })
}
