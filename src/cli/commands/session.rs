use anyhow::Result;
use tokio::io::BufReader;

use crate::config::{ConfigManager, ResolveOptions};
use crate::session::TranslationSession;
use crate::translation::TranslationAdapter;

/// Runs an interactive session reading lines from stdin.
pub async fn run_session(options: ResolveOptions) -> Result<()> {
    let config = ConfigManager::new()?.resolve(&options)?;
    let adapter = TranslationAdapter::from_config(&config)?;

    let mut session = TranslationSession::new(config, adapter);
    session.run(BufReader::new(tokio::io::stdin())).await
}
