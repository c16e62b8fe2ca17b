//! Session bootstrap command

use canvass_session::SessionManager;

use crate::error::CliResult;

pub async fn execute(mut manager: SessionManager) -> CliResult<()> {
    let session = manager.bootstrap().await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "state": manager.state().to_string(),
            "identity": session.identity,
        }))?
    );
    Ok(())
}
