//! Ordered answer submission command

use clap::Args;
use std::path::PathBuf;

use canvass_api::SurveyBackend;
use canvass_engine::submit_in_order;
use canvass_session::SessionManager;
use canvass_types::AnswerDraft;

use crate::error::CliResult;

#[derive(Args)]
pub struct SubmitArgs {
    /// Path to a JSON file holding the ordered draft list
    pub drafts: PathBuf,
}

pub async fn execute(
    backend: &dyn SurveyBackend,
    mut manager: SessionManager,
    args: SubmitArgs,
) -> CliResult<()> {
    let drafts: Vec<AnswerDraft> = serde_json::from_str(&std::fs::read_to_string(&args.drafts)?)?;

    let session = manager.bootstrap().await?;
    let records = submit_in_order(backend, &session.token, &drafts).await?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
