//! Scenario fetch and routed resolution command

use clap::Args;

use canvass_api::SurveyBackend;
use canvass_engine::resolve_questions;
use canvass_types::ScenarioId;

use crate::error::CliResult;

#[derive(Args)]
pub struct ScenarioArgs {
    /// Scenario identifier
    pub scenario_id: String,

    /// Page to resolve
    #[arg(long, default_value = "0")]
    pub page: u32,

    /// View variant (0 is the default variant)
    #[arg(long, default_value = "0")]
    pub view: u32,

    /// Mode variant (0 is the default variant)
    #[arg(long, default_value = "0")]
    pub mode: u32,
}

pub async fn execute(backend: &dyn SurveyBackend, args: ScenarioArgs) -> CliResult<()> {
    let scenario = backend
        .fetch_scenario(&ScenarioId::new(args.scenario_id))
        .await?;
    let questions = resolve_questions(&scenario.questions, args.page, args.view, args.mode);

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "scenario": scenario.name,
            "page": args.page,
            "view": args.view,
            "mode": args.mode,
            "questions": questions,
        }))?
    );
    Ok(())
}
