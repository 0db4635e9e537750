use anyhow::Context;
use backend::dashboards::d100_overview::service as overview;
use backend::domain::{a001_project, a002_content, a003_campaign};
use backend::shared::config::{get_log_dir, load_config};
use backend::system::initialization::build_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    backend::system::tracing::initialize(&get_log_dir(&config), &config.logging.level)?;

    tracing::info!("Store: {:?}", config.store.kind);
    let state = build_state(&config)?;

    let projects = a001_project::service::summary(state.projects.as_ref()).await?;
    tracing::info!(
        "Projects: {} (spend {:.2} of {:.2}, {}%)",
        projects.count,
        projects.total_spend,
        projects.total_budget,
        projects.overall_percentage
    );
    let picker = a001_project::service::options(state.projects.as_ref()).await?;
    tracing::debug!(
        "Project picker: {}",
        picker.iter().map(|o| o.name.as_str()).collect::<Vec<_>>().join(", ")
    );
    let contents = a002_content::service::summary(state.contents.as_ref()).await?;
    tracing::info!(
        "Contents: {} (reach {}, new followers {})",
        contents.count,
        contents.total_reach,
        contents.total_new_followers
    );
    let campaigns = a003_campaign::service::summary(state.campaigns.as_ref()).await?;
    tracing::info!(
        "Campaigns: {} (average engagement {}%)",
        campaigns.count,
        campaigns.average_engagement
    );

    let response = overview::get_overview(&state).await?;
    let json = serde_json::to_string_pretty(&response).context("Cannot serialize overview")?;
    println!("{}", json);

    Ok(())
}
