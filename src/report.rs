//! Bridge between the data layer and the analytics core: load one
//! campaign's annotators and records, run the engine, hand back the rows.

use crate::config::Config;
use crate::core::logic::{AnnotatorInput, Core};
use crate::core::policy::CampaignPolicy;
use crate::db::pool::DbPool;
use crate::db::queries::{
    find_campaign, load_annotators, load_records_for, resolve_assigned_total,
};
use crate::errors::AppResult;
use crate::models::campaign::Campaign;
use crate::models::status_row::AnnotatorStatusRow;
use crate::models::task_kind::TaskRegistry;

pub struct CampaignReport {
    pub campaign: Campaign,
    pub rows: Vec<AnnotatorStatusRow>,
}

/// Compute unsorted status rows for every member of a campaign.
pub fn collect_status_rows(
    pool: &mut DbPool,
    campaign_name: &str,
    registry: &TaskRegistry,
    cfg: &Config,
) -> AppResult<CampaignReport> {
    let conn = &mut pool.conn;
    let campaign = find_campaign(conn, campaign_name)?;
    let spec = registry.spec(campaign.kind);
    let policy = CampaignPolicy::select(campaign.kind, &campaign.options, registry);

    let mut inputs = Vec::new();
    for annotator in load_annotators(conn, campaign.id)? {
        let records = load_records_for(
            conn,
            campaign.id,
            &annotator.username,
            spec.excludes_complete_documents,
        )?;
        let total_items = resolve_assigned_total(conn, campaign.id, &annotator.username)?;
        inputs.push(AnnotatorInput {
            annotator,
            records,
            total_items,
        });
    }

    let rows = Core::build_status_rows(&inputs, &policy, cfg.idle_gap_threshold_secs);
    Ok(CampaignReport { campaign, rows })
}
