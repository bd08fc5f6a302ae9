//! Initial page load: six concurrent reads, each failing independently.

use common::rpc::Procedure;
use serde::de::DeserializeOwned;
use service::resource::{CaseStudy, Insight, LeadershipProfile, Offering, Service, Solution};
use tracing::{info, warn};

use crate::fallback;
use crate::rpc::RpcClient;
use crate::view::{CaseStudyBlock, ContentBlock, LeaderBlock};

/// Everything the page shows before any interaction.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub offerings: Vec<Offering>,
    pub solutions: Vec<Solution>,
    pub services: Vec<Service>,
    pub insights: Vec<Insight>,
    pub case_studies: Vec<CaseStudy>,
    pub leadership_profiles: Vec<LeadershipProfile>,
    /// Set once all six reads have settled, whatever their outcome.
    pub loaded: bool,
}

/// A failed read is logged and leaves its collection empty.
async fn fetch_or_empty<T: DeserializeOwned>(client: &RpcClient, procedure: Procedure) -> Vec<T> {
    match client.query::<Vec<T>>(procedure).await {
        Ok(records) => records,
        Err(e) => {
            warn!(%procedure, error = %e, "failed to load collection");
            Vec::new()
        }
    }
}

pub async fn load_site_content(client: &RpcClient) -> SiteContent {
    let (offerings, solutions, services, insights, case_studies, leadership_profiles) = tokio::join!(
        fetch_or_empty::<Offering>(client, Procedure::GetOfferings),
        fetch_or_empty::<Solution>(client, Procedure::GetSolutions),
        fetch_or_empty::<Service>(client, Procedure::GetServices),
        fetch_or_empty::<Insight>(client, Procedure::GetInsights),
        fetch_or_empty::<CaseStudy>(client, Procedure::GetCaseStudies),
        fetch_or_empty::<LeadershipProfile>(client, Procedure::GetLeadershipProfiles),
    );
    info!(
        offerings = offerings.len(),
        solutions = solutions.len(),
        services = services.len(),
        insights = insights.len(),
        case_studies = case_studies.len(),
        leadership_profiles = leadership_profiles.len(),
        "site content loaded"
    );
    SiteContent { offerings, solutions, services, insights, case_studies, leadership_profiles, loaded: true }
}

fn blocks_or<T, B>(records: &[T], placeholder: fn() -> Vec<B>) -> Vec<B>
where
    for<'a> B: From<&'a T>,
{
    if records.is_empty() {
        placeholder()
    } else {
        records.iter().map(B::from).collect()
    }
}

impl SiteContent {
    pub fn offering_blocks(&self) -> Vec<ContentBlock> { blocks_or(&self.offerings, fallback::offerings) }

    pub fn solution_blocks(&self) -> Vec<ContentBlock> { blocks_or(&self.solutions, fallback::solutions) }

    pub fn service_blocks(&self) -> Vec<ContentBlock> { blocks_or(&self.services, fallback::services) }

    pub fn insight_blocks(&self) -> Vec<ContentBlock> { blocks_or(&self.insights, fallback::insights) }

    pub fn case_study_blocks(&self) -> Vec<CaseStudyBlock> { blocks_or(&self.case_studies, fallback::case_studies) }

    pub fn leader_blocks(&self) -> Vec<LeaderBlock> { blocks_or(&self.leadership_profiles, fallback::leadership) }
}
