//! Remote-procedure catalogue shared by the server router and the client.
//!
//! Every procedure is reachable at `/rpc/<name>`. Queries are served over
//! `GET`, mutations over `POST` with a JSON body.

use std::fmt;

/// Whether a procedure reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    Query,
    Mutation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    Healthcheck,

    GetOfferings,
    CreateOffering,
    UpdateOffering,

    GetSolutions,
    CreateSolution,
    UpdateSolution,

    GetServices,
    CreateService,
    UpdateService,

    GetInsights,
    CreateInsight,
    UpdateInsight,

    GetCaseStudies,
    CreateCaseStudy,
    UpdateCaseStudy,

    GetLeadershipProfiles,
    CreateLeadershipProfile,
    UpdateLeadershipProfile,

    CreateContactSubmission,
    GetContactSubmissions,
}

impl Procedure {
    pub const ALL: [Procedure; 21] = [
        Procedure::Healthcheck,
        Procedure::GetOfferings,
        Procedure::CreateOffering,
        Procedure::UpdateOffering,
        Procedure::GetSolutions,
        Procedure::CreateSolution,
        Procedure::UpdateSolution,
        Procedure::GetServices,
        Procedure::CreateService,
        Procedure::UpdateService,
        Procedure::GetInsights,
        Procedure::CreateInsight,
        Procedure::UpdateInsight,
        Procedure::GetCaseStudies,
        Procedure::CreateCaseStudy,
        Procedure::UpdateCaseStudy,
        Procedure::GetLeadershipProfiles,
        Procedure::CreateLeadershipProfile,
        Procedure::UpdateLeadershipProfile,
        Procedure::CreateContactSubmission,
        Procedure::GetContactSubmissions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Procedure::Healthcheck => "healthcheck",
            Procedure::GetOfferings => "getOfferings",
            Procedure::CreateOffering => "createOffering",
            Procedure::UpdateOffering => "updateOffering",
            Procedure::GetSolutions => "getSolutions",
            Procedure::CreateSolution => "createSolution",
            Procedure::UpdateSolution => "updateSolution",
            Procedure::GetServices => "getServices",
            Procedure::CreateService => "createService",
            Procedure::UpdateService => "updateService",
            Procedure::GetInsights => "getInsights",
            Procedure::CreateInsight => "createInsight",
            Procedure::UpdateInsight => "updateInsight",
            Procedure::GetCaseStudies => "getCaseStudies",
            Procedure::CreateCaseStudy => "createCaseStudy",
            Procedure::UpdateCaseStudy => "updateCaseStudy",
            Procedure::GetLeadershipProfiles => "getLeadershipProfiles",
            Procedure::CreateLeadershipProfile => "createLeadershipProfile",
            Procedure::UpdateLeadershipProfile => "updateLeadershipProfile",
            Procedure::CreateContactSubmission => "createContactSubmission",
            Procedure::GetContactSubmissions => "getContactSubmissions",
        }
    }

    /// Route path; axum needs a `'static` string so these are spelled out.
    pub fn path(self) -> &'static str {
        match self {
            Procedure::Healthcheck => "/rpc/healthcheck",
            Procedure::GetOfferings => "/rpc/getOfferings",
            Procedure::CreateOffering => "/rpc/createOffering",
            Procedure::UpdateOffering => "/rpc/updateOffering",
            Procedure::GetSolutions => "/rpc/getSolutions",
            Procedure::CreateSolution => "/rpc/createSolution",
            Procedure::UpdateSolution => "/rpc/updateSolution",
            Procedure::GetServices => "/rpc/getServices",
            Procedure::CreateService => "/rpc/createService",
            Procedure::UpdateService => "/rpc/updateService",
            Procedure::GetInsights => "/rpc/getInsights",
            Procedure::CreateInsight => "/rpc/createInsight",
            Procedure::UpdateInsight => "/rpc/updateInsight",
            Procedure::GetCaseStudies => "/rpc/getCaseStudies",
            Procedure::CreateCaseStudy => "/rpc/createCaseStudy",
            Procedure::UpdateCaseStudy => "/rpc/updateCaseStudy",
            Procedure::GetLeadershipProfiles => "/rpc/getLeadershipProfiles",
            Procedure::CreateLeadershipProfile => "/rpc/createLeadershipProfile",
            Procedure::UpdateLeadershipProfile => "/rpc/updateLeadershipProfile",
            Procedure::CreateContactSubmission => "/rpc/createContactSubmission",
            Procedure::GetContactSubmissions => "/rpc/getContactSubmissions",
        }
    }

    pub fn kind(self) -> ProcedureKind {
        match self {
            Procedure::Healthcheck
            | Procedure::GetOfferings
            | Procedure::GetSolutions
            | Procedure::GetServices
            | Procedure::GetInsights
            | Procedure::GetCaseStudies
            | Procedure::GetLeadershipProfiles
            | Procedure::GetContactSubmissions => ProcedureKind::Query,
            _ => ProcedureKind::Mutation,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
