//! Remote procedures: one generic handler per operation shape, routed from
//! the shared [`Procedure`] catalogue.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{any, get, post, MethodRouter};
use axum::{Json, Router};
use common::rpc::{Procedure, ProcedureKind};
use common::types::Health;
use service::resource::{
    CaseStudy, ContactSubmission, Editable, Insight, LeadershipProfile, Offering, Resource, Service, Solution,
};
use service::{ContentServices, Provides};

use crate::errors::JsonApiError;
use crate::state::ServerState;
use tracing::warn;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// 列出某类资源的全部记录
pub async fn list<R>(State(state): State<ServerState>) -> Result<Json<Vec<R>>, JsonApiError>
where
    R: Resource,
    ContentServices: Provides<R>,
{
    let records = <ContentServices as Provides<R>>::collection(&state.services).list().await?;
    Ok(Json(records))
}

/// 创建记录；请求体解析失败按校验错误返回
pub async fn create<R>(
    State(state): State<ServerState>,
    payload: Result<Json<R::CreateInput>, JsonRejection>,
) -> Result<Json<R>, JsonApiError>
where
    R: Resource,
    ContentServices: Provides<R>,
{
    let Json(input) = payload?;
    let created = <ContentServices as Provides<R>>::collection(&state.services).create(input).await?;
    Ok(Json(created))
}

/// 局部更新记录
pub async fn update<R>(
    State(state): State<ServerState>,
    payload: Result<Json<R::UpdateInput>, JsonRejection>,
) -> Result<Json<R>, JsonApiError>
where
    R: Editable,
    ContentServices: Provides<R>,
{
    let Json(input) = payload?;
    let updated = <ContentServices as Provides<R>>::collection(&state.services).update(input).await?;
    Ok(Json(updated))
}

fn handler(procedure: Procedure) -> MethodRouter<ServerState> {
    match procedure {
        Procedure::Healthcheck => get(health),

        Procedure::GetOfferings => get(list::<Offering>),
        Procedure::CreateOffering => post(create::<Offering>),
        Procedure::UpdateOffering => post(update::<Offering>),

        Procedure::GetSolutions => get(list::<Solution>),
        Procedure::CreateSolution => post(create::<Solution>),
        Procedure::UpdateSolution => post(update::<Solution>),

        Procedure::GetServices => get(list::<Service>),
        Procedure::CreateService => post(create::<Service>),
        Procedure::UpdateService => post(update::<Service>),

        Procedure::GetInsights => get(list::<Insight>),
        Procedure::CreateInsight => post(create::<Insight>),
        Procedure::UpdateInsight => post(update::<Insight>),

        Procedure::GetCaseStudies => get(list::<CaseStudy>),
        Procedure::CreateCaseStudy => post(create::<CaseStudy>),
        Procedure::UpdateCaseStudy => post(update::<CaseStudy>),

        Procedure::GetLeadershipProfiles => get(list::<LeadershipProfile>),
        Procedure::CreateLeadershipProfile => post(create::<LeadershipProfile>),
        Procedure::UpdateLeadershipProfile => post(update::<LeadershipProfile>),

        Procedure::CreateContactSubmission => post(create::<ContactSubmission>),
        Procedure::GetContactSubmissions => get(list::<ContactSubmission>),
    }
}

/// `/rpc/<name>` requests that no catalogue route answered.
pub async fn unknown(Path(name): Path<String>) -> JsonApiError {
    match Procedure::from_name(&name) {
        Some(procedure) => {
            let method = match procedure.kind() {
                ProcedureKind::Query => "GET",
                ProcedureKind::Mutation => "POST",
            };
            JsonApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed", Some(format!("{procedure} expects {method}")))
        }
        None => {
            warn!(procedure = %name, "unknown_procedure");
            JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("unknown procedure {name}")))
        }
    }
}

/// Every procedure at `/rpc/<name>`; other names get a JSON 404 instead of the page.
pub fn router() -> Router<ServerState> {
    Procedure::ALL
        .into_iter()
        .fold(Router::new(), |router, procedure| router.route(procedure.path(), handler(procedure)))
        .route("/rpc/:name", any(unknown))
}
