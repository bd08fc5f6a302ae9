use std::time::Duration;

use common::rpc::{Procedure, ProcedureKind};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::errors::{ApiErrorBody, ClientError};

fn kind_name(kind: ProcedureKind) -> &'static str {
    match kind {
        ProcedureKind::Query => "query",
        ProcedureKind::Mutation => "mutation",
    }
}

/// Calls `/rpc/<procedure>` on one server.
#[derive(Clone, Debug)]
pub struct RpcClient {
    base_url: String,
    http: Client,
}

impl RpcClient {
    /// `timeout` bounds each request; `None` leaves reqwest's default (no limit).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder.build().map_err(|e| ClientError::Config(format!("failed to create HTTP client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    pub async fn query<T: DeserializeOwned>(&self, procedure: Procedure) -> Result<T, ClientError> {
        expect_kind(procedure, ProcedureKind::Query)?;
        debug!(%procedure, "rpc query");
        let resp = self.http.get(self.url(procedure)).send().await?;
        decode(resp).await
    }

    pub async fn mutate<I, T>(&self, procedure: Procedure, input: &I) -> Result<T, ClientError>
    where
        I: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        expect_kind(procedure, ProcedureKind::Mutation)?;
        debug!(%procedure, "rpc mutation");
        let resp = self.http.post(self.url(procedure)).json(input).send().await?;
        decode(resp).await
    }

    fn url(&self, procedure: Procedure) -> String {
        format!("{}{}", self.base_url, procedure.path())
    }
}

fn expect_kind(procedure: Procedure, actual: ProcedureKind) -> Result<(), ClientError> {
    if procedure.kind() != actual {
        return Err(ClientError::WrongKind {
            procedure: procedure.name(),
            expected: kind_name(procedure.kind()),
            actual: kind_name(actual),
        });
    }
    Ok(())
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return resp.json::<T>().await.map_err(|e| ClientError::Parse(e.to_string()));
    }
    let text = resp.text().await?;
    Err(match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => ClientError::Api { status: status.as_u16(), error: body.error, detail: body.detail, field: body.field },
        Err(_) => ClientError::Api { status: status.as_u16(), error: text, detail: None, field: None },
    })
}
