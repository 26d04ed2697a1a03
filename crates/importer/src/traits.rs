use crate::Result;
use storage::{Repositories, dto::fixture::ImportSummary};
use uuid::Uuid;

pub struct ImportContext {
    pub repos: Repositories,
    pub league_id: Uuid,
}

#[async_trait::async_trait]
pub trait LeagueImporter: Send + Sync {
    async fn import(&self, identifier: &str, context: &ImportContext) -> Result<ImportSummary>;
}
