pub mod enrichment;

/// Source of the metadata stored alongside a newly added song.
#[async_trait::async_trait]
pub trait Informant: Send + Sync {
    async fn info(&self, group: &str, song: &str) -> Result<enrichment::Info, crate::Error>;
}
