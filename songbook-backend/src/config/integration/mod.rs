use std::time::Duration;

use educe::Educe;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};

/// External metadata service queried when a song is added.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, Educe)]
#[educe(Default)]
pub struct Enrichment {
    #[educe(Default(expression = "http://localhost:8081".into()))]
    pub url: String,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[educe(Default(expression = Duration::from_secs(10)))]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Integration {
    pub enrichment: Enrichment,
}
