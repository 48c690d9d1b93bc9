use concat_string::concat_string;
use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Serialize, Deserialize, Educe)]
#[educe(Default)]
pub struct Log {
    /// Level for this crate and the HTTP layer. `RUST_LOG` takes precedence when set.
    #[educe(Default(expression = "info".into()))]
    pub level: String,
    #[educe(Default(expression = true))]
    pub time: bool,
    pub format: Format,
}

impl Log {
    pub fn directives(&self) -> String {
        concat_string!(env!("CARGO_CRATE_NAME"), "=", &self.level, ",tower_http=", &self.level)
    }
}
