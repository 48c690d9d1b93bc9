use educe::Educe;
use serde::Deserialize;

#[derive(Deserialize, Educe)]
#[educe(Debug)]
pub struct Database {
    #[educe(Debug(ignore))]
    pub url: String,
    pub create_if_missing: bool,
}
