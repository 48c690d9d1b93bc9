use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use educe::Educe;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};

#[serde_as]
#[derive(Debug, Serialize, Deserialize, Educe)]
#[educe(Default)]
pub struct Server {
    #[educe(Default(expression = [127u8, 0u8, 0u8, 1u8].into()))]
    pub host: IpAddr,
    #[educe(Default = 3000)]
    pub port: u16,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[educe(Default(expression = Duration::from_secs(30)))]
    pub request_timeout: Duration,
}

impl Server {
    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
