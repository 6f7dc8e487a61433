// src/domain/common/network.rs
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr},
};

/// Address of the client that issued a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientAddress(IpAddr);

impl ClientAddress {
    pub const UNKNOWN: Self = Self(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    pub fn new(ip: IpAddr) -> Self {
        Self(ip)
    }

    /// The first hop of `X-Forwarded-For` wins over the socket address when it parses.
    pub fn resolve(forwarded_for: Option<&str>, remote: Option<IpAddr>) -> Self {
        forwarded_for
            .and_then(|header| header.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok())
            .or(remote)
            .map_or(Self::UNKNOWN, Self)
    }

    pub fn ip(&self) -> IpAddr {
        self.0
    }
}

impl fmt::Display for ClientAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
