use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;

/// Addressing/session metadata previously observed for a peer, replayed in
/// front of every datagram forwarded on that peer's behalf.
pub type HeaderRecord = Bytes;

/// Read-only view of the store mapping peer addresses to header records.
///
/// The store itself (population, eviction, TTL) is owned by the surrounding
/// system; the datagram relay only consults it.
pub trait RequestRegistry: Send + Sync {
    fn lookup(&self, addr: SocketAddr) -> Option<HeaderRecord>;
}

/// Builds header bytes for a peer the registry has no record of.
pub trait AddressHeaderBuilder: Send + Sync {
    fn build(&self, addr: SocketAddr) -> Bytes;
}

impl<F> AddressHeaderBuilder for F
where
    F: Fn(SocketAddr) -> Bytes + Send + Sync,
{
    fn build(&self, addr: SocketAddr) -> Bytes {
        self(addr)
    }
}

/// Concurrent peer-address to header-record map.
///
/// Cloning yields another handle to the same map.
#[derive(Clone, Default)]
pub struct PeerHeaderMap {
    map: Arc<DashMap<SocketAddr, HeaderRecord>>,
}

impl PeerHeaderMap {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn insert(&self, addr: SocketAddr, record: HeaderRecord) {
        self.map.insert(addr, record);
    }
    pub fn remove(&self, addr: SocketAddr) {
        self.map.remove(&addr);
    }
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl RequestRegistry for PeerHeaderMap {
    fn lookup(&self, addr: SocketAddr) -> Option<HeaderRecord> {
        self.map.get(&addr).map(|record| record.clone())
    }
}
