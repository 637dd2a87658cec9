//! # relay-core - Bidirectional Data-Relay Engine
//!
//! `relay-core` shuttles bytes or datagrams between two already-established
//! transport endpoints until one side terminates, reclaiming resources
//! deterministically. It is the forwarding core of a proxy: connection
//! establishment, encryption, and the address-header wire format all live in
//! the surrounding system and are consumed here as trait objects.
//!
//! ## Architecture
//!
//! - [`endpoint`] - `StreamEndpoint` / `DatagramEndpoint` traits plus
//!   implementations over tokio TCP and UDP sockets
//! - [`relay`] - the relay loops: stream copy, datagram echo, datagram
//!   forwarding with per-peer header reconstruction
//! - [`buffer`] - bounded pool of fixed-size reusable buffers
//! - [`registry`] - per-peer header records consulted by the datagram relay
//! - [`config`] - relay configuration (buffer sizing, idle deadlines)
//! - [`error`] - terminal-condition taxonomy and classification helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use relay_core::config::RelayConfig;
//! use relay_core::endpoint::TcpStreamEndpoint;
//! use relay_core::relay::Relayer;
//!
//! # async fn example(client: tokio::net::TcpStream, target: tokio::net::TcpStream) {
//! let relayer = Relayer::new(RelayConfig::default()).unwrap();
//! let client = Arc::new(TcpStreamEndpoint::new(client));
//! let target = Arc::new(TcpStreamEndpoint::new(target));
//!
//! // A full-duplex session is two independent relay halves sharing the
//! // endpoint pair; either half closing an endpoint unblocks the other.
//! let up = {
//!     let (relayer, client, target) = (relayer.clone(), client.clone(), target.clone());
//!     tokio::spawn(async move { relayer.relay_stream(client.as_ref(), target.as_ref()).await })
//! };
//! let down =
//!     tokio::spawn(async move { relayer.relay_stream(target.as_ref(), client.as_ref()).await });
//! let _ = tokio::join!(up, down);
//! # }
//! ```
//!
//! ## Resource discipline
//!
//! Each relay invocation holds at most one pooled buffer, released on every
//! exit path. The pool never blocks: allocation falls back to a fresh buffer
//! on a miss, and returns into a full pool are discarded. Idle deadlines are
//! re-armed per read, so a bursty connection lives indefinitely while a
//! truly idle one is reclaimed within one window.
//!
//! ## Thread Safety
//!
//! [`Relayer`](relay::Relayer), [`BufferPool`](buffer::BufferPool) and
//! [`PeerHeaderMap`](registry::PeerHeaderMap) are cheap to clone and safe to
//! share across tasks. Relay loops log through the `log` facade and never
//! surface errors to the caller; termination is observed through endpoint
//! closure.

pub mod buffer;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod registry;
pub mod relay;

pub use buffer::{BufferPool, PooledBuf};
pub use config::RelayConfig;
pub use endpoint::{DatagramEndpoint, StreamEndpoint, TcpStreamEndpoint, UdpSocketEndpoint};
pub use error::RelayError;
pub use registry::{AddressHeaderBuilder, HeaderRecord, PeerHeaderMap, RequestRegistry};
pub use relay::Relayer;
