//! # dyndns-update
//!
//! Push the caller's public IP address to a dynamic DNS service.
//!
//! ## Services
//!
//! - dyndns.it (`*.homepc.it`), HTTP basic auth
//! - dynv6.com (`*.dynv6.net`, `*.v6.rocks`, ...), HTTP token, IPv4 + IPv6
//!
//! ## Usage
//!
//! ```bash
//! # dyndns.it
//! dyndns-update -h myhost.homepc.it -u user -p password
//!
//! # dynv6.com, or any hostname when a token is given
//! dyndns-update -h myhost.dynv6.net -t token
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod options;
pub mod providers;
pub mod service;
pub mod update;

pub use config::Config;
pub use detector::IpDetector;
pub use error::{DdnsError, Result};
pub use options::Options;
pub use service::Service;
pub use update::run;
