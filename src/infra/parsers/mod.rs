//! Parsers for the release files and command output a host exposes.
//!
//! Every parser is total: malformed content yields empty fields, never an error.

mod arch_release;
mod debian_version;
mod key_value;
mod lsb_release;
mod lsb_release_output;
mod os_release;
mod redhat_release;
mod suse_release;

pub use arch_release::parse_arch_release;
pub use debian_version::parse_debian_version;
pub use lsb_release::parse_lsb_release;
pub use lsb_release_output::parse_lsb_release_output;
pub use os_release::parse_os_release;
pub use redhat_release::parse_redhat_release;
pub use suse_release::parse_suse_release;
