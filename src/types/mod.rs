//! Configuration value objects and their per-version field rules.

pub mod context;
pub mod discovery;
pub mod server;
pub mod settings;

pub use context::{ClusterServerOpts, ContextOpts, ContextType, GlobalServerOpts, Target};
pub use discovery::{LocalDiscoveryOpts, OciDiscoveryOpts, PluginDiscoveryOpts};
pub use server::{ManagementClusterOpts, ServerOpts, ServerType};
pub use settings::{ConfigMetadata, PatchStrategy};
