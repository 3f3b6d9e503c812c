//! Service adapters: OS/runtime specific implementations (IO/channels).

pub mod config;
pub mod paths;
pub mod rpc;

pub use config::{ensure_config_file, get_config_path, load_config, ConfigService};
pub use paths::{ensure_log_dir, get_cache_dir, get_log_dir};
pub use rpc::{rpc_channel, ChannelRpcSink, RpcReceiver};
