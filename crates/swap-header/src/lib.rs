//! swap-header crate
//!
//! Page header of the StreetSwap exchange: network badge, account balance,
//! navigation links and the styling rules around them, derived from a
//! snapshot of externally owned wallet state.

pub mod amount;
pub mod chain;
pub mod config;
pub mod nav;
pub mod providers;
pub mod style;
pub mod types;
pub mod view;

pub use amount::NativeAmount;
pub use chain::ChainId;
pub use config::HeaderConfig;
pub use providers::HeaderContext;
pub use types::{ActiveConnection, HeaderSnapshot};
pub use view::{render_header, HeaderView};
