pub mod header;
pub mod menu;
pub mod nav;
pub mod settings;
pub mod web3_status;
