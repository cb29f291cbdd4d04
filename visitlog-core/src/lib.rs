pub mod batch;
pub mod cli;
pub mod conf;
pub mod filter;
pub mod import;
pub mod ledger;
pub mod logging;
pub mod model;
pub mod parse;
pub mod registry;
pub mod source;
pub mod store;
