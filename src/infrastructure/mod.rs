pub mod binance;
pub mod bithumb;
pub mod core;
pub mod factory;
pub mod mock;
pub mod sink;
pub mod upbit;

pub use factory::{ListingSources, SourceFactory};
pub use sink::create_sink;
