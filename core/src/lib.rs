#![no_std]

extern crate alloc;

pub use board::*;
pub use builder::*;
pub use config::*;
pub use error::*;
pub use reveal::*;
pub use sampler::*;
pub use selector::*;
pub use service::*;
pub use session::*;
pub use types::*;

mod board;
mod builder;
mod config;
mod error;
mod reveal;
mod sampler;
mod selector;
mod service;
mod session;
mod types;
