#![no_std]

mod adapter;
mod allowance;
mod constants;
mod contract;
mod errors;
mod events;
mod executor;
mod fee;
mod interface;
mod storage;
mod test;
mod test_permissions;
mod testutils;
mod types;

pub use crate::adapter::echo::{EchoRouter, EchoRouterClient};
pub use crate::adapter::horizon::{ExactInputSingleParams, HorizonRouter, HorizonRouterClient};
pub use crate::adapter::leetswap::{LeetRoute, LeetSwapRouter, LeetSwapRouterClient};
pub use crate::adapter::sync::{SyncRouter, SyncRouterClient, SyncSwapPath, SyncSwapStep};
pub use crate::contract::{SwapAggregator, SwapAggregatorClient};
pub use crate::errors::Error;
pub use crate::types::{ExecutionReport, RouterConfig, RouterKind, SwapStep};
