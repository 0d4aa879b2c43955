pub mod upstox;
pub mod upstox_dto;
pub mod utils;

pub use upstox::UpstoxApi;
pub use upstox_dto::{UpstoxHoldingDto, UpstoxResponseDto};
