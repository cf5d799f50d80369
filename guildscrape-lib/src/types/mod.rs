#![allow(unreachable_pub)]

mod character;
mod error;
mod guild;
mod options;
mod regional_info;

pub use character::{BossKills, Character, Difficulty, RaidProgress};
pub use error::ErrorKind;
pub use guild::Guild;
pub use options::FetchOptions;
pub use regional_info::{IdKind, RegionalInfo};

/// The guildscrape `Result` type
pub type Result<T> = std::result::Result<T, crate::ErrorKind>;
