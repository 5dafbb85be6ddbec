pub mod constants;
pub mod invitation_urls;
pub mod storage;

pub use constants::*;
pub use invitation_urls::*;
