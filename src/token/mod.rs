pub mod compact;
mod header;
#[allow(clippy::module_inception)]
mod token;

pub use header::Header;
pub use token::Token;

pub(crate) use header::ALG_NONE;
