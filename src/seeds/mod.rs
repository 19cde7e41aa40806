pub mod users_seed;

pub use users_seed::*;
