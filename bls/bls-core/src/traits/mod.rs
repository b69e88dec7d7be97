mod engine;
mod public_key;
mod secret_key;
mod signature;

pub use engine::*;
pub use public_key::*;
pub use secret_key::*;
pub use signature::*;
