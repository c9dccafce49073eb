pub mod ai;
pub mod constants;
pub mod fighter;
pub mod init;
pub mod input;
pub mod projectiles;
pub mod step;
pub mod types;

pub use ai::{decide, DecisionDraws, ScriptedAi};
pub use constants::*;
pub use init::*;
pub use input::{intent_from_keys, KeyBindings, KeyStates};
pub use projectiles::{advance_projectiles, in_bounds, resolve_special_hits};
pub use step::step;
pub use types::*;
