pub mod policy;
pub mod transitions;

pub use policy::role_can_initiate;
pub use transitions::{is_transition_allowed, next_states_for, TransitionTable, TRANSITIONS};
