// Entity Models
//
// One entity kind lives here: the registry user, with its VIP
// classification and the construction-time balance invariant.

pub mod user;

pub use user::{InvalidBalanceError, User, UserKind};
