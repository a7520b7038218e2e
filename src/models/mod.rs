pub mod api;
mod counsellor;
mod helpline;
mod message;
mod post;
mod resource;

pub use counsellor::{Counsellor, SessionType};
pub use helpline::{dial_digits, Helpline, Urgency};
pub use message::*;
pub use post::*;
pub use resource::{Resource, ResourceKind};
