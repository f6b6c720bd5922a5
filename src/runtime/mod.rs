pub mod dispatcher;
pub mod outcome;
pub mod session;
pub mod value;

pub use dispatcher::{MockBehavior, MockDispatcher, MockKey, PROPERTY_VERIFICATION};
pub use outcome::{Outcome, PropertyRecord, Response, ERR_UNKNOWN_OPERATION};
pub use session::{SessionContext, DEFAULT_BLOCK_HEIGHT, DEFAULT_SENDER};
pub use value::ClarityValue;
