mod session;

pub use session::{SearchOutcome, SearchTicket, Session};
