mod compare;
pub use compare::{Compare, CompareOp};

mod condition;
pub use condition::Condition;

mod eval;

mod like;
pub use like::{Like, MatchMode, ESCAPE_CHAR};

mod record;
pub use record::Record;

mod value;
pub use value::Value;
