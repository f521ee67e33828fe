mod builder;
pub use builder::Builder;

mod column;
pub use column::Column;

mod field;
pub use field::Field;

mod field_kind;
pub use field_kind::{FieldKind, FieldKindTag};

mod model;
pub use model::Model;

mod verify;
