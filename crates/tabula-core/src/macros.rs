/// Builds a [`Record`](crate::stmt::Record) from `column => value` pairs.
///
/// ```
/// let client = tabula_core::record! { "id" => 42, "notes" => "prefers email" };
/// assert_eq!(client.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::stmt::Record::new()
    };
    ( $( $column:expr => $value:expr ),+ $(,)? ) => {{
        let mut record = $crate::stmt::Record::new();
        $(
            record.set($column, $value);
        )+
        record
    }};
}
