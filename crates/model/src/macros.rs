#[macro_export]
macro_rules! table {
    ($name:expr) => {
        $crate::table::Table::new($name)
    };
    ($schema:expr, $name:expr) => {
        $crate::table::Table::new($name).with_schema($schema)
    };
}

#[macro_export]
macro_rules! cond {
    ($left:expr, $op:expr, $value:expr) => {
        $crate::expr::Expression::simple($left, $op, $value, $crate::expr::Connector::None)
    };
    ($left:expr, $op:expr, $value:expr, $conn:expr) => {
        $crate::expr::Expression::simple($left, $op, $value, $conn)
    };
}
