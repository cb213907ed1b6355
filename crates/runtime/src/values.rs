mod value_errors;

pub use value_errors::ValueError;

// Booleans only exist as 0 / 1, there is no other kind of value at runtime
pub type Value = i64;

pub fn from_bool(b: bool) -> Value {
    if b {
        1
    } else {
        0
    }
}

// Any non zero value is true
pub fn is_truthy(value: Value) -> bool {
    value != 0
}
