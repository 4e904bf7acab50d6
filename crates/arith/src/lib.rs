//! Arithmetic and recursion demos: the pure functions and the report writers
//! behind the `fibonacci`, `math` and `array` programs.

pub mod arithmetic;
pub mod array;
pub mod errors;
pub mod fibonacci;
pub mod report;

pub use arithmetic::{
    add, checked_add, checked_factorial, checked_multiply, factorial, multiply, to_index,
};
pub use array::{checked_sum, format_array, sum};
pub use errors::DemoError;
pub use fibonacci::{checked_fibonacci, fibonacci, fibonacci_iter};

/// Last index printed by the Fibonacci demo.
pub const FIB_BOUND: u32 = 10;

/// Operands of the math demo.
pub const MATH_X: i32 = 5;
pub const MATH_Y: i32 = 3;

pub const ARRAY_VALUES: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
