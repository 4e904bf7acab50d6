use crate::errors::DemoError;

/// Sum of all values, wrapping on overflow. Empty slices sum to 0.
pub fn sum(values: &[i32]) -> i32 {
    values.iter().fold(0i32, |acc, &v| acc.wrapping_add(v))
}

pub fn checked_sum(values: &[i32]) -> Result<i32, DemoError> {
    values
        .iter()
        .try_fold(0i32, |acc, &v| acc.checked_add(v))
        .ok_or(DemoError::overflow("sum"))
}

/// Renders values as `[1, 2, 3]`.
pub fn format_array(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
