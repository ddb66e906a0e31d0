use anyhow::{anyhow, bail};
use todo_core::TodoError;

/// Translate a 1-based item number typed by the user into a list position.
pub fn to_position(number: i64) -> anyhow::Result<usize> {
    if number < 1 {
        bail!("item number must be greater than 0");
    }
    usize::try_from(number - 1).map_err(|_| anyhow!("item number {number} is too large"))
}

/// Rephrase a core error in terms of the 1-based number the user typed.
pub fn explain(error: TodoError, number: i64) -> anyhow::Error {
    match error {
        TodoError::IndexOutOfRange { len: 0, .. } => {
            anyhow!("item #{number} does not exist (the todo list is empty)")
        }
        TodoError::IndexOutOfRange { len, .. } => {
            anyhow!("item #{number} does not exist (valid items: 1-{len})")
        }
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(10, 9)]
    fn converts_to_zero_based(#[case] number: i64, #[case] expected: usize) {
        assert_eq!(to_position(number).unwrap(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn rejects_non_positive(#[case] number: i64) {
        let err = to_position(number).unwrap_err();
        assert_eq!(err.to_string(), "item number must be greater than 0");
    }

    #[test]
    fn explains_range_in_user_numbers() {
        let err = explain(TodoError::IndexOutOfRange { index: 4, len: 2 }, 5);
        assert_eq!(err.to_string(), "item #5 does not exist (valid items: 1-2)");

        let err = explain(TodoError::IndexOutOfRange { index: 0, len: 0 }, 1);
        assert_eq!(
            err.to_string(),
            "item #1 does not exist (the todo list is empty)"
        );
    }

    #[test]
    fn other_errors_pass_through() {
        let err = explain(TodoError::EmptyText, 1);
        assert_eq!(err.to_string(), "task text cannot be empty");
    }
}
