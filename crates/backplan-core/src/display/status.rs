//! Short confirmation messages for operations without a resource to show.

use std::fmt;

/// One-line outcome of an operation such as cancelling a bake.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Bake of recipe 1 cancelled".to_string());
        assert_eq!(
            format!("{success}"),
            "Success: Bake of recipe 1 cancelled\n"
        );

        let failure = OperationStatus::failure("Nothing to cancel".to_string());
        assert!(format!("{failure}").starts_with("Error:"));
    }
}
