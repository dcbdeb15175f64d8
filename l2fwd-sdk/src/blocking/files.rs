use crate::files::{Plan, ReadError};
use std::path::Path;

pub trait PlanExt {
    /// Reads a [`Plan`] from the given path.
    fn read_from_blocking<P: AsRef<Path>>(path: P) -> Result<Plan, ReadError>;
}
impl PlanExt for Plan {
    fn read_from_blocking<P: AsRef<Path>>(path: P) -> Result<Plan, ReadError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::plan::Step;

    #[test]
    fn read_from_blocking() {
        let path = std::env::temp_dir().join(format!("l2fwd-sdk.plan.{}.toml", std::process::id()));
        std::fs::write(&path, "[[step]]\nmethod = \"mrvl_l2fwd_clear_fwd_table\"\n").unwrap();
        let plan = Plan::read_from_blocking(&path).unwrap();
        _ = std::fs::remove_file(&path);
        assert_eq!(
            plan.steps,
            vec![Step::Call {
                method: "mrvl_l2fwd_clear_fwd_table".into(),
                params: None
            }]
        );

        assert!(matches!(Plan::read_from_blocking(&path), Err(ReadError::Io(_))));
    }
}
