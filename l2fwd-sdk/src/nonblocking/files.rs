use crate::files::{Plan, ReadError};
use std::{future::Future, path::Path};

pub trait PlanExt {
    /// Reads a [`Plan`] from the given path.
    fn read_from<P: AsRef<Path> + Send>(
        path: P,
    ) -> impl Future<Output = Result<Plan, ReadError>> + Send;
}
impl PlanExt for Plan {
    async fn read_from<P: AsRef<Path> + Send>(path: P) -> Result<Plan, ReadError> {
        Self::from_toml_str(&tokio::fs::read_to_string(path).await?)
    }
}
