/// Recommended error type for a scenario `main` function. This type is
/// compatible with the harness and page-object results so you can use `?` to
/// propagate errors.
pub type CartwheelResult<T> = anyhow::Result<T>;
