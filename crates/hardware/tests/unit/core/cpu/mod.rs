/// Fetch, dispatch, and PC commit.
pub mod execution;
