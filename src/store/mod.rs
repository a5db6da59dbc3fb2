//! Session-scoped submission storage
//!
//! [`SubmissionStore`] keeps the members registered during this session on
//! top of a [`SessionStorage`] backend. Nothing here survives the session.

mod storage;
mod submissions;

pub use storage::{FileSessionStorage, MemoryStorage, SessionStorage};
pub use submissions::{StoreError, Submission, SubmissionStore};

#[cfg(test)]
pub use storage::{MockSessionStorage, StorageError};
