//! # Repository Module
//!
//! Database access behind typed methods. SQL stays in this module.
//!
//! ```text
//! AdminState::persist
//!       │  db.snapshots().save("store", &snapshot)
//!       ▼
//! SnapshotRepository
//! ├── put / get / delete / keys      (raw text values)
//! └── save / load                    (serde_json on top)
//!       │
//!       ▼
//! kv_store table
//! ```
//!
//! ## Available Repositories
//!
//! - [`snapshot::SnapshotRepository`] - Key-value blobs

pub mod snapshot;
