//! `certtrack-storage`
//!
//! **Responsibility:** persistence of certifications, users and the login
//! session in a local string-keyed key-value store.
//!
//! Every collection is one JSON blob under a fixed key and is always read and
//! rewritten whole; there are no partial updates and no transactions.
//! Missing or unreadable blobs load as empty.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod certifications;
pub mod collection;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod key_value;
pub mod records;
pub mod session;
pub mod users;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserLocalStorage;
pub use certifications::CertificationRepository;
pub use collection::{CollectionStore, keys};
pub use error::StorageError;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileKeyValueStore;
pub use key_value::{InMemoryKeyValueStore, KeyValueStore};
pub use session::SessionRepository;
pub use users::UserRepository;
