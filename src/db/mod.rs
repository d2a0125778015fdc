//! Database layer (Firestore, with an in-memory backend for offline use).

pub mod firestore;
pub mod memory;

pub use firestore::ProfileStore;
pub use memory::MemoryDocs;

/// Collection names as constants.
pub mod collections {
    /// One profile document per user, keyed by uid
    pub const USER_PROFILES: &str = "userProfiles";
    /// Sub-collection of `userProfiles/{uid}` holding diary entries
    pub const FOOD_LIST: &str = "foodList";
}

/// Document path of a user's profile.
pub fn profile_path(uid: &str) -> String {
    format!("/{}/{}", collections::USER_PROFILES, uid)
}

/// Collection path of a user's food diary.
pub fn food_list_path(uid: &str) -> String {
    format!("{}/{}", profile_path(uid), collections::FOOD_LIST)
}
