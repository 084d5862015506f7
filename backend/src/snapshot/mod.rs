mod store;

pub use store::SnapshotStore;
