pub mod snapshot;

pub use snapshot::DocumentSnapshot;
