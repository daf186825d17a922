/// Asserts that the blob with the given id is alive and holds exactly `energy`.
#[macro_export]
macro_rules! assert_blob_energy {
    ($world:expr, $id:expr, $energy:expr) => {
        let blob = $world.get_blob($id).expect("Blob not found in world");
        assert_eq!(
            blob.energy, $energy,
            "Blob {} energy {} is not {}",
            $id, blob.energy, $energy
        );
    };
}

/// Asserts that the blob with the given id is no longer in the world.
#[macro_export]
macro_rules! assert_blob_dead {
    ($world:expr, $id:expr) => {
        assert!(
            $world.get_blob($id).is_none(),
            "Blob {} should be dead but was found alive",
            $id
        );
    };
}

/// Asserts that the live blob count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!($world.blobs().len(), $count, "Population count mismatch");
    };
}

/// Asserts that no two live entities share an identifier.
#[macro_export]
macro_rules! assert_unique_ids {
    ($world:expr) => {
        let mut ids: Vec<u64> = $world
            .blobs()
            .iter()
            .map(|b| b.id.0)
            .chain($world.food().iter().map(|f| f.id.0))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total, "Duplicate entity identifiers");
    };
}
