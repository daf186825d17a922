pub mod config {
    pub use blobworld_core::config::*;
}
pub mod geometry {
    pub use blobworld_core::geometry::*;
}
pub mod history {
    pub use blobworld_core::history::*;
}
pub mod lifecycle {
    pub use blobworld_core::lifecycle::*;
}
pub mod metrics {
    pub use blobworld_core::metrics::*;
}
pub mod registry {
    pub use blobworld_core::registry::*;
}
pub mod sampler {
    pub use blobworld_core::sampler::*;
}
pub mod snapshot {
    pub use blobworld_core::snapshot::*;
}
pub mod systems {
    pub use blobworld_core::systems::*;
}
pub mod data {
    pub use blobworld_data::*;
}

pub mod world;
