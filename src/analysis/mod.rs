//! Pure computations over loaded records.

pub mod aggregate;
pub mod density;

pub use aggregate::{aggregate_points, AggregatedRow};
pub use density::{density_extent, gaussian_kde, DensityPoint};
