mod distribution_record;
mod family;
mod probe_source;

pub use distribution_record::{Distribution, DistributionBuilder};
pub use family::{Family, UnknownFamilyError, classify};
pub use probe_source::ProbeSource;
