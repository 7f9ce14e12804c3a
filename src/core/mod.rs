pub mod deletion;
pub mod github;
pub mod model;
pub mod remote;
pub mod report;
pub mod selection;
pub mod staleness;
