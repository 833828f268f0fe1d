mod project;

pub use project::ProjectPoints;
