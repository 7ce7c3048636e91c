//! Ports - interfaces between the domain and its collaborators

mod collaborators;
mod repositories;

pub use collaborators::{MessageAuthorResolver, ResolveError};
pub use repositories::{ReactionRepository, RepoResult, StatsRepository};
