//! 아이덴티티 리포지토리 모듈

pub mod identity_repo;

pub use identity_repo::{IdentityRepository, InMemoryIdentityRepository};
