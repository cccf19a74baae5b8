//! 아이덴티티 연동 모듈
//!
//! 검증된 외부 프로필을 로컬 사용자 계정에 연결하는 결정 절차를
//! 제공합니다.

pub mod identity_linker;

pub use identity_linker::{IdentityLinker, LinkOutcome};
