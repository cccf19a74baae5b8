//! 외부 연동 레코드 엔티티 모듈

pub mod external_login;

pub use external_login::ExternalLogin;
