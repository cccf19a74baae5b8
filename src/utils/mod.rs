//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리 및 이름 분리 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::split_display_name;
//!
//! let (first, sur) = split_display_name(Some("Chisom Nwisu"));
//! ```

pub mod string_utils;
