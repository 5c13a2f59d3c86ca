//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 대소문자 무시 비교
//! - [`path_matcher`] - Ant 스타일 경로 패턴 매칭
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::path_matcher;
//! use crate::utils::string_utils::is_blank;
//!
//! assert!(path_matcher::matches("/auth/sms/*", "/auth/sms/login"));
//! assert!(is_blank(Some("  ")));
//! ```

pub mod path_matcher;
pub mod string_utils;
