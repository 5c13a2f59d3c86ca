//! 데이터 전송 객체 (DTO)
//!
//! HTTP 요청/응답의 계약을 정의합니다.

pub mod verification;

pub use verification::*;
