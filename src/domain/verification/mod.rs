//! 인증 코드 도메인 모델
//!
//! - [`CodeKind`] - 코드 종류 (이미지 / SMS)
//! - [`VerificationCode`] - 발급된 코드와 만료 시각
//! - [`EndpointTable`] - 코드를 요구하는 경로 패턴 목록
//! - [`CodeRequest`] - 게이트가 요청에서 읽는 최소 인터페이스
//!
//! 코드 하나의 생명주기 (세션, 종류 단위):
//!
//! ```text
//! Unset ──발급──▶ Issued ──검증 성공──▶ Consumed (삭제)
//!                   │
//!                   └──만료 감지──▶ Expired (삭제)
//! ```

pub mod code_kind;
pub mod code_request;
pub mod protected_endpoint;
pub mod verification_code;

pub use code_kind::CodeKind;
pub use code_request::{CodeRequest, GateRequest};
pub use protected_endpoint::{EndpointTable, EndpointTableBuilder, ProtectedEndpoint};
pub use verification_code::VerificationCode;
