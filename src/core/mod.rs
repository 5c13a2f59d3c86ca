//! # Core Framework Module
//!
//! 게이트 서비스 전체가 공유하는 프레임워크 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: Spring의 ApplicationContext 역할
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **VerificationError**: 인증 코드 게이트의 거부 사유
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Component` 스캔 | `inventory::submit!` |
//! | `@ExceptionHandler` | `ResponseError::error_response()` |

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
