//! Shared Kernel
//!
//! Vocabulary shared by every crate in the offer backend:
//! - The unified error type (`AppError`), its classification (`ErrorKind`)
//!   and the `AppResult` alias
//! - Typed record IDs
//!
//! Only things whose meaning is stable across contexts belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
