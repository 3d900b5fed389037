//! # Prelude — Re-exportações Convenientes
//!
//! Importação única para usar o estufa-core:
//!
//! ```
//! use estufa_core::prelude::*;
//! ```

pub use crate::error::{CoreError, CoreResult};
pub use crate::level::{Level, NUM_LEVELS};
pub use crate::shape::Shape;
