// Re-export the attribute macro
pub use argoflow_macros::workflow_script;

pub mod encoding;
pub mod error;
pub mod invocation;
pub mod naming;
pub mod resources;
pub mod script;
pub mod values;

pub use encoding::{decode_base64, encode_base64};
pub use error::{Error, Result};
pub use invocation::{EntryPointPolicy, Frame, InvocationStack, SourceLocation};
pub use naming::{argo_safe_name, unique_step_name};
pub use resources::gpu_requested;
pub use script::{body, Script};
pub use values::non_empty;
