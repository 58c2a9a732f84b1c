//! Configuration errors.

use thiserror::Error;
use waterui_str::Str;

/// Why a registration or instantiation request was refused.
///
/// These are caller mistakes and always surface as `Err`. Failures inside
/// user code (a panicking render path, style producer or lifecycle hook)
/// are not represented here; they propagate as panics.
#[derive(Debug, Clone, Error)]
pub enum DefineError {
    /// The tag name is already registered.
    #[error("component `{0}` is already registered")]
    Duplicate(Str),
    /// The tag name does not follow custom-element naming rules.
    #[error("`{0}` is not a valid component tag (expected a lowercase name containing `-`)")]
    InvalidName(Str),
    /// No definition is registered under the tag.
    #[error("no component registered under `{0}`")]
    Unknown(Str),
}
