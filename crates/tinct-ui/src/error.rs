use thiserror::Error;

/// Errors reported synchronously by the picker widgets.
///
/// Every variant is a local precondition violation; there is nothing to
/// retry and no state is changed when one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    /// A hue outside `[0, 360)` (or NaN) was passed to `HueBar::set_hue`.
    #[error("hue {0} is outside [0, 360)")]
    InvalidHue(f32),

    /// A [`PickerConfig`](crate::config::PickerConfig) field is unusable.
    #[error("invalid picker config: {0}")]
    InvalidConfig(String),
}
