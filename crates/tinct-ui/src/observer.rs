//! Single-subscriber callback capabilities.
//!
//! Each widget holds at most one observer (`Option<Box<dyn …>>`); setting a
//! new one replaces the old. Closures taking a [`Color`] implement the
//! single-method traits directly:
//!
//! ```rust,ignore
//! area.set_color_observer(Some(Box::new(|c: Color| println!("picked {c}"))));
//! ```

use tinct_engine::paint::Color;

/// Receives the pure hue color a [`HueBar`](crate::widgets::hue_bar::HueBar) resolved.
pub trait HueObserver {
    fn on_hue_changed(&mut self, color: Color);
}

/// Receives the color a [`ColorAreaPicker`](crate::widgets::color_area::ColorAreaPicker) resolved.
pub trait ColorObserver {
    fn on_color_changed(&mut self, color: Color);
}

/// Final outcome of a picker session, keyed by the caller's correlation key.
///
/// Exactly one of the two methods is called, exactly once, per session.
pub trait ColorSelectionListener {
    fn on_color_selected(&mut self, key: &str, color: Color);
    fn on_selection_cancelled(&mut self, key: &str);
}

impl<F: FnMut(Color)> HueObserver for F {
    #[inline]
    fn on_hue_changed(&mut self, color: Color) {
        self(color)
    }
}

impl<F: FnMut(Color)> ColorObserver for F {
    #[inline]
    fn on_color_changed(&mut self, color: Color) {
        self(color)
    }
}
