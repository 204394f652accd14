//! Tinct UI: a hue bar and a saturation/brightness area picker on top of
//! `tinct-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tinct_ui::prelude::*;
//!
//! let mut dialog = ColorPickerDialog::new(
//!     &PickerConfig::default(),
//!     "accent",
//!     Color::from_rgb(255, 136, 0),
//!     Box::new(my_listener),
//! )?;
//!
//! let mut scene = UiScene::new();
//! let viewport = UiScene::natural_size(&dialog);
//!
//! // In your frame callback:
//! let input = UiInput { mouse_pos, mouse_pressed };
//! if let Some(draw_list) = scene.frame_if_dirty(&mut dialog, viewport, &input) {
//!     renderer.render(draw_list, &mut framebuffer);
//! }
//!
//! // When the user is done:
//! dialog.confirm();
//! ```
//!
//! # Using the widgets on their own
//!
//! [`HueBar`](widgets::HueBar) and [`ColorAreaPicker`](widgets::ColorAreaPicker)
//! work without the dialog. Share them as `Rc<RefCell<_>>` handles and bind
//! them with [`ColorAreaPicker::bind_hue_bar`](widgets::ColorAreaPicker::bind_hue_bar):
//!
//! ```rust,ignore
//! let bar = Rc::new(RefCell::new(HueBar::new(&config)));
//! let area = Rc::new(RefCell::new(ColorAreaPicker::new(&config)));
//! area.borrow_mut().set_color_observer(Some(Box::new(|c: Color| println!("{c}"))));
//! ColorAreaPicker::bind_hue_bar(&area, Rc::clone(&bar));
//! ```

pub mod config;
pub mod constraints;
pub mod dialog;
pub mod error;
pub mod event;
pub mod observer;
pub mod painter;
pub mod redraw;
pub mod scene;
pub mod widget;
pub mod widgets;

pub use dialog::ColorPickerDialog;
pub use error::PickerError;

/// Everything needed to embed a picker.
pub mod prelude {
    pub use crate::config::PickerConfig;
    pub use crate::constraints::Constraints;
    pub use crate::dialog::{ColorPickerDialog, DialogRegions};
    pub use crate::error::PickerError;
    pub use crate::event::{EventResult, PointerPhase, UiEvent};
    pub use crate::observer::{ColorObserver, ColorSelectionListener, HueObserver};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::Widget;
    pub use crate::widgets::{ColorAreaPicker, HueBar, Swatch};

    pub use tinct_engine::coords::{Rect, Vec2};
    pub use tinct_engine::paint::Color;
}
