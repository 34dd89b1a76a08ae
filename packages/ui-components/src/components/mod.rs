pub mod button;
pub mod outside_close;
pub mod params_panel;

pub use button::*;
pub use outside_close::{Dismiss, OutsideClose};
pub use params_panel::{PanelEvent, PanelMessage, ParamsPanel, PANEL_WIDTH};
