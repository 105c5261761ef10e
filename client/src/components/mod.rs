//! Widget components: pad host, controls, preview panel, notice banner.

pub mod controls;
pub mod notice;
pub mod pad_host;
pub mod preview_panel;
