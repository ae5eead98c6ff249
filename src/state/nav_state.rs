//! NavState - Active Page

use crate::app::navigation::ActivePage;

/// State for page navigation
#[derive(Debug, Default)]
pub struct NavState {
    /// Currently active page
    pub active_page: ActivePage,
}

impl NavState {
    /// Set the active page (from header or footer navigation)
    pub fn set_active_page(&mut self, page: ActivePage) {
        self.active_page = page;
    }
}
