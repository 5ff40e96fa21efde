//! Focus and result-list navigation

use crate::model::Focus;
use super::AppController;

impl AppController {
    pub async fn cycle_focus(&self, forward: bool) {
        if forward {
            self.model.cycle_focus_forward().await;
        } else {
            self.model.cycle_focus_backward().await;
        }
        let focus = self.model.focus().await;
        tracing::trace!(?focus, "Focus changed");
    }

    /// Move the selected card. Only meaningful once results are listed.
    pub async fn move_selection(&self, up: bool) {
        if self.model.focus().await == Focus::Pincode {
            return;
        }
        if up {
            self.model.move_selection_up().await;
        } else {
            self.model.move_selection_down().await;
        }
    }
}
