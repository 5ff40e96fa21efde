//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::Focus;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
                self.model.set_should_quit(true).await;
            }
            return Ok(());
        }

        // Help popup swallows everything except closing it
        if self.model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.model.toggle_help_popup().await;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::F(1) => {
                self.model.toggle_help_popup().await;
            }
            KeyCode::Tab => {
                let forward = !key.modifiers.contains(KeyModifiers::SHIFT);
                self.cycle_focus(forward).await;
            }
            KeyCode::BackTab => {
                self.cycle_focus(false).await;
            }
            KeyCode::Enter => {
                // Disabled while loading; submit_lookup refuses a second request
                if self.model.focus().await == Focus::Pincode {
                    let _ = self.submit_lookup().await;
                }
            }
            KeyCode::Up => {
                self.move_selection(true).await;
            }
            KeyCode::Down => {
                self.move_selection(false).await;
            }
            KeyCode::Esc => {
                self.model.clear_focused().await;
            }
            KeyCode::Backspace => {
                self.model.backspace_focused().await;
            }
            KeyCode::Char(c) => {
                self.model.append_to_focused(c).await;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use crate::controller::test_support::{
        controller_with, delhi, wait_until_settled, FakeAnswer, FakeProvider,
    };
    use crate::controller::AppController;
    use crate::model::{Focus, LookupPhase};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_text(controller: &AppController, text: &str) {
        for c in text.chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
        }
    }

    #[tokio::test]
    async fn typing_and_enter_runs_a_lookup() {
        let provider = FakeProvider::new(FakeAnswer::Records(delhi()));
        let controller = controller_with(provider.clone());

        type_text(&controller, "110001").await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        wait_until_settled(&controller.model).await;

        let state = controller.model.get_state().await;
        assert_eq!(state.pincode_input, "110001");
        assert_eq!(state.phase, LookupPhase::Success);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn enter_with_short_input_shows_validation_error() {
        let provider = FakeProvider::new(FakeAnswer::Records(delhi()));
        let controller = controller_with(provider.clone());

        type_text(&controller, "1100").await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();

        let state = controller.model.get_state().await;
        assert_eq!(
            state.phase.error_message(),
            Some("Please enter a valid 6-digit pincode.")
        );
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn filter_keys_go_to_filter_after_tab() {
        let provider = FakeProvider::new(FakeAnswer::Records(delhi()));
        let controller = controller_with(provider.clone());

        type_text(&controller, "110001").await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        wait_until_settled(&controller.model).await;

        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        assert_eq!(controller.model.focus().await, Focus::Filter);
        type_text(&controller, "PATH").await;

        let state = controller.model.get_state().await;
        assert_eq!(state.filter_text, "PATH");
        assert_eq!(state.filtered_len(), 1);
        assert_eq!(state.pincode_input, "110001");

        // Enter in the filter does not trigger another request
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        assert_eq!(provider.calls(), 1);

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert_eq!(controller.model.get_state().await.filtered_len(), 3);
    }

    #[tokio::test]
    async fn tab_stays_on_pincode_without_results() {
        let controller = controller_with(FakeProvider::new(FakeAnswer::Records(vec![])));
        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        assert_eq!(controller.model.focus().await, Focus::Pincode);
    }

    #[tokio::test]
    async fn arrows_move_selection_in_result_list() {
        let controller = controller_with(FakeProvider::new(FakeAnswer::Records(delhi())));
        type_text(&controller, "110001").await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        wait_until_settled(&controller.model).await;

        controller.handle_key_event(press(KeyCode::BackTab)).await.unwrap();
        assert_eq!(controller.model.focus().await, Focus::Results);
        controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Up)).await.unwrap();
        assert_eq!(controller.model.get_state().await.selected, 1);

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert_eq!(controller.model.focus().await, Focus::Pincode);
    }

    #[tokio::test]
    async fn help_popup_blocks_typing() {
        let controller = controller_with(FakeProvider::new(FakeAnswer::Records(delhi())));
        controller.handle_key_event(press(KeyCode::F(1))).await.unwrap();
        type_text(&controller, "12").await;
        assert!(controller.model.get_state().await.pincode_input.is_empty());
        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert!(!controller.model.is_help_popup_open().await);
    }

    #[tokio::test]
    async fn ctrl_c_quits_and_releases_are_ignored() {
        let controller = controller_with(FakeProvider::new(FakeAnswer::Records(delhi())));

        let mut release = press(KeyCode::Char('1'));
        release.kind = KeyEventKind::Release;
        controller.handle_key_event(release).await.unwrap();
        assert!(controller.model.get_state().await.pincode_input.is_empty());

        controller
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(controller.model.should_quit().await);
    }
}
