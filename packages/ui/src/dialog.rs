/// Ask the user to confirm a destructive action. Native builds have no
/// dialog and always proceed.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Confirm without dialog: {}", message);
        true
    }
}
