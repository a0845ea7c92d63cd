//! Message-key lexicon for the unlock flow.
//!
//! Keys are the contract between the state machines and the presentation
//! layer; the English copy here is the reference rendering. Lookup never
//! fails: an unknown key renders as itself, which keeps a missing entry
//! visible without breaking the screen.

pub fn message(key: &str) -> &str {
    match key {
        "action__unlock" => "Unlock",
        "action__forget_password" => "Forget Password",
        "action__delete" => "Delete",
        "form__field_is_required" => "This field is required",
        "form__reset_app" => "Reset App",
        "msg__wrong_password" => "Wrong password",
        "modal__reset_app_desc" => {
            "This will delete all the data you have created in Coffer. \
             After making sure your wallets are backed up, type RESET to confirm."
        }
        "content__unlock_tagline" => "The decentralized web awaits",
        _ => key,
    }
}
