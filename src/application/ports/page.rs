//! Page surface port interface
//!
//! The handlers never touch the page directly; they go through this trait,
//! which exposes exactly the operations they perform. The element ids below
//! are the page contract the handlers depend on.

/// Element ids the handlers read from and write to
pub mod elements {
    // Submission form controls
    pub const COMPANY_NAME: &str = "company-name";
    pub const TICKER: &str = "ticker";
    pub const QUARTER: &str = "quarter";
    pub const YEAR: &str = "year";
    pub const CALL_DATE: &str = "call-date";
    pub const TRANSCRIPT_TEXT: &str = "transcript-text";

    // Result regions
    pub const SUMMARY_TEXT: &str = "summary-text";
    pub const SENTIMENT_TEXT: &str = "sentiment-text";
    pub const VIEW_FULL_LINK: &str = "view-full-link";
    pub const PROCESSING_RESULT: &str = "processing-result";
}

/// Port for the page the handlers are attached to.
///
/// None of these operations suspend; the network call is the only
/// suspension point in the system.
pub trait PageSurface: Send + Sync {
    /// Read a form control's current value. Unset controls read as empty.
    fn field(&self, id: &str) -> String;

    /// Rewrite a form control's value
    fn set_field(&self, id: &str, value: &str);

    /// Write text into a display region
    fn set_text(&self, id: &str, text: &str);

    /// Set the target of a link element
    fn set_link(&self, id: &str, href: &str);

    /// Show or hide a region
    fn set_visible(&self, id: &str, visible: bool);

    /// Current label of the submit control
    fn submit_label(&self) -> String;

    /// Replace the submit control's label
    fn set_submit_label(&self, label: &str);

    /// Enable or disable the submit control
    fn set_submit_enabled(&self, enabled: bool);

    /// Show a blocking alert to the user
    fn alert(&self, message: &str);

    /// Reset all form controls to empty/default
    fn reset_form(&self);
}
