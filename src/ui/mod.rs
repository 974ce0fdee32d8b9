/// UI layer: immediate-mode widgets rendering the session state.
pub mod panels;
pub mod plot;
pub mod table;
