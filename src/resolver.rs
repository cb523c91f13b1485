use crate::{
    pages::{self, PageContext},
    state::PageId,
    view::VNode,
};

/// A page-view constructor: a pure function from the current state (reached
/// through the context) to a freshly built subtree.
pub type PageView = fn(&PageContext) -> VNode;

/// Select the view responsible for a page. Total over [`PageId`]; raw
/// identifiers that named no known page were already folded to
/// [`PageId::Home`] when parsed, so resolution can never fail.
pub fn resolve(page: PageId) -> PageView {
    match page {
        PageId::Home => pages::home::view,
        PageId::Demo => pages::demo::view,
        PageId::Login => pages::login::view,
        PageId::Register => pages::register::view,
        PageId::Dashboard => pages::dashboard::view,
        PageId::Scripts => pages::scripts::view,
        PageId::ScriptAnalysis => pages::script_analysis::view,
        PageId::Rehearsal => pages::rehearsal::view,
        PageId::Recordings => pages::recordings::view,
        PageId::RecordingAnalysis => pages::recording_analysis::view,
        PageId::Analytics => pages::analytics::view,
    }
}
