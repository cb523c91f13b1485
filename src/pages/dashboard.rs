use super::{chrome, PageContext};
use crate::{
    state::PageId,
    view::{DomEvent, Element, VNode},
};

pub fn view(ctx: &PageContext) -> VNode {
    let navigator = ctx.navigator();
    let state = ctx.state();

    // The whole page is user-dependent; without a session there is nothing to
    // show but a prompt.
    let Some(user) = state.user.clone() else {
        drop(state);
        return signed_out(ctx);
    };

    let average_score = {
        let recordings = &state.recordings;
        if recordings.is_empty() {
            0
        } else {
            recordings.iter().map(|r| u32::from(r.score)).sum::<u32>()
                / recordings.len() as u32
        }
    };

    let stats = [
        ("\u{1f4dc}", state.scripts.len().to_string(), "Scripts analyzed"),
        ("\u{1f3ac}", state.recordings.len().to_string(), "Recordings"),
        ("\u{2b50}", average_score.to_string(), "Average score"),
        ("\u{1f525}", "6".to_string(), "Day streak"),
    ];

    let recent_scripts = Element::new("div")
        .class("card")
        .child(Element::new("h4").class("mb-6").text("Recent scripts"))
        .children(state.scripts.iter().map(|script| {
            Element::new("div")
                .class("mb-4")
                .child(Element::new("div").style("font-weight", "500").text(script.title.clone()))
                .child(
                    Element::new("div")
                        .class("text-secondary")
                        .style("font-size", "14px")
                        .text(format!("{} \u{b7} {}", script.author, script.status.label())),
                )
        }));

    let quick_actions = Element::new("div")
        .class("card")
        .child(Element::new("h4").class("mb-6").text("Quick actions"))
        .child(
            Element::new("button")
                .class("btn btn-primary w-full")
                .on(DomEvent::Click, chrome::go(&navigator, PageId::Scripts))
                .text("\u{1f4dd} Analyze a new script"),
        )
        .child(
            Element::new("button")
                .class("btn btn-outline w-full")
                .on(DomEvent::Click, chrome::go(&navigator, PageId::Rehearsal))
                .text("\u{1f3ad} Open the rehearsal studio"),
        )
        .child(
            Element::new("button")
                .class("btn btn-outline w-full")
                .on(DomEvent::Click, chrome::go(&navigator, PageId::Recordings))
                .text("\u{1f3ac} Review recordings"),
        );

    let recent_recordings = Element::new("div")
        .class("card")
        .child(Element::new("h4").class("mb-6").text("Recent recordings"))
        .children(state.recordings.iter().map(|recording| {
            Element::new("div")
                .class("slide-up mb-4")
                .child(
                    Element::new("div")
                        .style("font-weight", "500")
                        .text(recording.title.clone()),
                )
                .child(
                    Element::new("div")
                        .class("text-secondary")
                        .style("font-size", "14px")
                        .text(format!(
                            "{} \u{b7} {} \u{b7} Score {}",
                            recording.date, recording.duration, recording.score
                        )),
                )
        }));

    drop(state);

    chrome::workspace(
        ctx,
        Element::new("div")
            .class("fade-in")
            .child(
                Element::new("div")
                    .class("mb-8")
                    .child(Element::new("h2").text(format!("Welcome back, {}", user.name))),
            )
            .child(
                Element::new("div")
                    .class("grid grid-4 mb-8")
                    .children(stats.into_iter().map(|(icon, value, label)| {
                        Element::new("div")
                            .class("stat-card slide-up")
                            .child(Element::new("div").style("font-size", "32px").text(icon))
                            .child(Element::new("div").class("stat-value").text(value))
                            .child(Element::new("div").class("stat-label").text(label))
                    })),
            )
            .child(
                Element::new("div")
                    .class("grid grid-2 mb-8")
                    .child(recent_scripts)
                    .child(quick_actions),
            )
            .child(recent_recordings),
    )
    .into()
}

/// Prompt shown when a workspace page is reached without a session.
pub(super) fn signed_out(ctx: &PageContext) -> VNode {
    let navigator = ctx.navigator();

    Element::new("div")
        .child(chrome::navbar(ctx))
        .child(
            Element::new("div")
                .class("text-center")
                .style("padding", "6rem 2rem")
                .child(Element::new("h3").class("mb-4").text("You are not logged in"))
                .child(
                    Element::new("p")
                        .class("text-secondary mb-6")
                        .text("Log in to see your workspace."),
                )
                .child(
                    Element::new("button")
                        .class("btn btn-primary")
                        .on(DomEvent::Click, chrome::go(&navigator, PageId::Login))
                        .text("Log in"),
                ),
        )
        .into()
}
