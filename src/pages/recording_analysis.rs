use super::{chrome, dashboard::signed_out, PageContext};
use crate::{
    state::PageId,
    view::{DomEvent, Element, VNode},
};

pub fn view(ctx: &PageContext) -> VNode {
    if ctx.state().user.is_none() {
        return signed_out(ctx);
    }

    let navigator = ctx.navigator();

    // Detail is always shown for the latest take.
    let recording = ctx.state().recordings.first().cloned();

    let Some(recording) = recording else {
        return chrome::workspace(
            ctx,
            Element::new("div")
                .class("fade-in text-center")
                .child(Element::new("h3").class("mb-4").text("No recordings yet"))
                .child(
                    Element::new("button")
                        .class("btn btn-primary")
                        .on(DomEvent::Click, chrome::go(&navigator, PageId::Rehearsal))
                        .text("Record a take"),
                ),
        )
        .into();
    };

    let tabs = ["Overview", "Emotional", "Vocal", "Physical", "Coaching"];

    chrome::workspace(
        ctx,
        Element::new("div")
            .class("fade-in")
            .child(
                Element::new("button")
                    .class("btn btn-ghost mb-4")
                    .on(DomEvent::Click, chrome::go(&navigator, PageId::Recordings))
                    .text("\u{2190} Back to recordings"),
            )
            .child(
                Element::new("div")
                    .class("mb-8")
                    .child(Element::new("h2").class("mb-2").text(recording.title.clone()))
                    .child(
                        Element::new("p")
                            .class("text-secondary")
                            .text(format!("{} \u{b7} {}", recording.date, recording.duration)),
                    ),
            )
            .child(
                Element::new("div")
                    .class("card mb-6")
                    .child(Element::new("div").class("video-placeholder").text("\u{1f3ac}")),
            )
            .child(
                Element::new("div")
                    .class("tabs mb-6")
                    .children(tabs.into_iter().enumerate().map(|(index, label)| {
                        Element::new("button")
                            .class(if index == 0 { "tab active" } else { "tab" })
                            .text(label)
                    })),
            )
            .child(
                Element::new("div")
                    .class("card")
                    .child(Element::new("h4").class("mb-4").text("Overall"))
                    .child(
                        Element::new("div")
                            .class("score-ring mb-4")
                            .text(recording.score.to_string()),
                    )
                    .child(Element::new("p").class("text-secondary").text(
                        "A strong take. Emotional commitment carries the scene; keep \
                         an eye on pacing in the final beat.",
                    )),
            ),
    )
    .into()
}
