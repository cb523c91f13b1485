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

    let grid = Element::new("div").class("grid grid-3").children(
        ctx.state().recordings.iter().map(|recording| {
            Element::new("div")
                .class("card slide-up")
                .child(
                    Element::new("div")
                        .class("video-placeholder mb-4")
                        .text("\u{1f3ac}"),
                )
                .child(Element::new("h4").class("mb-2").text(recording.title.clone()))
                .child(
                    Element::new("div")
                        .class("flex justify-between mb-4")
                        .child(
                            Element::new("span")
                                .class("text-secondary")
                                .text(format!("{} \u{b7} {}", recording.duration, recording.date)),
                        )
                        .child(
                            Element::new("span")
                                .class("text-primary font-bold")
                                .text(format!("Score: {}", recording.score)),
                        ),
                )
                .child(
                    Element::new("div")
                        .class("flex gap-2")
                        .child(
                            Element::new("button")
                                .class("btn btn-primary btn-sm")
                                .on(
                                    DomEvent::Click,
                                    chrome::go(&navigator, PageId::RecordingAnalysis),
                                )
                                .text("View analysis"),
                        )
                        .child(
                            Element::new("button")
                                .class("btn btn-outline btn-sm")
                                .text("Share"),
                        ),
                )
        }),
    );

    chrome::workspace(
        ctx,
        Element::new("div")
            .class("fade-in")
            .child(Element::new("h2").class("mb-8").text("My recordings"))
            .child(grid),
    )
    .into()
}
