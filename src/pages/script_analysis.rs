use super::{chrome, dashboard::signed_out, PageContext};
use crate::{
    state::{PageId, SceneAnalysis, ScriptStatus},
    view::{DomEvent, Element, VNode},
};

pub fn view(ctx: &PageContext) -> VNode {
    if ctx.state().user.is_none() {
        return signed_out(ctx);
    }

    let navigator = ctx.navigator();

    // The detail view always presents the most recent analyzed script.
    let script = ctx
        .state()
        .scripts
        .iter()
        .find(|script| script.status == ScriptStatus::Analyzed)
        .cloned();

    let Some(script) = script else {
        return chrome::workspace(
            ctx,
            Element::new("div")
                .class("fade-in text-center")
                .child(Element::new("h3").class("mb-4").text("No analyzed scripts yet"))
                .child(
                    Element::new("button")
                        .class("btn btn-primary")
                        .on(DomEvent::Click, chrome::go(&navigator, PageId::Scripts))
                        .text("Back to scripts"),
                ),
        )
        .into();
    };

    let analysis = SceneAnalysis::sample();

    chrome::workspace(
        ctx,
        Element::new("div")
            .class("fade-in")
            .child(
                Element::new("button")
                    .class("btn btn-ghost mb-4")
                    .on(DomEvent::Click, chrome::go(&navigator, PageId::Scripts))
                    .text("\u{2190} Back to scripts"),
            )
            .child(
                Element::new("div")
                    .class("mb-8")
                    .child(Element::new("h2").class("mb-2").text(script.title.clone()))
                    .child(
                        Element::new("p")
                            .class("text-secondary")
                            .text(script.author.clone()),
                    ),
            )
            .child(
                Element::new("div")
                    .class("card mb-6")
                    .child(Element::new("h4").class("mb-4").text("Scene text"))
                    .child(
                        Element::new("pre")
                            .class("script-text")
                            .text(script.content.clone()),
                    ),
            )
            .child(
                Element::new("div")
                    .class("grid grid-2 mb-6")
                    .child(
                        Element::new("div")
                            .class("card")
                            .child(Element::new("h4").class("mb-4").text("Objectives"))
                            .child(Element::new("p").class("mb-2").text(analysis.objectives.main.clone()))
                            .child(Element::new("ul").children(
                                analysis
                                    .objectives
                                    .beats
                                    .iter()
                                    .map(|beat| Element::new("li").text(beat.clone())),
                            )),
                    )
                    .child(
                        Element::new("div")
                            .class("card")
                            .child(Element::new("h4").class("mb-4").text("Obstacles"))
                            .child(Element::new("ul").children(
                                analysis
                                    .obstacles
                                    .internal
                                    .iter()
                                    .chain(analysis.obstacles.external.iter())
                                    .map(|obstacle| Element::new("li").text(obstacle.clone())),
                            )),
                    ),
            )
            .child(
                Element::new("div")
                    .class("card")
                    .child(Element::new("h4").class("mb-4").text("Coaching tips"))
                    .child(Element::new("ul").children(
                        analysis
                            .coaching_tips
                            .iter()
                            .map(|tip| Element::new("li").text(tip.clone())),
                    )),
            ),
    )
    .into()
}
