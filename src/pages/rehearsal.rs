use super::{chrome, dashboard::signed_out, PageContext};
use crate::{
    state::sample_script,
    view::{Element, VNode},
};

pub fn view(ctx: &PageContext) -> VNode {
    if ctx.state().user.is_none() {
        return signed_out(ctx);
    }

    let script_card = Element::new("div")
        .class("card")
        .child(Element::new("h4").class("mb-4").text("Scene text"))
        .child(
            Element::new("pre")
                .class("script-text")
                .text(sample_script()),
        );

    let partner_card = Element::new("div")
        .class("card")
        .child(Element::new("h4").class("mb-4").text("AI partner"))
        .child(
            Element::new("div").class("mb-4").child(
                Element::new("select")
                    .class("select mb-2")
                    .child(Element::new("option").text("Juliet (warm, lyrical)"))
                    .child(Element::new("option").text("Juliet (guarded, wry)"))
                    .child(Element::new("option").text("Neutral reader")),
            ),
        )
        .child(
            Element::new("p")
                .class("text-secondary text-center mb-4")
                .text("Your partner waits for your first line."),
        )
        .child(
            Element::new("div")
                .class("flex gap-2")
                .child(Element::new("button").class("btn btn-primary").text("\u{25b6} Start"))
                .child(Element::new("button").class("btn btn-outline").text("\u{23f8} Pause"))
                .child(Element::new("button").class("btn btn-outline").text("\u{23fa} Record")),
        );

    chrome::workspace(
        ctx,
        Element::new("div")
            .class("fade-in")
            .child(Element::new("h2").class("mb-8").text("Rehearsal studio"))
            .child(
                Element::new("div")
                    .class("split-layout")
                    .child(script_card)
                    .child(partner_card),
            ),
    )
    .into()
}
