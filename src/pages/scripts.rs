use super::{chrome, dashboard::signed_out, PageContext};
use crate::{
    state::{PageId, ScriptStatus},
    view::{DomEvent, Element, VNode},
};

pub fn view(ctx: &PageContext) -> VNode {
    if ctx.state().user.is_none() {
        return signed_out(ctx);
    }

    let navigator = ctx.navigator();

    let list = Element::new("div").class("grid grid-2").children(
        ctx.state().scripts.iter().map(|script| {
            let badge = match script.status {
                ScriptStatus::Analyzed => "badge badge-success",
                ScriptStatus::Processing => "badge badge-warning",
                ScriptStatus::Uploaded => "badge",
            };

            let open = (script.status == ScriptStatus::Analyzed).then(|| {
                Element::new("button")
                    .class("btn btn-primary btn-sm")
                    .on(
                        DomEvent::Click,
                        chrome::go(&navigator, PageId::ScriptAnalysis),
                    )
                    .text("View analysis")
            });

            Element::new("div")
                .class("card slide-up")
                .child(
                    Element::new("div")
                        .class("flex justify-between mb-2")
                        .child(Element::new("h4").text(script.title.clone()))
                        .child(Element::new("span").class(badge).text(script.status.label())),
                )
                .child(
                    Element::new("p")
                        .class("text-secondary mb-2")
                        .text(script.author.clone()),
                )
                .child(
                    Element::new("p")
                        .class("text-secondary mb-4")
                        .style("font-size", "14px")
                        .text(format!("Uploaded {}", script.upload_date)),
                )
                .child(open)
        }),
    );

    chrome::workspace(
        ctx,
        Element::new("div")
            .class("fade-in")
            .child(
                Element::new("div")
                    .class("flex justify-between mb-8")
                    .child(Element::new("h2").text("My scripts"))
                    .child(
                        Element::new("button")
                            .class("btn btn-primary")
                            .text("\u{2b06} Upload script"),
                    ),
            )
            .child(list),
    )
    .into()
}
