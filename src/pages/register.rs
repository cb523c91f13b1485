use super::{chrome, login::field, PageContext};
use crate::{
    state::PageId,
    view::{DomEvent, Element, VNode},
};

pub fn view(ctx: &PageContext) -> VNode {
    let navigator = ctx.navigator();
    let actions = ctx.actions();

    Element::new("div")
        .child(chrome::navbar(ctx))
        .child(
            Element::new("div")
                .style("min-height", "80vh")
                .style("display", "flex")
                .style("align-items", "center")
                .style("justify-content", "center")
                .style("padding", "2rem")
                .child(
                    Element::new("div")
                        .class("card fade-in")
                        .style("max-width", "400px")
                        .style("width", "100%")
                        .child(
                            Element::new("div")
                                .class("text-center mb-6")
                                .child(
                                    Element::new("div")
                                        .style("font-size", "48px")
                                        .style("margin-bottom", "1rem")
                                        .text("\u{1f3ad}"),
                                )
                                .child(Element::new("h3").class("mb-2").text("Create an account"))
                                .child(
                                    Element::new("p")
                                        .class("text-secondary")
                                        .text("Start training with your AI coach today"),
                                ),
                        )
                        .child(
                            Element::new("form")
                                .on(DomEvent::Submit, move |detail| {
                                    actions.register(
                                        detail.field("name"),
                                        detail.field("email"),
                                        detail.field("password"),
                                    );
                                })
                                .child(field("Full name", "name", "text", "Jane Doe"))
                                .child(field("Email", "email", "email", "your@email.com"))
                                .child(field(
                                    "Password",
                                    "password",
                                    "password",
                                    "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                                ))
                                .child(
                                    Element::new("button")
                                        .class("btn btn-primary w-full mb-4")
                                        .attr("type", "submit")
                                        .text("Create account"),
                                )
                                .child(
                                    Element::new("div")
                                        .class("text-center")
                                        .child(
                                            Element::new("span")
                                                .class("text-secondary")
                                                .style("font-size", "14px")
                                                .text("Already have an account? "),
                                        )
                                        .child(
                                            Element::new("a")
                                                .style("color", "var(--primary)")
                                                .style("cursor", "pointer")
                                                .on(
                                                    DomEvent::Click,
                                                    chrome::go(&navigator, PageId::Login),
                                                )
                                                .text("Log in"),
                                        ),
                                ),
                        ),
                ),
        )
        .into()
}
