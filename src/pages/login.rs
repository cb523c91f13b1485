use super::{chrome, PageContext};
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
                                .child(Element::new("h3").class("mb-2").text("Welcome back"))
                                .child(
                                    Element::new("p")
                                        .class("text-secondary")
                                        .text("Log in to continue your training"),
                                ),
                        )
                        .child(
                            Element::new("form")
                                .on(DomEvent::Submit, move |detail| {
                                    actions
                                        .login(detail.field("email"), detail.field("password"));
                                })
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
                                        .text("Log in"),
                                )
                                .child(
                                    Element::new("div")
                                        .class("text-center")
                                        .child(
                                            Element::new("span")
                                                .class("text-secondary")
                                                .style("font-size", "14px")
                                                .text("No account yet? "),
                                        )
                                        .child(
                                            Element::new("a")
                                                .style("color", "var(--primary)")
                                                .style("cursor", "pointer")
                                                .on(
                                                    DomEvent::Click,
                                                    chrome::go(&navigator, PageId::Register),
                                                )
                                                .text("Register now"),
                                        ),
                                ),
                        ),
                ),
        )
        .into()
}

/// A labelled form input used by both the login and register cards.
pub(super) fn field(label: &str, name: &str, kind: &str, placeholder: &str) -> Element {
    Element::new("div")
        .class("mb-4")
        .child(
            Element::new("label")
                .class("mb-2")
                .style("display", "block")
                .style("font-weight", "500")
                .text(label),
        )
        .child(
            Element::new("input")
                .class("input")
                .attr("type", kind)
                .attr("name", name)
                .attr("placeholder", placeholder)
                .attr("required", "required"),
        )
}
